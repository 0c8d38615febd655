//! Data models for the library catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookListRow, BookTitle};
pub use book_instance::{BookInstance, CopyStatus};
pub use genre::Genre;
