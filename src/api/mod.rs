//! HTTP handlers for the catalog routes.
//!
//! Handlers stay thin: pull the path id and the form pairs out of the
//! request, hand them to the service, and let `Outcome`/`AppError` turn
//! themselves into responses. Form bodies are read as ordered pairs so
//! repeated fields (multi-selects) keep every value.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod health;
pub mod pages;
