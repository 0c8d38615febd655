//! Book model and list projections

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;

use super::{Author, Genre};

/// Full book record.
///
/// `author` and `genres` are reference expansions filled in by the
/// repository when the caller asks for them (detail and update views);
/// plain fetches leave them empty.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub summary: String,
    pub isbn: String,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<Author>,
    #[sqlx(skip)]
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Book {
    /// Canonical path for this book.
    pub fn url(&self) -> String {
        format!("/catalog/books/{}", self.id)
    }

    /// Identifiers of the linked genres (empty set when unexpanded).
    pub fn genre_ids(&self) -> Vec<i32> {
        self.genres.iter().map(|g| g.id).collect()
    }

    /// Serialized form with derived fields and expanded references.
    pub fn view(&self) -> Value {
        let mut v = json!(self);
        v["url"] = json!(self.url());
        if let Some(ref author) = self.author {
            v["author"] = author.view();
        }
        v["genres"] = json!(self.genres.iter().map(Genre::view).collect::<Vec<_>>());
        v
    }
}

/// Book row for the list view, with the author reference expanded to a
/// display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookListRow {
    pub id: i32,
    pub title: String,
    pub author_name: String,
}

impl BookListRow {
    pub fn url(&self) -> String {
        format!("/catalog/books/{}", self.id)
    }

    pub fn view(&self) -> Value {
        let mut v = json!(self);
        v["url"] = json!(self.url());
        v
    }
}

/// Minimal book reference for selection fields (book-instance forms).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookTitle {
    pub id: i32,
    pub title: String,
}
