//! Book instance (physical copy) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;

/// Loan status of a physical copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyStatus {
    Available,
    Maintenance,
    Loaned,
    Reserved,
}

impl CopyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyStatus::Available => "Available",
            CopyStatus::Maintenance => "Maintenance",
            CopyStatus::Loaned => "Loaned",
            CopyStatus::Reserved => "Reserved",
        }
    }

    /// Parse a form value. Empty input falls back to the default status;
    /// anything unrecognized is rejected.
    pub fn parse(s: &str) -> Option<CopyStatus> {
        match s {
            "" => Some(CopyStatus::default()),
            "Available" => Some(CopyStatus::Available),
            "Maintenance" => Some(CopyStatus::Maintenance),
            "Loaned" => Some(CopyStatus::Loaned),
            "Reserved" => Some(CopyStatus::Reserved),
            _ => None,
        }
    }
}

impl Default for CopyStatus {
    fn default() -> Self {
        CopyStatus::Maintenance
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Physical copy of a book.
///
/// `book_title` is filled when the query joins the books table (list and
/// detail views), None otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: i32,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<DateTime<Utc>>,
    #[sqlx(default)]
    #[serde(default)]
    pub book_title: Option<String>,
}

impl BookInstance {
    /// Canonical path for this copy.
    pub fn url(&self) -> String {
        format!("/catalog/bookinstances/{}", self.id)
    }

    /// Due date formatted for display, e.g. "Jun 14, 1986".
    pub fn due_back_formatted(&self) -> Option<String> {
        self.due_back.map(|d| d.format("%b %d, %Y").to_string())
    }

    /// Serialized form with derived display fields included.
    pub fn view(&self) -> Value {
        let mut v = json!(self);
        v["url"] = json!(self.url());
        v["due_back_formatted"] = json!(self.due_back_formatted());
        v["book_url"] = json!(format!("/catalog/books/{}", self.book_id));
        v
    }
}
