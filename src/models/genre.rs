//! Genre model

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;

/// Genre record. Names are unique by value; uniqueness is enforced with a
/// case-insensitive lookup before insert, not a constraint violation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    /// Canonical path for this genre.
    pub fn url(&self) -> String {
        format!("/catalog/genres/{}", self.id)
    }

    /// Serialized form with the derived URL included.
    pub fn view(&self) -> Value {
        let mut v = json!(self);
        v["url"] = json!(self.url());
        v
    }
}
