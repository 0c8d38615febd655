//! Author model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;

/// Author record from the store.
///
/// `name`, `lifespan` and `url` are derived display fields, never persisted;
/// they are merged into the serialized form by [`Author::view`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub date_of_death: Option<DateTime<Utc>>,
}

impl Author {
    /// Display name, "family, first".
    pub fn name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Lifespan as "dd/MM/yyyy - dd/MM/yyyy", with Unknown/Present
    /// placeholders for missing dates.
    pub fn lifespan(&self) -> String {
        let birth = self
            .date_of_birth
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let death = self
            .date_of_death
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "Present".to_string());
        format!("{} - {}", birth, death)
    }

    /// Canonical path for this author.
    pub fn url(&self) -> String {
        format!("/catalog/authors/{}", self.id)
    }

    /// Serialized form with derived display fields included.
    pub fn view(&self) -> Value {
        let mut v = json!(self);
        v["name"] = json!(self.name());
        v["lifespan"] = json!(self.lifespan());
        v["url"] = json!(self.url());
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn author(birth: Option<(i32, u32, u32)>, death: Option<(i32, u32, u32)>) -> Author {
        let at = |(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
        Author {
            id: 7,
            first_name: "Jorge".to_string(),
            family_name: "Borges".to_string(),
            date_of_birth: birth.map(at),
            date_of_death: death.map(at),
        }
    }

    #[test]
    fn test_name_is_family_first() {
        assert_eq!(author(None, None).name(), "Borges, Jorge");
    }

    #[test]
    fn test_lifespan_full() {
        let a = author(Some((1899, 8, 24)), Some((1986, 6, 14)));
        assert_eq!(a.lifespan(), "24/08/1899 - 14/06/1986");
    }

    #[test]
    fn test_lifespan_placeholders() {
        assert_eq!(author(None, None).lifespan(), "Unknown - Present");
    }

    #[test]
    fn test_view_includes_virtuals() {
        let v = author(None, None).view();
        assert_eq!(v["url"], "/catalog/authors/7");
        assert_eq!(v["name"], "Borges, Jorge");
        assert_eq!(v["first_name"], "Jorge");
    }
}
