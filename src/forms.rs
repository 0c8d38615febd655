//! Form-field parsing boundary.
//!
//! The routing layer hands every form body over as ordered `(name, value)`
//! pairs. `FormFields` resolves each field into an explicit zero/one/many
//! shape exactly once, so nothing downstream has to probe whether a
//! multi-select arrived absent, scalar, or repeated.

use indexmap::IndexMap;

/// Shape of a submitted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Missing,
    One(String),
    Many(Vec<String>),
}

impl FieldValue {
    fn push(&mut self, value: String) {
        *self = match std::mem::replace(self, FieldValue::Missing) {
            FieldValue::Missing => FieldValue::One(value),
            FieldValue::One(first) => FieldValue::Many(vec![first, value]),
            FieldValue::Many(mut values) => {
                values.push(value);
                FieldValue::Many(values)
            }
        };
    }

    /// First submitted value, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            FieldValue::Missing => None,
            FieldValue::One(v) => Some(v),
            FieldValue::Many(values) => values.first().map(String::as_str),
        }
    }

    /// Normalize to a set: absent ⇒ empty, one ⇒ singleton, many ⇒ as given.
    pub fn as_set(&self) -> Vec<String> {
        match self {
            FieldValue::Missing => Vec::new(),
            FieldValue::One(v) => vec![v.clone()],
            FieldValue::Many(values) => values.clone(),
        }
    }
}

/// Flat string-keyed form payload.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    fields: IndexMap<String, FieldValue>,
}

impl FormFields {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields: IndexMap<String, FieldValue> = IndexMap::new();
        for (name, value) in pairs {
            fields
                .entry(name)
                .or_insert(FieldValue::Missing)
                .push(value);
        }
        Self { fields }
    }

    pub fn get(&self, name: &str) -> &FieldValue {
        const MISSING: &FieldValue = &FieldValue::Missing;
        self.fields.get(name).unwrap_or(MISSING)
    }

    /// First value of a field, empty string when absent.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).first().unwrap_or("")
    }

    /// All values of a field, normalized to a set.
    pub fn values(&self, name: &str) -> Vec<String> {
        self.get(name).as_set()
    }
}
