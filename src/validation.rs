//! Field sanitization and validation.
//!
//! Every rule appends to an ordered failure list and nothing here returns
//! `Err`: a submission with failures is a normal outcome that re-renders the
//! form, not an error. Raw values are trimmed and HTML-escaped before being
//! echoed back into the view.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::Serialize;

/// One field-level or cross-field rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Offending field, None for cross-field rules.
    pub field: Option<String>,
    pub msg: String,
}

impl ValidationFailure {
    pub fn new(field: Option<&str>, msg: impl Into<String>) -> Self {
        Self {
            field: field.map(str::to_string),
            msg: msg.into(),
        }
    }
}

/// Escape a value for safe redisplay inside the form.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Trim and escape a raw field value.
pub fn sanitize(raw: &str) -> String {
    escape(raw.trim())
}

/// Ordered accumulator for validation failures.
#[derive(Debug, Default)]
pub struct FieldErrors {
    failures: Vec<ValidationFailure>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cross-field failure.
    pub fn push(&mut self, field: Option<&str>, msg: impl Into<String>) {
        self.failures.push(ValidationFailure::new(field, msg));
    }

    /// Value must be non-empty after trimming.
    pub fn require(&mut self, field: &str, value: &str, msg: &str) -> bool {
        if value.is_empty() {
            self.push(Some(field), msg);
            false
        } else {
            true
        }
    }

    /// Value must be at least `min` characters (empty counts as too short).
    pub fn min_length(&mut self, field: &str, value: &str, min: usize, msg: &str) {
        if value.chars().count() < min {
            self.push(Some(field), msg);
        }
    }

    /// Value must be at most `max` characters.
    pub fn max_length(&mut self, field: &str, value: &str, max: usize, msg: &str) {
        if value.chars().count() > max {
            self.push(Some(field), msg);
        }
    }

    /// Non-empty value must contain only alphanumeric characters.
    pub fn alphanumeric(&mut self, field: &str, value: &str, msg: &str) {
        if !value.is_empty() && !value.chars().all(char::is_alphanumeric) {
            self.push(Some(field), msg);
        }
    }

    /// Optional ISO-8601 date: empty is fine, anything else must parse.
    pub fn optional_date(&mut self, field: &str, value: &str, msg: &str) -> Option<NaiveDate> {
        if value.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.push(Some(field), msg);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }
}

/// Anchor a bare form date at midnight of the configured fixed offset and
/// store it as UTC.
pub fn normalize_date(date: NaiveDate, utc_offset_hours: i32) -> DateTime<Utc> {
    let offset = FixedOffset::east_opt(utc_offset_hours * 3600)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset"));
    let midnight = date.and_hms_opt(0, 0, 0).expect("midnight exists");
    match offset.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            dt.with_timezone(&Utc)
        }
        // Unreachable for fixed offsets; keep the date either way.
        chrono::LocalResult::None => Utc.from_utc_datetime(&midnight),
    }
}
