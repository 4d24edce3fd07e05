// src/shared/api/validation.rs
use chrono::{DateTime, NaiveDate};

use crate::shared::api::FieldError;

/// Collects field errors for one request body.
///
/// Checks run in declaration order, so the resulting `errors` array lists
/// failures in the same order the fields were checked.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field must be present and contain something other than whitespace.
    pub fn require(&mut self, param: &str, value: &Option<String>, msg: &str) -> &mut Self {
        if non_empty(value).is_none() {
            self.errors.push(FieldError::body(param, msg));
        }
        self
    }

    pub fn check(&mut self, param: &str, ok: bool, msg: &str) -> &mut Self {
        if !ok {
            self.errors.push(FieldError::body(param, msg));
        }
        self
    }

    /// Parses an optional date field. An empty field yields `None` without
    /// an error; a non-empty but unparsable one records `invalid_msg`.
    pub fn date(&mut self, param: &str, value: &Option<String>, invalid_msg: &str) -> Option<NaiveDate> {
        let raw = non_empty(value)?;
        match parse_date(raw) {
            Some(date) => Some(date),
            None => {
                self.errors.push(FieldError::body(param, invalid_msg));
                None
            }
        }
    }

    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Trimmed value, or `None` when absent or blank.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
