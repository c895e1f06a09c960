use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How user-typed search text becomes a pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Text is used as a regular expression fragment as typed.
    #[default]
    Pattern,
    /// Text is escaped so it only ever matches itself.
    Literal,
}

impl SearchMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pattern" | "regex" => Some(SearchMode::Pattern),
            "literal" => Some(SearchMode::Literal),
            _ => None,
        }
    }

    pub fn pattern_source<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            SearchMode::Pattern => Cow::Borrowed(text),
            SearchMode::Literal => Cow::Owned(regex::escape(text)),
        }
    }
}

/// Case-insensitive matcher over the scalar fields of a record.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    regex: Option<Regex>,
}

impl TextMatcher {
    pub fn new(text: &str, mode: SearchMode) -> Self {
        let source = mode.pattern_source(text);
        let regex = match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(err) => {
                tracing::warn!(pattern = %text, error = %err, "search text is not a valid pattern");
                None
            }
        };
        Self { regex }
    }

    /// False when the pattern failed to compile.
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    pub fn matches<T: Serialize>(&self, record: &T) -> bool {
        let Some(regex) = &self.regex else {
            return false;
        };
        match serde_json::to_value(record) {
            Ok(Value::Object(fields)) => fields
                .values()
                .filter_map(scalar_text)
                .any(|text| regex.is_match(&text)),
            Ok(other) => scalar_text(&other).is_some_and(|text| regex.is_match(&text)),
            Err(_) => false,
        }
    }

    pub fn filter<T: Serialize>(&self, records: Vec<T>) -> Vec<T> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Convenience wrapper building a one-off matcher in pattern mode.
pub fn matches<T: Serialize>(record: &T, text: &str) -> bool {
    TextMatcher::new(text, SearchMode::Pattern).matches(record)
}

// Numbers and booleans are matched through their textual form; nulls and
// nested values never match.
fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(number_text(n))),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

// Whole floats print without a fraction, so `120.0` reads as `120`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}
