use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw create/edit form as submitted, field name to text value.
pub type FormFields = BTreeMap<String, String>;

static DIGITS_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

// Local part of word chars, dots, dashes and asterisks; dotted domain labels;
// a 2-4 char TLD. The whole address is optional.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.*-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4})?$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    Valid,
    Invalid,
}

/// Per-field verdict for a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ValidationResult {
    #[schema(value_type = BTreeMap<String, FieldState>)]
    pub fields: BTreeMap<String, FieldState>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|state| *state == FieldState::Valid)
    }

    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, state)| **state == FieldState::Invalid)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn get(&self, field: &str) -> Option<FieldState> {
        self.fields.get(field).copied()
    }
}

pub fn validate(fields: &FormFields) -> ValidationResult {
    let fields = fields
        .iter()
        .map(|(name, value)| {
            let state = if field_is_valid(name, value) {
                FieldState::Valid
            } else {
                FieldState::Invalid
            };
            (name.clone(), state)
        })
        .collect();
    ValidationResult { fields }
}

fn field_is_valid(name: &str, value: &str) -> bool {
    match name {
        "PhoneNumber" | "Price" | "Rating" => DIGITS_ONLY.is_match(value),
        "Email" => EMAIL.is_match(value),
        _ => !value.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn email_rule() {
        assert_eq!(validate(&form(&[("Email", "a@b.co")])).get("Email"), Some(FieldState::Valid));
        assert_eq!(
            validate(&form(&[("Email", "not-an-email")])).get("Email"),
            Some(FieldState::Invalid)
        );
        assert_eq!(validate(&form(&[("Email", "")])).get("Email"), Some(FieldState::Valid));
        assert_eq!(
            validate(&form(&[("Email", "first.last*x@mail.shop.info")])).get("Email"),
            Some(FieldState::Valid)
        );
        assert_eq!(
            validate(&form(&[("Email", "a@b.store")])).get("Email"),
            Some(FieldState::Invalid)
        );
    }

    #[test]
    fn numeric_fields_accept_digits_only() {
        assert_eq!(validate(&form(&[("Price", "12")])).get("Price"), Some(FieldState::Valid));
        assert_eq!(validate(&form(&[("Price", "12.5")])).get("Price"), Some(FieldState::Invalid));
        assert_eq!(validate(&form(&[("Rating", "")])).get("Rating"), Some(FieldState::Invalid));
        assert_eq!(
            validate(&form(&[("PhoneNumber", "+375 29")])).get("PhoneNumber"),
            Some(FieldState::Invalid)
        );
        assert_eq!(validate(&form(&[("Rating", "٣")])).get("Rating"), Some(FieldState::Invalid));
    }

    #[test]
    fn other_fields_are_required() {
        let result = validate(&form(&[("Name", "Kettle"), ("Specs", ""), ("FloorArea", "12.5")]));
        assert_eq!(result.get("Name"), Some(FieldState::Valid));
        assert_eq!(result.get("Specs"), Some(FieldState::Invalid));
        assert_eq!(result.get("FloorArea"), Some(FieldState::Valid));
        assert!(!result.is_valid());
        assert_eq!(result.invalid_fields(), vec!["Specs"]);
    }

    #[test]
    fn one_entry_per_input_field() {
        let input = form(&[("Name", "A"), ("Price", "1"), ("Email", "")]);
        let result = validate(&input);
        assert_eq!(result.fields.len(), input.len());
        assert!(result.is_valid());
    }

    #[test]
    fn serializes_as_flat_map() {
        let result = validate(&form(&[("Name", ""), ("Price", "3")]));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({ "Name": "invalid", "Price": "valid" })
        );
    }
}
