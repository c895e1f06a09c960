use serde_json::{Map, Number, Value};

use crate::{
    client::Payload,
    error::{AppError, AppResult},
    state::AppState,
    validation::{FormFields, validate},
};

pub mod product_service;
pub mod session_service;
pub mod store_service;

/// Id of the store whose detail view is open.
pub(crate) async fn current_store_id(state: &AppState) -> AppResult<i64> {
    state
        .session
        .lock()
        .await
        .current_store_id()
        .ok_or(AppError::NoStoreSelected)
}

/// Rejects the form before anything is sent upstream.
pub(crate) fn ensure_valid(form: &FormFields) -> AppResult<()> {
    let result = validate(form);
    if result.is_valid() {
        return Ok(());
    }
    tracing::debug!(fields = ?result.invalid_fields(), "form rejected");
    Err(AppError::Validation(result))
}

/// Fields the collection API stores as numbers.
const NUMERIC_FIELDS: [&str; 3] = ["Price", "Rating", "FloorArea"];

/// Form fields as a JSON body. Numeric fields are sent as numbers, the rest
/// as the submitted text.
pub(crate) fn form_payload(form: FormFields) -> Payload {
    form.into_iter()
        .map(|(name, text)| {
            let value = field_value(&name, text);
            (name, value)
        })
        .collect::<Map<String, Value>>()
}

fn field_value(name: &str, text: String) -> Value {
    if NUMERIC_FIELDS.contains(&name) {
        let trimmed = text.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::from(n);
        }
        if let Some(n) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }
    Value::String(text)
}
