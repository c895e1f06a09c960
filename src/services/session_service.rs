use crate::{
    response::ApiResponse,
    session::SessionSnapshot,
    state::AppState,
    validation::{FormFields, ValidationResult, validate},
};

pub async fn snapshot(state: &AppState) -> ApiResponse<SessionSnapshot> {
    let snapshot = state.session.lock().await.snapshot();
    ApiResponse::success("Session", snapshot, None)
}

/// Explicit reset action: the products table goes back to unsorted.
pub async fn reset_sort(state: &AppState) -> ApiResponse<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.sort_cycle.reset();
    ApiResponse::success("Session reset", session.snapshot(), None)
}

/// Runs the form rules without dispatching anything.
pub fn validate_form(form: &FormFields) -> ApiResponse<ValidationResult> {
    let result = validate(form);
    let message = if result.is_valid() {
        "Valid"
    } else {
        "Invalid"
    };
    ApiResponse::success(message, result, None)
}
