use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    response::ApiResponse,
    services::session_service,
    session::SessionSnapshot,
    state::AppState,
    validation::{FormFields, ValidationResult},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/reset", post(reset_session))
}

pub fn forms_router() -> Router<AppState> {
    Router::new().route("/validate", post(validate_form))
}

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current store and sort state", body = ApiResponse<SessionSnapshot>)
    ),
    tag = "Session"
)]
pub async fn get_session(State(state): State<AppState>) -> Json<ApiResponse<SessionSnapshot>> {
    Json(session_service::snapshot(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/session/reset",
    responses(
        (status = 200, description = "Sort state cleared", body = ApiResponse<SessionSnapshot>)
    ),
    tag = "Session"
)]
pub async fn reset_session(State(state): State<AppState>) -> Json<ApiResponse<SessionSnapshot>> {
    Json(session_service::reset_sort(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/forms/validate",
    request_body = std::collections::BTreeMap<String, String>,
    responses(
        (status = 200, description = "Per-field verdict; nothing is sent upstream", body = ApiResponse<ValidationResult>)
    ),
    tag = "Session"
)]
pub async fn validate_form(Json(form): Json<FormFields>) -> Json<ApiResponse<ValidationResult>> {
    Json(session_service::validate_form(&form))
}
