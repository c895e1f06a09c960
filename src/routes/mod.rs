use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod products;
pub mod session;
pub mod stores;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/stores", stores::router())
        .nest("/products", products::router())
        .nest("/session", session::router())
        .nest("/forms", session::forms_router())
}
