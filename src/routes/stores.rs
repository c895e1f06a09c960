use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{delete, get, post},
};

use crate::{
    dto::stores::{SelectStoreRequest, StoreDetails, StoreList, StoreSearchQuery},
    error::AppResult,
    models::Store,
    response::ApiResponse,
    services::store_service,
    state::AppState,
    validation::FormFields,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route("/select", post(select_store))
        .route("/current", delete(delete_current_store))
}

#[utoipa::path(
    get,
    path = "/api/stores",
    params(StoreSearchQuery),
    responses(
        (status = 200, description = "List stores, optionally matched against a search pattern", body = ApiResponse<StoreList>),
        (status = 502, description = "Collection API unavailable"),
    ),
    tag = "Stores"
)]
pub async fn list_stores(
    State(state): State<AppState>,
    Query(query): Query<StoreSearchQuery>,
) -> AppResult<Json<ApiResponse<StoreList>>> {
    let resp = store_service::list_stores(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/stores",
    request_body = std::collections::BTreeMap<String, String>,
    responses(
        (status = 200, description = "Store created", body = ApiResponse<Store>),
        (status = 422, description = "Form validation failed"),
    ),
    tag = "Stores"
)]
pub async fn create_store(
    State(state): State<AppState>,
    Json(form): Json<FormFields>,
) -> AppResult<Json<ApiResponse<Store>>> {
    let resp = store_service::create_store(&state, form).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/stores/select",
    request_body = SelectStoreRequest,
    responses(
        (status = 200, description = "Store details with its products", body = ApiResponse<StoreDetails>),
        (status = 404, description = "No store with that name"),
    ),
    tag = "Stores"
)]
pub async fn select_store(
    State(state): State<AppState>,
    Json(payload): Json<SelectStoreRequest>,
) -> AppResult<Json<ApiResponse<StoreDetails>>> {
    let resp = store_service::select_store(&state, &payload.name).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/stores/current",
    responses(
        (status = 200, description = "Store and its products deleted; remaining stores", body = ApiResponse<StoreList>),
        (status = 409, description = "No store selected"),
    ),
    tag = "Stores"
)]
pub async fn delete_current_store(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<StoreList>>> {
    let resp = store_service::delete_current_store(&state).await?;
    Ok(Json(resp))
}
