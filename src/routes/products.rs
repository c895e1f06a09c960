use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::products::{
        ProductSearchRequest, ProductsView, SortRequest, SortedProducts, StatusFilterRequest,
    },
    error::{AppError, AppResult},
    models::Product,
    response::ApiResponse,
    services::product_service,
    state::AppState,
    validation::FormFields,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/filter", post(filter_products))
        .route("/search", post(search_products))
        .route("/sort", post(sort_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Products of the current store", body = ApiResponse<ProductsView>),
        (status = 409, description = "No store selected"),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductsView>>> {
    let resp = product_service::list_products(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products/filter",
    request_body = StatusFilterRequest,
    responses(
        (status = 200, description = "Products with the given status", body = ApiResponse<ProductsView>),
        (status = 400, description = "Unknown status"),
    ),
    tag = "Products"
)]
pub async fn filter_products(
    State(state): State<AppState>,
    Json(payload): Json<StatusFilterRequest>,
) -> AppResult<Json<ApiResponse<ProductsView>>> {
    let status = payload
        .parse_status()
        .ok_or_else(|| AppError::BadRequest(format!("unknown status `{}`", payload.status)))?;
    let resp = product_service::filter_by_status(&state, status).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products/search",
    request_body = ProductSearchRequest,
    responses(
        (status = 200, description = "Products matching the search text", body = ApiResponse<ProductsView>)
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Json(payload): Json<ProductSearchRequest>,
) -> AppResult<Json<ApiResponse<ProductsView>>> {
    let resp = product_service::search_products(&state, &payload.text).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products/sort",
    request_body = SortRequest,
    responses(
        (status = 200, description = "Products in the next sort order for the column", body = ApiResponse<SortedProducts>),
        (status = 400, description = "Unknown column"),
    ),
    tag = "Products"
)]
pub async fn sort_products(
    State(state): State<AppState>,
    Json(payload): Json<SortRequest>,
) -> AppResult<Json<ApiResponse<SortedProducts>>> {
    let resp = product_service::sort_products(&state, &payload.column).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = std::collections::BTreeMap<String, String>,
    responses(
        (status = 200, description = "Product created; refreshed table", body = ApiResponse<ProductsView>),
        (status = 422, description = "Form validation failed"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(form): Json<FormFields>,
) -> AppResult<Json<ApiResponse<ProductsView>>> {
    let resp = product_service::create_product(&state, form).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::get_product(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = std::collections::BTreeMap<String, String>,
    responses(
        (status = 200, description = "Product replaced; refreshed table", body = ApiResponse<ProductsView>),
        (status = 422, description = "Form validation failed"),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<FormFields>,
) -> AppResult<Json<ApiResponse<ProductsView>>> {
    let resp = product_service::update_product(&state, id, form).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted; refreshed table", body = ApiResponse<ProductsView>)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<ProductsView>>> {
    let resp = product_service::delete_product(&state, id).await?;
    Ok(Json(resp))
}
