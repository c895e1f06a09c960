use serde_json::Value;

use crate::{
    audit::log_audit,
    client::ClientError,
    dto::products::{ProductsView, SortedProducts},
    error::{AppError, AppResult},
    matcher::TextMatcher,
    models::{Product, ProductStatus},
    query::{ProductCriteria, SortColumn, build_product_query},
    response::{ApiResponse, Meta},
    services::{current_store_id, ensure_valid, form_payload},
    state::AppState,
    validation::FormFields,
};

pub(crate) fn products_view(products: Vec<Product>) -> ProductsView {
    let counts = crate::status::aggregate(&products);
    let total = products.len();
    ProductsView {
        products,
        counts,
        total,
    }
}

async fn fetch(
    state: &AppState,
    store_id: i64,
    criteria: &ProductCriteria,
) -> AppResult<Vec<Product>> {
    let query = build_product_query(store_id, criteria, state.search_mode);
    Ok(state.api.list_products(&query).await?)
}

async fn current_view(state: &AppState, store_id: i64) -> AppResult<ProductsView> {
    let products = fetch(state, store_id, &ProductCriteria::None).await?;
    Ok(products_view(products))
}

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductsView>> {
    let store_id = current_store_id(state).await?;
    let view = current_view(state, store_id).await?;
    let meta = Meta::new(view.total);
    Ok(ApiResponse::success("Products", view, Some(meta)))
}

/// Products with one status. Badge counts describe the filtered list while
/// `total` stays the store-wide product count.
pub async fn filter_by_status(
    state: &AppState,
    status: ProductStatus,
) -> AppResult<ApiResponse<ProductsView>> {
    let store_id = current_store_id(state).await?;
    let products = fetch(state, store_id, &ProductCriteria::Status(status)).await?;
    let all = fetch(state, store_id, &ProductCriteria::None).await?;

    let mut view = products_view(products);
    view.total = all.len();
    let meta = Meta::new(view.products.len());
    Ok(ApiResponse::success("Products", view, Some(meta)))
}

/// Server-side search; when the collection API rejects the query the store's
/// products are fetched unfiltered and matched locally instead.
pub async fn search_products(
    state: &AppState,
    text: &str,
) -> AppResult<ApiResponse<ProductsView>> {
    let store_id = current_store_id(state).await?;
    let products = match fetch(state, store_id, &ProductCriteria::Search(text.to_string())).await
    {
        Ok(products) => products,
        Err(AppError::Upstream(ClientError::Rejected { status, .. })) => {
            tracing::warn!(status, "server-side search rejected, matching locally");
            let all = fetch(state, store_id, &ProductCriteria::None).await?;
            TextMatcher::new(text, state.search_mode).filter(all)
        }
        Err(err) => return Err(err),
    };

    let view = products_view(products);
    let meta = Meta::new(view.total);
    Ok(ApiResponse::success("Products", view, Some(meta)))
}

/// Advances the sort toggle for `column` and loads the table in the new order.
///
/// The toggle moves as soon as the click is accepted, before the request
/// resolves, so rapid clicks each count.
pub async fn sort_products(
    state: &AppState,
    column: &str,
) -> AppResult<ApiResponse<SortedProducts>> {
    let column = SortColumn::from_label(column)
        .ok_or_else(|| AppError::BadRequest(format!("unknown sort column `{column}`")))?;

    let (store_id, step, sort) = {
        let mut session = state.session.lock().await;
        let store_id = session.current_store_id().ok_or(AppError::NoStoreSelected)?;
        let step = session.sort_cycle.advance(column);
        (store_id, step, session.sort_cycle.state())
    };

    let criteria = match step.direction() {
        Some(direction) => ProductCriteria::Sort { column, direction },
        None => ProductCriteria::None,
    };
    let products = fetch(state, store_id, &criteria).await?;

    let meta = Meta::new(products.len());
    Ok(ApiResponse::success(
        "Products",
        SortedProducts { products, sort },
        Some(meta),
    ))
}

pub async fn get_product(state: &AppState, id: i64) -> AppResult<ApiResponse<Product>> {
    let product = match state.api.get_product(id).await {
        Ok(product) => product,
        Err(ClientError::Rejected { status: 404, .. }) => return Err(AppError::NotFound),
        Err(err) => return Err(err.into()),
    };
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn create_product(
    state: &AppState,
    form: FormFields,
) -> AppResult<ApiResponse<ProductsView>> {
    let store_id = current_store_id(state).await?;
    ensure_valid(&form)?;

    let mut payload = form_payload(form);
    payload.insert("StoreId".into(), Value::from(store_id));
    let product = state.api.create_product(&payload).await?;

    log_audit(
        "product_create",
        "Products",
        serde_json::json!({ "product_id": product.id, "store_id": store_id }),
    );

    let view = current_view(state, store_id).await?;
    let meta = Meta::new(view.total);
    Ok(ApiResponse::success("Product created", view, Some(meta)))
}

/// Full replacement of a product of the current store.
pub async fn update_product(
    state: &AppState,
    id: i64,
    form: FormFields,
) -> AppResult<ApiResponse<ProductsView>> {
    let store_id = current_store_id(state).await?;
    ensure_valid(&form)?;

    let mut payload = form_payload(form);
    payload.insert("id".into(), Value::from(id));
    payload.insert("StoreId".into(), Value::from(store_id));
    state.api.update_product(id, &payload).await?;

    log_audit(
        "product_update",
        "Products",
        serde_json::json!({ "product_id": id, "store_id": store_id }),
    );

    let view = current_view(state, store_id).await?;
    let meta = Meta::new(view.total);
    Ok(ApiResponse::success("Updated", view, Some(meta)))
}

pub async fn delete_product(state: &AppState, id: i64) -> AppResult<ApiResponse<ProductsView>> {
    let store_id = current_store_id(state).await?;
    state.api.delete_product(id).await?;

    log_audit(
        "product_delete",
        "Products",
        serde_json::json!({ "product_id": id, "store_id": store_id }),
    );

    let view = current_view(state, store_id).await?;
    let meta = Meta::new(view.total);
    Ok(ApiResponse::success("Deleted", view, Some(meta)))
}
