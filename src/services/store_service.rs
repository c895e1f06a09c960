use crate::{
    audit::log_audit,
    dto::stores::{StoreDetails, StoreList, StoreSearchQuery},
    error::{AppError, AppResult},
    matcher::TextMatcher,
    models::Store,
    query::{ProductCriteria, build_product_query},
    response::{ApiResponse, Meta},
    services::{current_store_id, ensure_valid, form_payload, product_service::products_view},
    state::AppState,
    validation::FormFields,
};

pub async fn list_stores(
    state: &AppState,
    query: StoreSearchQuery,
) -> AppResult<ApiResponse<StoreList>> {
    let stores = state.api.list_stores().await?;
    let items = match query.search {
        Some(text) => TextMatcher::new(&text, state.search_mode).filter(stores),
        None => stores,
    };

    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Stores", StoreList { items }, Some(meta)))
}

/// Opens the detail view of the store with the given name.
///
/// The session only switches once both the store and its products loaded.
pub async fn select_store(state: &AppState, name: &str) -> AppResult<ApiResponse<StoreDetails>> {
    let store = state
        .api
        .find_stores_by_name(name)
        .await?
        .into_iter()
        .next()
        .ok_or(AppError::NotFound)?;

    let query = build_product_query(store.id, &ProductCriteria::None, state.search_mode);
    let products = state.api.list_products(&query).await?;

    state.session.lock().await.select_store(store.clone());
    tracing::debug!(store_id = store.id, "store selected");

    let data = StoreDetails {
        store,
        products: products_view(products),
    };
    Ok(ApiResponse::success("Store", data, Some(Meta::empty())))
}

pub async fn create_store(state: &AppState, form: FormFields) -> AppResult<ApiResponse<Store>> {
    ensure_valid(&form)?;
    let store = state.api.create_store(&form_payload(form)).await?;

    log_audit(
        "store_create",
        "Stores",
        serde_json::json!({ "store_id": store.id }),
    );

    Ok(ApiResponse::success(
        "Store created",
        store,
        Some(Meta::empty()),
    ))
}

/// Deletes the current store after its products and returns the remaining stores.
pub async fn delete_current_store(state: &AppState) -> AppResult<ApiResponse<StoreList>> {
    let store_id = current_store_id(state).await?;

    state.api.delete_store_products(store_id).await?;
    state.api.delete_store(store_id).await?;

    {
        let mut session = state.session.lock().await;
        if session.current_store_id() == Some(store_id) {
            session.clear();
        }
    }

    log_audit(
        "store_delete",
        "Stores",
        serde_json::json!({ "store_id": store_id }),
    );

    let items = state.api.list_stores().await?;
    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Deleted", StoreList { items }, Some(meta)))
}
