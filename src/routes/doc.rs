use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        products::{
            ProductSearchRequest, ProductsView, SortRequest, SortedProducts, StatusFilterRequest,
        },
        stores::{SelectStoreRequest, StoreDetails, StoreList, StoreSearchQuery},
    },
    models::{Product, Store},
    query::{SortColumn, SortDirection},
    response::{ApiResponse, Meta},
    routes::{health, products, session, stores},
    session::SessionSnapshot,
    sort_cycle::SortCycleState,
    status::StatusCounts,
    validation::{FieldState, ValidationResult},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        stores::list_stores,
        stores::create_store,
        stores::select_store,
        stores::delete_current_store,
        products::list_products,
        products::filter_products,
        products::search_products,
        products::sort_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        session::get_session,
        session::reset_session,
        session::validate_form
    ),
    components(
        schemas(
            Store,
            Product,
            StoreList,
            StoreDetails,
            StoreSearchQuery,
            SelectStoreRequest,
            ProductsView,
            SortedProducts,
            StatusFilterRequest,
            ProductSearchRequest,
            SortRequest,
            StatusCounts,
            SortColumn,
            SortDirection,
            SortCycleState,
            SessionSnapshot,
            FieldState,
            ValidationResult,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductsView>,
            ApiResponse<StoreList>,
            ApiResponse<SessionSnapshot>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Stores", description = "Store list, selection and lifecycle"),
        (name = "Products", description = "Products of the selected store"),
        (name = "Session", description = "Admin session state and form checks"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
