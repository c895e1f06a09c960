use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{dto::products::ProductsView, models::Store};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StoreSearchQuery {
    /// Case-insensitive pattern matched against every store field.
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectStoreRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct StoreList {
    #[schema(value_type = Vec<Store>)]
    pub items: Vec<Store>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StoreDetails {
    pub store: Store,
    pub products: ProductsView,
}
