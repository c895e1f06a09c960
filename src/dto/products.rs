use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{Product, ProductStatus},
    sort_cycle::SortCycleState,
    status::StatusCounts,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusFilterRequest {
    /// `OK`, `STORAGE`, `OUT_OF_STOCK` or the badge labels `Ok`, `Storage`, `Out of stock`.
    pub status: String,
}

impl StatusFilterRequest {
    pub fn parse_status(&self) -> Option<ProductStatus> {
        ProductStatus::from_badge_label(&self.status).or_else(|| {
            match ProductStatus::from(self.status.trim().to_string()) {
                ProductStatus::Other(_) => None,
                known => Some(known),
            }
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductSearchRequest {
    pub text: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SortRequest {
    /// Column header label, e.g. `Price` or `Country of origin`.
    pub column: String,
}

/// Product table contents plus the numbers on the filter badges.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductsView {
    pub products: Vec<Product>,
    pub counts: StatusCounts,
    /// Figure on the "All" badge.
    pub total: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SortedProducts {
    pub products: Vec<Product>,
    pub sort: SortCycleState,
}
