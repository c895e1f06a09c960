use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Product, ProductStatus};

/// Per-status product counts shown on the filter badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusCounts {
    pub ok: usize,
    pub storage: usize,
    pub out_of_stock: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.ok + self.storage + self.out_of_stock
    }
}

/// Anything that is neither `OK` nor `OUT_OF_STOCK` counts as storage.
pub fn aggregate(products: &[Product]) -> StatusCounts {
    products
        .iter()
        .fold(StatusCounts::default(), |mut counts, product| {
            match product.status {
                ProductStatus::Ok => counts.ok += 1,
                ProductStatus::OutOfStock => counts.out_of_stock += 1,
                ProductStatus::Storage | ProductStatus::Other(_) => counts.storage += 1,
            }
            counts
        })
}
