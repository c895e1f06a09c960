use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::{matcher::SearchMode, models::ProductStatus};

/// Sortable product table columns, keyed by their header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SortColumn {
    Name,
    Price,
    Specs,
    SupplierInfo,
    CountryOfOrigin,
    ProdCompany,
    Rating,
}

impl SortColumn {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Name" => Some(SortColumn::Name),
            "Price" => Some(SortColumn::Price),
            "Specs" => Some(SortColumn::Specs),
            "SupplierInfo" | "SupplerInfo" => Some(SortColumn::SupplierInfo),
            "Country of origin" => Some(SortColumn::CountryOfOrigin),
            "Prod. company" => Some(SortColumn::ProdCompany),
            "Rating" => Some(SortColumn::Rating),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Price => "Price",
            SortColumn::Specs => "Specs",
            SortColumn::SupplierInfo => "SupplierInfo",
            SortColumn::CountryOfOrigin => "Country of origin",
            SortColumn::ProdCompany => "Prod. company",
            SortColumn::Rating => "Rating",
        }
    }

    /// Backend field the column orders by.
    ///
    /// `SupplerInfo` is the spelling the collection API expects for ordering.
    pub fn field(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Price => "Price",
            SortColumn::Specs => "Specs",
            SortColumn::SupplierInfo => "SupplerInfo",
            SortColumn::CountryOfOrigin => "MadeIn",
            SortColumn::ProdCompany => "ProductionCompanyName",
            SortColumn::Rating => "Rating",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductCriteria {
    Status(ProductStatus),
    Search(String),
    Sort {
        column: SortColumn,
        direction: SortDirection,
    },
    None,
}

/// Filter/sort request against `/Stores/{id}/rel_Products`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    pub store_id: i64,
    pub filter: Option<Value>,
    pub order: Option<String>,
}

impl QueryDescriptor {
    pub fn path(&self) -> String {
        format!("Stores/{}/rel_Products", self.store_id)
    }

    /// Query-string pairs in the form the collection API reads them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = &self.filter {
            pairs.push(("filter", filter.to_string()));
        }
        if let Some(order) = &self.order {
            pairs.push(("filter[order]", order.clone()));
        }
        pairs
    }
}

/// Fields the server-side search matches with a case-insensitive regexp.
pub const SEARCH_FIELDS: [&str; 5] = [
    "Name",
    "Specs",
    "SupplierInfo",
    "MadeIn",
    "ProductionCompanyName",
];

pub fn build_product_query(
    store_id: i64,
    criteria: &ProductCriteria,
    mode: SearchMode,
) -> QueryDescriptor {
    match criteria {
        ProductCriteria::Status(status) => QueryDescriptor {
            store_id,
            filter: Some(json!({
                "where": { "StoreId": store_id, "Status": status.as_str() }
            })),
            order: None,
        },
        ProductCriteria::Search(text) => {
            let fragment = mode.pattern_source(text);
            let regexp = format!("/{fragment}/i");
            let mut any: Vec<Value> = SEARCH_FIELDS
                .iter()
                .map(|field| json!({ *field: { "regexp": regexp } }))
                .collect();
            any.push(json!({ "Price": { "like": text } }));
            QueryDescriptor {
                store_id,
                filter: Some(json!({
                    "where": { "and": [ { "or": any }, { "StoreId": store_id } ] }
                })),
                order: None,
            }
        }
        ProductCriteria::Sort { column, direction } => QueryDescriptor {
            store_id,
            filter: None,
            order: Some(format!("{} {}", column.field(), direction.as_str())),
        },
        ProductCriteria::None => QueryDescriptor {
            store_id,
            filter: None,
            order: None,
        },
    }
}

/// Filter for `GET /Stores` selecting a store by its exact name.
pub fn store_by_name_filter(name: &str) -> Value {
    json!({ "where": { "Name": name } })
}
