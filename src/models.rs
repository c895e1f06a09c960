use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;

/// A retail location as stored by the collection API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Store {
    #[serde(rename = "id")]
    pub id: i64,
    #[serde(deserialize_with = "text_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub email: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub address: String,
    #[serde(default)]
    pub established: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub floor_area: f64,
}

/// An item owned by exactly one [`Store`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    #[serde(rename = "id")]
    pub id: i64,
    #[serde(deserialize_with = "text_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "number_or_text")]
    pub price: f64,
    #[serde(default, deserialize_with = "text_or_null")]
    pub specs: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub supplier_info: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub made_in: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub production_company_name: String,
    #[serde(default, deserialize_with = "number_or_text")]
    pub rating: f64,
    #[schema(value_type = String, example = "OK")]
    #[serde(deserialize_with = "status_or_null")]
    pub status: ProductStatus,
    pub store_id: i64,
}

// The collection API stores whatever the panel posted, so text fields may
// come back as `null` and numeric fields as strings.
fn text_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn status_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ProductStatus, D::Error> {
    text_or_null(deserializer).map(ProductStatus::from)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn number_or_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberOrText::Number(n)) => Ok(n),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(0.0),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a number, got {text:?}"))),
    }
}

/// Stock state of a product.
///
/// Unknown wire values are kept verbatim in `Other` so they survive a
/// read-modify-write cycle; for counting purposes they behave like `Storage`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    Ok,
    Storage,
    OutOfStock,
    Other(String),
}

impl ProductStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProductStatus::Ok => "OK",
            ProductStatus::Storage => "STORAGE",
            ProductStatus::OutOfStock => "OUT_OF_STOCK",
            ProductStatus::Other(raw) => raw,
        }
    }

    /// Parses the human label shown on a filter badge.
    pub fn from_badge_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Ok" => Some(ProductStatus::Ok),
            "Storage" => Some(ProductStatus::Storage),
            "Out of stock" => Some(ProductStatus::OutOfStock),
            _ => None,
        }
    }
}

impl From<String> for ProductStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OK" => ProductStatus::Ok,
            "STORAGE" => ProductStatus::Storage,
            "OUT_OF_STOCK" => ProductStatus::OutOfStock,
            _ => ProductStatus::Other(raw),
        }
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
