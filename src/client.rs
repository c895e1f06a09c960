//! Access to the remote Stores/Products collection API.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    models::{Product, Store},
    query::{QueryDescriptor, store_by_name_filter},
};

/// JSON object sent as a create/update body.
pub type Payload = Map<String, Value>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// No HTTP response arrived.
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with status >= 400.
    #[error("request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[async_trait]
pub trait CollectionApi: Send + Sync {
    async fn list_stores(&self) -> ClientResult<Vec<Store>>;
    async fn find_stores_by_name(&self, name: &str) -> ClientResult<Vec<Store>>;
    async fn create_store(&self, payload: &Payload) -> ClientResult<Store>;
    async fn delete_store(&self, store_id: i64) -> ClientResult<()>;
    async fn delete_store_products(&self, store_id: i64) -> ClientResult<()>;

    async fn list_products(&self, query: &QueryDescriptor) -> ClientResult<Vec<Product>>;
    async fn get_product(&self, product_id: i64) -> ClientResult<Product>;
    async fn create_product(&self, payload: &Payload) -> ClientResult<Product>;
    async fn update_product(&self, product_id: i64, payload: &Payload) -> ClientResult<Product>;
    async fn delete_product(&self, product_id: i64) -> ClientResult<()>;
}

/// [`CollectionApi`] over HTTP with reqwest. No request timeout is set.
#[derive(Debug, Clone)]
pub struct RestCollectionClient {
    client: Client,
    base_url: String,
}

impl RestCollectionClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = Client::builder().build().map_err(ClientError::Network)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(%method, %url, "collection api request");
        self.client.request(method, url)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await.map_err(ClientError::Network)?;
        let response = Self::check_status(response).await?;
        let body = response.bytes().await.map_err(ClientError::Network)?;
        serde_json::from_slice(&body).map_err(|err| ClientError::InvalidResponse(err.to_string()))
    }

    async fn send_discarding(request: RequestBuilder) -> ClientResult<()> {
        let response = request.send().await.map_err(ClientError::Network)?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status < StatusCode::BAD_REQUEST {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body, "collection api rejected request");
        Err(ClientError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl CollectionApi for RestCollectionClient {
    async fn list_stores(&self) -> ClientResult<Vec<Store>> {
        Self::send(self.request(Method::GET, "Stores")).await
    }

    async fn find_stores_by_name(&self, name: &str) -> ClientResult<Vec<Store>> {
        let filter = store_by_name_filter(name).to_string();
        Self::send(self.request(Method::GET, "Stores").query(&[("filter", filter)])).await
    }

    async fn create_store(&self, payload: &Payload) -> ClientResult<Store> {
        Self::send(self.request(Method::POST, "Stores").json(payload)).await
    }

    async fn delete_store(&self, store_id: i64) -> ClientResult<()> {
        Self::send_discarding(self.request(Method::DELETE, &format!("Stores/{store_id}"))).await
    }

    async fn delete_store_products(&self, store_id: i64) -> ClientResult<()> {
        Self::send_discarding(
            self.request(Method::DELETE, &format!("Stores/{store_id}/rel_Products")),
        )
        .await
    }

    async fn list_products(&self, query: &QueryDescriptor) -> ClientResult<Vec<Product>> {
        let mut request = self.request(Method::GET, &query.path());
        let pairs = query.query_pairs();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        Self::send(request).await
    }

    async fn get_product(&self, product_id: i64) -> ClientResult<Product> {
        Self::send(self.request(Method::GET, &format!("Products/{product_id}"))).await
    }

    async fn create_product(&self, payload: &Payload) -> ClientResult<Product> {
        Self::send(self.request(Method::POST, "Products").json(payload)).await
    }

    async fn update_product(&self, product_id: i64, payload: &Payload) -> ClientResult<Product> {
        let request = self.request(Method::PUT, &format!("Products/{product_id}"));
        Self::send(request.json(payload)).await
    }

    async fn delete_product(&self, product_id: i64) -> ClientResult<()> {
        Self::send_discarding(self.request(Method::DELETE, &format!("Products/{product_id}"))).await
    }
}
