#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use store_admin::{
    client::{ClientError, ClientResult, CollectionApi, Payload},
    matcher::{SearchMode, TextMatcher},
    models::{Product, ProductStatus, Store},
    query::QueryDescriptor,
    state::AppState,
};

/// In-memory collection API that interprets query descriptors well enough
/// for the orchestration tests and records every call it receives.
#[derive(Default)]
pub struct FakeCollection {
    pub stores: Mutex<Vec<Store>>,
    pub products: Mutex<Vec<Product>>,
    pub calls: Mutex<Vec<String>>,
    pub queries: Mutex<Vec<QueryDescriptor>>,
    pub payloads: Mutex<Vec<Payload>>,
    /// Server rejects regexp search filters with this status.
    pub reject_search: Mutex<Option<u16>>,
    /// Every call fails with this status.
    pub fail_all: Mutex<Option<u16>>,
}

impl FakeCollection {
    pub fn seeded() -> Arc<Self> {
        let fake = FakeCollection::default();
        *fake.stores.lock().unwrap() = vec![
            store(1, "Central", "Main st. 1"),
            store(2, "Harbour", "Dock road 7"),
        ];
        *fake.products.lock().unwrap() = vec![
            product(10, 1, "Kettle", 30.0, "OK"),
            product(11, 1, "Toaster", 45.0, "STORAGE"),
            product(12, 1, "Blender", 80.0, "OUT_OF_STOCK"),
            product(13, 1, "Mixer", 55.0, "REFURBISHED"),
            product(20, 2, "Anchor", 300.0, "OK"),
        ];
        Arc::new(fake)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> QueryDescriptor {
        self.queries.lock().unwrap().last().cloned().expect("a product query")
    }

    fn record(&self, call: impl Into<String>) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call.into());
        match *self.fail_all.lock().unwrap() {
            Some(status) => Err(ClientError::Rejected {
                status,
                body: "unavailable".into(),
            }),
            None => Ok(()),
        }
    }

    fn run_query(&self, query: &QueryDescriptor) -> ClientResult<Vec<Product>> {
        let mut products: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.store_id == query.store_id)
            .cloned()
            .collect();

        if let Some(filter) = &query.filter {
            let clause = &filter["where"];
            if let Some(status) = clause.get("Status").and_then(Value::as_str) {
                let status = ProductStatus::from(status.to_string());
                products.retain(|p| p.status == status);
            } else if let Some(and) = clause.get("and") {
                if let Some(status) = *self.reject_search.lock().unwrap() {
                    return Err(ClientError::Rejected {
                        status,
                        body: "regexp not supported".into(),
                    });
                }
                let regexp = and[0]["or"][0]["Name"]["regexp"].as_str().unwrap_or_default();
                let source = regexp
                    .strip_prefix('/')
                    .and_then(|r| r.strip_suffix("/i"))
                    .unwrap_or(regexp);
                let matcher = TextMatcher::new(source, SearchMode::Pattern);
                products.retain(|p| matcher.matches(p));
            }
        }

        if let Some(order) = &query.order {
            let (field, direction) = order.split_once(' ').expect("field and direction");
            let key = |p: &Product| serde_json::to_value(p).unwrap()[field].to_string();
            products.sort_by_key(key);
            if direction == "DESC" {
                products.reverse();
            }
        }
        Ok(products)
    }
}

#[async_trait]
impl CollectionApi for FakeCollection {
    async fn list_stores(&self) -> ClientResult<Vec<Store>> {
        self.record("GET Stores")?;
        Ok(self.stores.lock().unwrap().clone())
    }

    async fn find_stores_by_name(&self, name: &str) -> ClientResult<Vec<Store>> {
        self.record(format!("GET Stores name={name}"))?;
        Ok(self
            .stores
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.name == name)
            .cloned()
            .collect())
    }

    async fn create_store(&self, payload: &Payload) -> ClientResult<Store> {
        self.record("POST Stores")?;
        self.payloads.lock().unwrap().push(payload.clone());
        let mut stores = self.stores.lock().unwrap();
        let id = stores.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let name = payload.get("Name").and_then(Value::as_str).unwrap_or_default();
        let created = store(id, name, "");
        stores.push(created.clone());
        Ok(created)
    }

    async fn delete_store(&self, store_id: i64) -> ClientResult<()> {
        self.record(format!("DELETE Stores/{store_id}"))?;
        self.stores.lock().unwrap().retain(|s| s.id != store_id);
        Ok(())
    }

    async fn delete_store_products(&self, store_id: i64) -> ClientResult<()> {
        self.record(format!("DELETE Stores/{store_id}/rel_Products"))?;
        self.products.lock().unwrap().retain(|p| p.store_id != store_id);
        Ok(())
    }

    async fn list_products(&self, query: &QueryDescriptor) -> ClientResult<Vec<Product>> {
        self.record(format!("GET {}", query.path()))?;
        self.queries.lock().unwrap().push(query.clone());
        self.run_query(query)
    }

    async fn get_product(&self, product_id: i64) -> ClientResult<Product> {
        self.record(format!("GET Products/{product_id}"))?;
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
            .ok_or(ClientError::Rejected {
                status: 404,
                body: "not found".into(),
            })
    }

    async fn create_product(&self, payload: &Payload) -> ClientResult<Product> {
        self.record("POST Products")?;
        self.payloads.lock().unwrap().push(payload.clone());
        let mut products = self.products.lock().unwrap();
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let created = product(
            id,
            payload["StoreId"].as_i64().unwrap_or_default(),
            payload.get("Name").and_then(Value::as_str).unwrap_or_default(),
            payload.get("Price").and_then(Value::as_f64).unwrap_or_default(),
            payload.get("Status").and_then(Value::as_str).unwrap_or("OK"),
        );
        products.push(created.clone());
        Ok(created)
    }

    async fn update_product(&self, product_id: i64, payload: &Payload) -> ClientResult<Product> {
        self.record(format!("PUT Products/{product_id}"))?;
        self.payloads.lock().unwrap().push(payload.clone());
        let mut products = self.products.lock().unwrap();
        let existing = products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(ClientError::Rejected {
                status: 404,
                body: "not found".into(),
            })?;
        if let Some(name) = payload.get("Name").and_then(Value::as_str) {
            existing.name = name.to_string();
        }
        Ok(existing.clone())
    }

    async fn delete_product(&self, product_id: i64) -> ClientResult<()> {
        self.record(format!("DELETE Products/{product_id}"))?;
        self.products.lock().unwrap().retain(|p| p.id != product_id);
        Ok(())
    }
}

pub fn state_with(fake: Arc<FakeCollection>) -> AppState {
    AppState::new(fake, SearchMode::Pattern)
}

pub fn store(id: i64, name: &str, address: &str) -> Store {
    Store {
        id,
        name: name.to_string(),
        email: format!("{}@shop.com", name.to_lowercase()),
        phone_number: "5550100".into(),
        address: address.to_string(),
        established: None,
        floor_area: 100.0,
    }
}

pub fn product(id: i64, store_id: i64, name: &str, price: f64, status: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        specs: format!("{name} specs"),
        supplier_info: "ACME".into(),
        made_in: "Spain".into(),
        production_company_name: "Home Goods".into(),
        rating: 4.0,
        status: ProductStatus::from(status.to_string()),
        store_id,
    }
}

pub fn form(pairs: &[(&str, &str)]) -> store_admin::validation::FormFields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
