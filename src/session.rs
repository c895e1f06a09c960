use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::Store,
    sort_cycle::{SortCycle, SortCycleState},
};

/// State of the single active admin session: the store whose detail view is
/// open and the sort toggle of its products table.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    current_store: Option<Store>,
    pub sort_cycle: SortCycle,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_store(&self) -> Option<&Store> {
        self.current_store.as_ref()
    }

    pub fn current_store_id(&self) -> Option<i64> {
        self.current_store.as_ref().map(|store| store.id)
    }

    /// Opening another store's detail view starts with an unsorted table.
    pub fn select_store(&mut self, store: Store) {
        self.current_store = Some(store);
        self.sort_cycle.reset();
    }

    pub fn clear(&mut self) {
        self.current_store = None;
        self.sort_cycle.reset();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            store_id: self.current_store_id(),
            store_name: self.current_store.as_ref().map(|s| s.name.clone()),
            sort: self.sort_cycle.state(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SessionSnapshot {
    pub store_id: Option<i64>,
    pub store_name: Option<String>,
    pub sort: SortCycleState,
}
