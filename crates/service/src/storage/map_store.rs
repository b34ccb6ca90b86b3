use std::{
    collections::{hash_map::Entry, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{customer::Customer, errors::StoreError, store::CustomerStore};

/// In-memory customer store.
///
/// Keeps a `HashMap<id, Customer>` behind an async `RwLock`. Every
/// check-then-write runs under a single write guard, so two concurrent
/// creates of the same ID cannot both succeed.
#[derive(Clone, Default)]
pub struct MapStore {
    inner: Arc<RwLock<HashMap<String, Customer>>>,
}

impl MapStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Build a store pre-populated with `customers`. Later duplicates overwrite earlier ones.
    pub fn with_customers<I>(customers: I) -> Arc<Self>
    where
        I: IntoIterator<Item = Customer>,
    {
        let map = customers.into_iter().map(|c| (c.id.clone(), c)).collect();
        Arc::new(Self { inner: Arc::new(RwLock::new(map)) })
    }
}

#[async_trait]
impl CustomerStore for MapStore {
    async fn create(&self, customer: Customer) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        match map.entry(customer.id.clone()) {
            Entry::Occupied(e) => Err(StoreError::DuplicateKey(e.key().clone())),
            Entry::Vacant(e) => {
                debug!(id = %e.key(), "insert customer");
                e.insert(customer);
                Ok(())
            }
        }
    }

    async fn update(&self, id: &str, customer: Customer) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        let existing = map.get_mut(id).ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *existing = customer;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        map.remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn get_by_id(&self, id: &str) -> Result<Customer, StoreError> {
        let map = self.inner.read().await;
        map.get(id).cloned().ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn get_all(&self) -> Result<Vec<Customer>, StoreError> {
        let map = self.inner.read().await;
        Ok(map.values().cloned().collect())
    }

    async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
