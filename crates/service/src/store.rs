use async_trait::async_trait;

use crate::{customer::Customer, errors::StoreError};

/// Storage contract for customer records.
/// Handlers only see this trait, so a durable backend can replace the
/// in-memory one without touching them.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a new record. Fails with `DuplicateKey` if the ID is taken.
    async fn create(&self, customer: Customer) -> Result<(), StoreError>;
    /// Replace the record stored at `id`. Fails with `NotFound` if absent.
    async fn update(&self, id: &str, customer: Customer) -> Result<(), StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Customer, StoreError>;
    /// All records, in no particular order.
    async fn get_all(&self) -> Result<Vec<Customer>, StoreError>;
    async fn len(&self) -> usize;
}
