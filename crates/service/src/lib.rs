//! Customer domain and storage layer.
//! - `customer`: the record type and its JSON shape.
//! - `store`: the storage contract consumed by HTTP handlers.
//! - `storage`: concrete store implementations.

pub mod customer;
pub mod errors;
pub mod store;
pub mod storage;

pub use customer::Customer;
pub use errors::StoreError;
pub use store::CustomerStore;
pub use storage::map_store::MapStore;
