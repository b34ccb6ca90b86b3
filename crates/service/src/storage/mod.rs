pub mod map_store;
