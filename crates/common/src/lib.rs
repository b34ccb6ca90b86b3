//! Shared pieces used by both the server library and the binary:
//! response types that are not tied to the customer domain, and logging setup.

pub mod types;
pub mod utils;
