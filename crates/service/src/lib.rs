//! Repository layer turning product requests into store operations.
//! - Separates request handling from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types for the transport boundary to map.

pub mod errors;
pub mod product_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;
