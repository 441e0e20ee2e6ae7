//! # JSON Storage Module
//!
//! File-based storage implementation for the balance ledger. The whole
//! dataset persists as a single JSON document in a fixed-key slot.

pub mod connection;
pub mod snapshot_repository;

pub use connection::JsonConnection;
pub use snapshot_repository::{SnapshotRepository, BALANCE_DATA_KEY};
