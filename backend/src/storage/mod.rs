//! # Storage Module
//!
//! Persistence layer for the balance ledger: the storage abstraction
//! traits and the JSON-file backend that implements them.

pub mod json;
pub mod traits;

pub use json::{JsonConnection, SnapshotRepository};
pub use traits::{Connection, SnapshotStorage};
