//! # Mtnsyr Tracker Backend
//!
//! State and persistence layer for a small daily-balance tracking tool: an
//! opening balance of two credit types, per-employee sales entries against
//! those credit types plus cash, derived remaining balances and totals,
//! and JSON persistence/export/import of the resulting dataset.
//!
//! The backend:
//! - Uses synchronous operations throughout, except the one async file
//!   read on the import path
//! - Provides direct access to domain services
//! - Is storage-agnostic through the `Connection` abstraction

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod global;
pub mod io;
pub mod storage;

pub use storage::json::JsonConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub ledger_service: domain::LedgerService<JsonConnection>,
    pub export_service: domain::ExportService,
    pub file_transfer: io::DiskFileTransfer,
}

impl Backend {
    /// Create a new backend instance with all services, storing data under
    /// the given directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = Arc::new(JsonConnection::new(data_dir)?);

        let ledger_service = domain::LedgerService::new(connection);
        let export_service = domain::ExportService::new();
        let file_transfer = io::DiskFileTransfer::new_default();

        Ok(Backend {
            ledger_service,
            export_service,
            file_transfer,
        })
    }

    /// Create a new backend instance in the default data directory
    pub fn new_default() -> Result<Self> {
        let connection = Arc::new(JsonConnection::new_default()?);

        let ledger_service = domain::LedgerService::new(connection);
        let export_service = domain::ExportService::new();
        let file_transfer = io::DiskFileTransfer::new_default();

        Ok(Backend {
            ledger_service,
            export_service,
            file_transfer,
        })
    }
}
