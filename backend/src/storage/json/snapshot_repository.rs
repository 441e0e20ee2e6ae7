//! # JSON Snapshot Repository
//!
//! File-based implementation of the balance-data slot: one JSON file per
//! fixed slot key at the root of the data directory, overwrite semantics.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! └── mtnsyr-balance-data.json    ← This module manages this file
//! ```
//!
//! ## Features
//!
//! - Single fixed-key slot for the whole dataset
//! - `None` (not an error) when the slot has never been written
//! - Atomic file writes with temp files

use anyhow::Result;
use log::debug;
use std::fs;
use std::path::PathBuf;

use shared::LedgerSnapshot;

use super::connection::JsonConnection;
use crate::storage::traits::SnapshotStorage;

/// The fixed key naming the one persisted snapshot.
pub const BALANCE_DATA_KEY: &str = "mtnsyr-balance-data";

/// JSON-file-based snapshot repository
#[derive(Clone)]
pub struct SnapshotRepository {
    connection: JsonConnection,
}

impl SnapshotRepository {
    /// Create a new snapshot repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Get the slot file path
    fn slot_path(&self) -> PathBuf {
        self.connection.slot_path(BALANCE_DATA_KEY)
    }
}

impl SnapshotStorage for SnapshotRepository {
    fn load_snapshot(&self) -> Result<Option<LedgerSnapshot>> {
        let slot_path = self.slot_path();

        if !slot_path.exists() {
            debug!("Slot file {} does not exist", slot_path.display());
            return Ok(None);
        }

        let json_content = fs::read_to_string(&slot_path)?;
        let snapshot: LedgerSnapshot = serde_json::from_str(&json_content)?;

        debug!("Loaded snapshot from {}", slot_path.display());
        Ok(Some(snapshot))
    }

    fn save_snapshot(&self, snapshot: &LedgerSnapshot) -> Result<()> {
        let slot_path = self.slot_path();
        let base_dir = self.connection.base_directory();

        if !base_dir.exists() {
            fs::create_dir_all(&base_dir)?;
        }

        let json_content = serde_json::to_string_pretty(snapshot)?;

        // Atomic write pattern: write to temp file, then rename
        let temp_path = slot_path.with_extension("tmp");
        fs::write(&temp_path, json_content)?;
        fs::rename(&temp_path, &slot_path)?;

        debug!("Saved snapshot to {}", slot_path.display());
        Ok(())
    }
}
