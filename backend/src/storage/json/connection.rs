use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::storage::traits::Connection;

/// JsonConnection manages the data directory that holds the persisted
/// balance-data slot
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: Arc<Mutex<PathBuf>>,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: Arc::new(Mutex::new(base_path)),
        })
    }

    /// Create a new JSON connection in the default data directory
    /// (~/Documents/Mtnsyr Tracker)
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Mtnsyr Tracker");

        Self::new(data_dir)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> PathBuf {
        let base_dir = self.base_directory.lock().unwrap();
        base_dir.clone()
    }

    /// Get the file path backing a named slot key
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.base_directory().join(format!("{}.json", key))
    }
}

impl Connection for JsonConnection {
    type SnapshotRepository = super::snapshot_repository::SnapshotRepository;

    fn create_snapshot_repository(&self) -> Self::SnapshotRepository {
        super::snapshot_repository::SnapshotRepository::new(self.clone())
    }
}
