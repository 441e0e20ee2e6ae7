//! File export/import collaborator.
//!
//! The domain layer never touches the filesystem for exports directly; it
//! hands the payload to a `FileTransfer` implementation and trusts whatever
//! the read side returns.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use shared::ExportFile;

/// Collaborator consumed by the export service: write a dataset out as a
/// JSON file, read one back in as parsed JSON.
#[async_trait]
pub trait FileTransfer: Send + Sync {
    /// Serialize `payload` under `filename` (extension added when missing)
    /// and return the path it landed at
    fn write(&self, payload: &ExportFile, filename: &str) -> Result<PathBuf>;

    /// Read and parse a JSON file. The caller trusts the returned value;
    /// shape checks happen downstream.
    async fn read(&self, path: &Path) -> Result<serde_json::Value>;
}

/// Disk-backed file transfer writing into a target directory
#[derive(Clone)]
pub struct DiskFileTransfer {
    target_directory: PathBuf,
}

impl DiskFileTransfer {
    /// Create a file transfer targeting a specific directory
    pub fn new<P: AsRef<Path>>(target_directory: P) -> Self {
        Self {
            target_directory: target_directory.as_ref().to_path_buf(),
        }
    }

    /// Create a file transfer targeting the default export location:
    /// the Documents folder, falling back to the home directory
    pub fn new_default() -> Self {
        let target_directory = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { target_directory }
    }

    /// The directory exported files are written into
    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }
}

#[async_trait]
impl FileTransfer for DiskFileTransfer {
    fn write(&self, payload: &ExportFile, filename: &str) -> Result<PathBuf> {
        if !self.target_directory.exists() {
            fs::create_dir_all(&self.target_directory).with_context(|| {
                format!(
                    "Failed to create export directory {}",
                    self.target_directory.display()
                )
            })?;
        }

        let file_name = if filename.ends_with(".json") {
            filename.to_string()
        } else {
            format!("{}.json", filename)
        };
        let file_path = self.target_directory.join(file_name);

        let json_content = serde_json::to_string_pretty(payload)?;
        fs::write(&file_path, json_content)
            .with_context(|| format!("Failed to write export file {}", file_path.display()))?;

        info!("Wrote export file: {}", file_path.display());
        Ok(file_path)
    }

    async fn read(&self, path: &Path) -> Result<serde_json::Value> {
        let json_content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read import file {}", path.display()))?;

        let parsed = serde_json::from_str(&json_content)
            .with_context(|| format!("Import file {} is not valid JSON", path.display()))?;

        Ok(parsed)
    }
}
