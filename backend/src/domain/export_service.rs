//! Export/import domain logic for the mtnsyr tracker.
//!
//! Orchestrates turning the current dataset into a dated export file and
//! restoring a dataset from a previously exported file. File access goes
//! through the `FileTransfer` collaborator; this service never touches the
//! filesystem itself.

use chrono::Local;
use log::{error, info, warn};
use std::path::Path;

use shared::{ExportDataRequest, ExportDataResponse, ExportFile, LedgerSnapshot};

use crate::domain::ledger_service::LedgerService;
use crate::io::FileTransfer;
use crate::storage::Connection;

/// Fields a payload must carry to be accepted by the import path.
const REQUIRED_IMPORT_FIELDS: [&str; 4] =
    ["openingBalance", "salesEntries", "transactions", "employees"];

/// Export service that handles all export/import business logic
#[derive(Clone)]
pub struct ExportService {
    // No internal state needed for now
}

impl ExportService {
    /// Create a new ExportService instance
    pub fn new() -> Self {
        Self {}
    }

    /// Export the current dataset as a dated JSON file.
    ///
    /// The filename defaults to `mtnsyr-data-<today>` when the request does
    /// not override it. Failures are logged and reported through the
    /// response's `success` flag; no error propagates to the caller.
    pub fn export_data<C: Connection>(
        &self,
        request: ExportDataRequest,
        ledger: &LedgerService<C>,
        transfer: &dyn FileTransfer,
    ) -> ExportDataResponse {
        let today = Local::now().format("%Y-%m-%d").to_string();
        let filename = request
            .filename
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("mtnsyr-data-{}", today));

        info!("📄 EXPORT: Exporting balance data as {}", filename);

        let snapshot = ledger.snapshot();
        let payload = ExportFile {
            date: today,
            opening_balance: snapshot.opening_balance,
            sales_entries: snapshot.sales_entries,
            remaining_balances: snapshot.remaining_balances.unwrap_or_default(),
            sales_by_type: ledger.sales_by_type(),
            transactions: snapshot.transactions,
            employees: snapshot.employees.unwrap_or_default(),
        };

        match transfer.write(&payload, &filename) {
            Ok(path) => {
                info!("✅ EXPORT: Wrote balance data to {}", path.display());
                ExportDataResponse {
                    success: true,
                    message: format!("File exported successfully to: {}", path.display()),
                    file_path: path.display().to_string(),
                    filename,
                }
            }
            Err(e) => {
                error!("❌ EXPORT: Failed to write balance data: {}", e);
                ExportDataResponse {
                    success: false,
                    message: format!("Failed to export balance data: {}", e),
                    file_path: String::new(),
                    filename,
                }
            }
        }
    }

    /// Import a dataset from a previously exported file.
    ///
    /// Validates only that the four required top-level fields are present
    /// and non-null; any read, parse, or staging failure returns `false`
    /// with no state mutation. Mutation begins only after the whole payload
    /// has been staged, so a `true` return means the dataset was replaced
    /// wholesale and the derived totals recomputed.
    pub async fn import_data<C: Connection>(
        &self,
        path: &Path,
        ledger: &LedgerService<C>,
        transfer: &dyn FileTransfer,
    ) -> bool {
        info!("📥 IMPORT: Importing balance data from {}", path.display());

        let payload = match transfer.read(path).await {
            Ok(value) => value,
            Err(e) => {
                error!("❌ IMPORT: Failed to read {}: {}", path.display(), e);
                return false;
            }
        };

        for field in REQUIRED_IMPORT_FIELDS {
            let present = payload.get(field).map(|v| !v.is_null()).unwrap_or(false);
            if !present {
                warn!("❌ IMPORT: Payload is missing required field '{}'", field);
                return false;
            }
        }

        let snapshot: LedgerSnapshot = match serde_json::from_value(payload) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("❌ IMPORT: Payload has unusable shape: {}", e);
                return false;
            }
        };

        ledger.apply_snapshot(snapshot);
        info!("✅ IMPORT: Balance data replaced from {}", path.display());
        true
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
