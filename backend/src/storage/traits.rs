//! # Storage Traits
//!
//! Storage abstraction traits that allow different storage backends to be
//! used interchangeably by the domain layer.

use anyhow::Result;
use shared::LedgerSnapshot;

/// Trait defining the interface for the persisted balance-data slot
///
/// The slot is a single key-value cell with overwrite semantics: one
/// snapshot per fixed key. Implementations abstract away where the cell
/// lives (a JSON file, browser local storage, a database row).
pub trait SnapshotStorage: Send + Sync {
    /// Read the persisted snapshot, `None` when nothing has been saved yet
    fn load_snapshot(&self) -> Result<Option<LedgerSnapshot>>;

    /// Overwrite the persisted snapshot
    fn save_snapshot(&self, snapshot: &LedgerSnapshot) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// Abstracts the concrete connection type and provides factory methods for
/// creating repositories, so the domain layer can work with any storage
/// backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    /// The type of SnapshotStorage this connection creates
    type SnapshotRepository: SnapshotStorage + Clone;

    /// Create a new snapshot repository for this connection
    fn create_snapshot_repository(&self) -> Self::SnapshotRepository;
}
