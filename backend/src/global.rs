//! Process-wide store registry.
//!
//! One backend instance is installed at application start and looked up by
//! consumers anywhere in the process. The lookup fails loudly when no
//! instance is active; this is the only fail-loud condition in the system.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::Backend;

/// Errors from the store registry
#[derive(Debug, Error)]
pub enum StoreLookupError {
    #[error("no balance ledger store is active; install one at application start")]
    NotInstalled,
    #[error("a balance ledger store is already active")]
    AlreadyInstalled,
}

static ACTIVE_BACKEND: Lazy<RwLock<Option<Arc<Backend>>>> = Lazy::new(|| RwLock::new(None));

/// Install the process-wide backend instance. Fails when one is already
/// active; uninstall it first.
pub fn install(backend: Arc<Backend>) -> Result<(), StoreLookupError> {
    let mut slot = ACTIVE_BACKEND.write().unwrap();
    if slot.is_some() {
        return Err(StoreLookupError::AlreadyInstalled);
    }
    *slot = Some(backend);
    Ok(())
}

/// Look up the active backend instance. Fails loudly when none is
/// installed; there is no silent default.
pub fn active() -> Result<Arc<Backend>, StoreLookupError> {
    ACTIVE_BACKEND
        .read()
        .unwrap()
        .clone()
        .ok_or(StoreLookupError::NotInstalled)
}

/// Tear down the active backend instance, returning it if one was
/// installed. Used at shutdown or between tests.
pub fn uninstall() -> Option<Arc<Backend>> {
    ACTIVE_BACKEND.write().unwrap().take()
}
