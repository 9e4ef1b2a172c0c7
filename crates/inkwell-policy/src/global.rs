//! Process-wide policy store
//!
//! Binaries call [`install`] once during startup; everything else reads
//! through [`global`]. If nothing was installed, the builtin table is used.

use crate::error::PolicyError;
use crate::store::PolicyStore;
use once_cell::sync::OnceCell;
use tracing::info;

static STORE: OnceCell<PolicyStore> = OnceCell::new();

/// Install the process-wide store.
///
/// Fails with [`PolicyError::AlreadyInstalled`] if a store was installed
/// before, or if [`global`] already fell back to the builtin table.
pub fn install(store: PolicyStore) -> Result<&'static PolicyStore, PolicyError> {
    let current = store.current_policy().version.clone();
    STORE.set(store).map_err(|_| PolicyError::AlreadyInstalled)?;
    info!("Installed policy store (current version {})", current);
    Ok(global())
}

/// The process-wide store
pub fn global() -> &'static PolicyStore {
    STORE.get_or_init(PolicyStore::builtin)
}
