//! Snapshot file read/write.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use stockbook_inventory::Inventory;

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Failure while reading or writing a snapshot file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Load the inventory from `path`.
///
/// A missing file is a warning and yields an empty inventory; an
/// unreadable or malformed file is an error notice and also yields an
/// empty inventory. Parsed entries pass through
/// `Inventory::from_snapshot`, the validation boundary for untrusted
/// external data.
pub fn load(path: impl AsRef<Path>) -> Inventory {
    let path = path.as_ref();
    match read_snapshot(path) {
        Ok(entries) => Inventory::from_snapshot(entries),
        Err(PersistenceError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(
                "snapshot {} not found; starting with empty inventory",
                path.display()
            );
            Inventory::new()
        }
        Err(err) => {
            tracing::error!(
                "failed to load snapshot {}: {err}; starting with empty inventory",
                path.display()
            );
            Inventory::new()
        }
    }
}

fn read_snapshot(path: &Path) -> Result<BTreeMap<String, i64>, PersistenceError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save the inventory to `path`.
///
/// A failed write is an error notice; the in-memory inventory is left
/// untouched either way.
pub fn save(inventory: &Inventory, path: impl AsRef<Path>) {
    let path = path.as_ref();
    match write_snapshot(inventory, path) {
        Ok(()) => tracing::info!("inventory saved to {}", path.display()),
        Err(err) => tracing::error!("failed to save snapshot {}: {err}", path.display()),
    }
}

fn write_snapshot(inventory: &Inventory, path: &Path) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(inventory)?;
    fs::write(path, json)?;
    Ok(())
}
