use std::fs;
use std::path::{Path, PathBuf};

use crate::types::Server;

/// Load the server inventory from a JSON file.
///
/// An unreadable file is an error for the caller to surface. Content that
/// is not a valid JSON array of servers yields an empty inventory instead
/// of an error; existing callers depend on that leniency.
pub fn load_servers(path: &Path) -> Result<Vec<Server>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw).unwrap_or_default())
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
