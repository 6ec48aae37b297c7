//! Reads SDK source files for side-by-side display.

use std::path::Path;

/// Reads a whole file as text. Invalid UTF-8 is replaced, not rejected; only an io failure
/// (missing file, permissions) reads as absent.
pub async fn read_source(path: &Path) -> Option<String> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            log::debug!("Cannot read {}: {err}", path.display());
            None
        }
    }
}
