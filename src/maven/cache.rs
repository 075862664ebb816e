use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::coordinate::ArtifactCoordinate;

/// Write-through artifact cache laid out like a Maven repository
///
/// Entries are keyed by their resolved repository path and are never overwritten.
#[derive(Debug, Clone)]
pub struct ArtifactCache {
    root: PathBuf,
}

impl ArtifactCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, coordinate: &ArtifactCoordinate, filename: &str) -> PathBuf {
        self.root.join(coordinate.repository_dir()).join(filename)
    }

    /// Cached bytes, if the entry exists and is readable
    pub fn load(&self, path: &Path) -> Option<Vec<u8>> {
        if !path.is_file() {
            return None;
        }
        match fs::read(path) {
            Ok(bytes) => {
                debug!("cache hit \"{}\"", path.display());
                Some(bytes)
            }
            Err(e) => {
                warn!("ignoring unreadable cache entry \"{}\": {e}", path.display());
                None
            }
        }
    }

    /// Persist a downloaded artifact. Returns `false` when the entry already existed.
    pub fn store(&self, path: &Path, bytes: &[u8]) -> io::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)?;
        debug!("cached \"{}\"", path.display());
        Ok(true)
    }
}
