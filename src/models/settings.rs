use std::path::PathBuf;

use crate::defaults::DEFAULT_YEAR;

/// Run-wide settings, shared by every descriptor checked in one invocation
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// Competition season, selects year specific system libraries
    pub year: String,

    /// Maven-layout directory used instead of the descriptor's mirrors
    pub local_maven: Option<PathBuf>,

    /// Maven-layout directory consulted before the network and filled after downloads
    pub cache_directory: Option<PathBuf>,

    /// Number of `-v` flags given
    pub verbose: u8,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR.to_string(),
            local_maven: None,
            cache_directory: None,
            verbose: 0,
        }
    }
}
