//! Binary-level checks of shared libraries found in vendor archives

mod allowlist;
pub mod elf;
mod error;
pub mod pe;

pub use allowlist::AllowList;
pub use elf::{DynamicSymbol, ElfSummary};
pub use error::InspectError;

use tracing::debug;

use crate::diagnostics::Report;
use crate::models::{Platform, TargetOs};

/// Inspects one shared library payload, writing findings to the report it is handed
pub trait LibraryInspector {
    fn inspect_shared_library(&self, bytes: &[u8], platform: &Platform, is_debug: bool, report: &mut Report);
}

/// ELF inspection on Linux, PE import checks on Windows, nothing on macOS
pub struct BinaryInspector {
    year: String,
}

impl BinaryInspector {
    pub fn new(year: impl Into<String>) -> Self {
        Self { year: year.into() }
    }
}

impl LibraryInspector for BinaryInspector {
    fn inspect_shared_library(&self, bytes: &[u8], platform: &Platform, is_debug: bool, report: &mut Report) {
        match platform.os() {
            TargetOs::Linux => match ElfSummary::parse(bytes) {
                Ok(summary) => elf::check(&summary, platform.arch(), is_debug, &self.year, report),
                Err(e) => report.error(format!("could not parse ELF library: {e}")),
            },
            TargetOs::Windows => match pe::imported_dlls(bytes) {
                Ok(dlls) => pe::check(&dlls, is_debug, report),
                Err(e) => report.error(format!("could not parse PE library: {e}")),
            },
            TargetOs::Osx => debug!("skipping inspection of {} library", platform.key()),
        }
    }
}
