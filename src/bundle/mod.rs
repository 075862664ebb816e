//! Publication tooling for yearly descriptor bundles

mod error;
mod generate;
mod year_check;

pub use error::BundleError;
pub use generate::{METADATA_KEYS, generate_bundle};
pub use year_check::{YearCheck, YearCheckResults, check_year_bundle};

use serde_json::Value;
use std::fs;
use std::path::Path;

fn read_json(path: &Path) -> Result<Value, BundleError> {
    let content = fs::read_to_string(path).map_err(BundleError::io(path))?;
    serde_json::from_str(&content).map_err(|source| BundleError::Json {
        path: path.to_path_buf(),
        source,
    })
}
