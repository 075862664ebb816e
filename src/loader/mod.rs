//! Reading descriptors and their option files from disk

mod file_config;

pub use file_config::{ConfigError, FileConfig, parse_bool};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::error_utils::{create_named_source, span_at};

#[derive(Debug, Error, Diagnostic)]
pub enum DescriptorError {
    #[error("could not read \"{}\"", path.display())]
    #[diagnostic(code(vendordep::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON")]
    #[diagnostic(code(vendordep::json), help("descriptors must be a single JSON object"))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error(transparent)]
    #[diagnostic(code(vendordep::options))]
    Config(#[from] ConfigError),
}

/// A descriptor document together with its per-file options
#[derive(Debug)]
pub struct LoadedDescriptor {
    pub path: PathBuf,
    pub document: Value,
    pub file_config: FileConfig,
}

pub fn load_descriptor(path: &Path) -> Result<LoadedDescriptor, DescriptorError> {
    info!("loading \"{}\"", path.display());
    let content = fs::read_to_string(path).map_err(|source| DescriptorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(path, content)?;
    let file_config = FileConfig::load_for(path)?;
    Ok(LoadedDescriptor {
        path: path.to_path_buf(),
        document,
        file_config,
    })
}

fn parse_document(path: &Path, content: String) -> Result<Value, DescriptorError> {
    serde_json::from_str(&content).map_err(|e| {
        let span = span_at(&content, e.line(), e.column());
        DescriptorError::Parse {
            src: create_named_source(path, content.clone()),
            span,
            message: e.to_string(),
        }
    })
}
