use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("could not access \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in \"{}\": {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("\"{}\" must contain a list of objects", path.display())]
    NotAList { path: PathBuf },

    #[error("metadata entry {index} in \"{}\" is missing required keys: {}", path.display(), missing.join(", "))]
    MissingMetadataKeys {
        path: PathBuf,
        index: usize,
        missing: Vec<&'static str>,
    },

    #[error("\"{}\" has no string \"{key}\"", path.display())]
    MissingField { path: PathBuf, key: &'static str },

    #[error("uuid {uuid} of \"{}\" not found in metadata", path.display())]
    UnknownUuid { path: PathBuf, uuid: String },

    #[error(transparent)]
    Glob(#[from] globwalk::GlobError),
}

impl BundleError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| BundleError::Io { path, source }
    }
}
