use thiserror::Error;

/// A shared library payload could not be read as the expected container format
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("{0}")]
    Parse(#[from] object::Error),

    #[error("not an {expected} file (found {found})")]
    UnexpectedFormat {
        expected: &'static str,
        found: String,
    },

    #[error("invalid UTF-8 in {0}")]
    Encoding(&'static str),
}
