//! Descriptor validation: structural schema checks and the artifact walk

mod archive;
mod cpp;
mod java;
mod jni;
mod schema_check;
mod validator;


pub use schema_check::SchemaValidator;
pub use validator::ArtifactValidator;

use crate::inspect::LibraryInspector;
use crate::loader::FileConfig;
use crate::maven::ArtifactFetcher;

/// Everything the per-dependency checks need besides the dependency itself
pub(crate) struct DependencyContext<'a> {
    pub fetcher: &'a ArtifactFetcher<'a>,
    pub inspector: &'a dyn LibraryInspector,
    pub file_config: &'a FileConfig,
}
