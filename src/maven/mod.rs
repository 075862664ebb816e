//! Maven-style artifact resolution
//!
//! Artifacts are looked up in an optional on-disk cache, then either a local Maven-layout directory or
//! the descriptor's mirrors in order.

mod cache;
mod coordinate;
mod error;
mod fetcher;
mod transport;

pub use cache::ArtifactCache;
pub use coordinate::ArtifactCoordinate;
pub use error::{FetchError, FetchFailure, TransportError};
pub use fetcher::{Artifact, ArtifactFetcher};
pub use transport::{HttpTransport, Transport};
