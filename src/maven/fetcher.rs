use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::cache::ArtifactCache;
use super::coordinate::ArtifactCoordinate;
use super::error::{FetchError, FetchFailure};
use super::transport::Transport;

/// A resolved artifact payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Resolves artifact payloads for one descriptor
///
/// Lookup order: the cache (when configured), then the local Maven directory (when configured, with no
/// fallback to the network), then every mirror in the order the descriptor lists them.
pub struct ArtifactFetcher<'a> {
    mirrors: Vec<String>,
    local_maven: Option<PathBuf>,
    cache: Option<ArtifactCache>,
    transport: &'a dyn Transport,
}

impl<'a> ArtifactFetcher<'a> {
    pub fn new(mirrors: &[String], transport: &'a dyn Transport) -> Self {
        let mirrors = mirrors
            .iter()
            .map(|url| {
                if url.ends_with('/') {
                    url.clone()
                } else {
                    format!("{url}/")
                }
            })
            .collect();
        Self {
            mirrors,
            local_maven: None,
            cache: None,
            transport,
        }
    }

    pub fn with_local_maven(mut self, local_maven: Option<PathBuf>) -> Self {
        self.local_maven = local_maven;
        self
    }

    pub fn with_cache(mut self, cache: Option<ArtifactCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Resolve an artifact that may legitimately be absent. Exhausting every source yields `Ok(None)`
    /// when `allow_missing` is set and an error otherwise.
    pub fn fetch(
        &self,
        coordinate: &ArtifactCoordinate,
        classifier: Option<&str>,
        allow_missing: bool,
    ) -> Result<Option<Artifact>, FetchError> {
        match self.require(coordinate, classifier) {
            Ok(artifact) => Ok(Some(artifact)),
            Err(err) if allow_missing => {
                info!("optional artifact not available: {err}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Resolve an artifact that must exist
    pub fn require(
        &self,
        coordinate: &ArtifactCoordinate,
        classifier: Option<&str>,
    ) -> Result<Artifact, FetchError> {
        let filename = coordinate.filename(classifier);
        let found = |bytes: Vec<u8>| Artifact {
            filename: filename.clone(),
            bytes,
        };

        let cache_path = self
            .cache
            .as_ref()
            .map(|cache| (cache, cache.path_for(coordinate, &filename)));
        if let Some((cache, path)) = &cache_path {
            if let Some(bytes) = cache.load(path) {
                return Ok(found(bytes));
            }
        }

        let cause = if let Some(root) = &self.local_maven {
            let path = root.join(coordinate.repository_dir()).join(&filename);
            info!("opening \"{}\"", path.display());
            match fs::read(&path) {
                Ok(bytes) => return Ok(found(bytes)),
                Err(source) => FetchFailure::Local { path, source },
            }
        } else {
            let mut last = FetchFailure::NoMirrors;
            for mirror in &self.mirrors {
                let url = format!("{mirror}{}{filename}", coordinate.url_dir());
                info!("downloading \"{url}\"");
                match self.transport.get(&url) {
                    Ok(bytes) => {
                        if let Some((cache, path)) = &cache_path {
                            if let Err(e) = cache.store(path, &bytes) {
                                warn!("could not cache \"{}\": {e}", path.display());
                            }
                        }
                        return Ok(found(bytes));
                    }
                    Err(err) => {
                        debug!("{err}");
                        last = FetchFailure::Transport(err);
                    }
                }
            }
            last
        };

        Err(FetchError {
            coordinate: coordinate.to_string(),
            filename,
            cause,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maven::TransportError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use tempfile::TempDir;

    /// Serves fixed payloads and records every requested URL
    #[derive(Default)]
    struct MockTransport {
        responses: HashMap<String, Vec<u8>>,
        requests: RefCell<Vec<String>>,
    }

    impl MockTransport {
        fn serve(mut self, url: &str, bytes: &[u8]) -> Self {
            self.responses.insert(url.to_string(), bytes.to_vec());
            self
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Transport for MockTransport {
        fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
            self.requests.borrow_mut().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| TransportError::Status {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    fn coordinate() -> ArtifactCoordinate {
        ArtifactCoordinate::new("com.example", "foo-java", "1.0", "jar")
    }

    fn mirrors() -> Vec<String> {
        vec![
            "https://one.example.com/maven".to_string(),
            "https://two.example.com/maven/".to_string(),
            "https://three.example.com/maven".to_string(),
        ]
    }

    #[test]
    fn test_falls_back_through_mirrors_in_order() {
        let transport = MockTransport::default().serve(
            "https://three.example.com/maven/com/example/foo-java/1.0/foo-java-1.0-sources.jar",
            b"third",
        );
        let fetcher = ArtifactFetcher::new(&mirrors(), &transport);

        let artifact = fetcher.require(&coordinate(), Some("sources")).unwrap();

        assert_eq!(artifact.bytes, b"third");
        assert_eq!(artifact.filename, "foo-java-1.0-sources.jar");
        assert_eq!(transport.request_count(), 3);
        assert_eq!(
            transport.requests.borrow()[1],
            "https://two.example.com/maven/com/example/foo-java/1.0/foo-java-1.0-sources.jar"
        );
    }

    #[test]
    fn test_first_successful_mirror_wins() {
        let transport = MockTransport::default()
            .serve("https://one.example.com/maven/com/example/foo-java/1.0/foo-java-1.0.jar", b"one")
            .serve("https://two.example.com/maven/com/example/foo-java/1.0/foo-java-1.0.jar", b"two");
        let fetcher = ArtifactFetcher::new(&mirrors(), &transport);

        let artifact = fetcher.require(&coordinate(), None).unwrap();
        assert_eq!(artifact.bytes, b"one");
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_exhaustion_reports_last_cause_unless_missing_allowed() {
        let transport = MockTransport::default();
        let fetcher = ArtifactFetcher::new(&mirrors(), &transport);

        let err = fetcher.require(&coordinate(), Some("javadoc")).unwrap_err();
        assert_eq!(err.filename, "foo-java-1.0-javadoc.jar");
        assert_eq!(err.coordinate, "com.example:foo-java:1.0");
        assert!(err.to_string().contains("three.example.com"));
        assert!(err.to_string().contains("HTTP 404"));

        let optional = fetcher.fetch(&coordinate(), Some("javadoc"), true).unwrap();
        assert!(optional.is_none());
        assert_eq!(transport.request_count(), 6);
    }

    #[test]
    fn test_no_mirrors() {
        let transport = MockTransport::default();
        let fetcher = ArtifactFetcher::new(&[], &transport);

        let err = fetcher.require(&coordinate(), None).unwrap_err();
        assert!(matches!(err.cause, FetchFailure::NoMirrors));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_downloads_are_cached_and_reused() {
        let temp_dir = TempDir::new().unwrap();
        let url = "https://one.example.com/maven/com/example/foo-java/1.0/foo-java-1.0.jar";

        let transport = MockTransport::default().serve(url, b"payload");
        let fetcher = ArtifactFetcher::new(&mirrors(), &transport)
            .with_cache(Some(ArtifactCache::new(temp_dir.path())));
        fetcher.require(&coordinate(), None).unwrap();
        assert_eq!(transport.request_count(), 1);
        assert!(
            temp_dir
                .path()
                .join("com/example/foo-java/1.0/foo-java-1.0.jar")
                .is_file()
        );

        // A second run against an empty network still resolves from the cache
        let offline = MockTransport::default();
        let fetcher = ArtifactFetcher::new(&mirrors(), &offline)
            .with_cache(Some(ArtifactCache::new(temp_dir.path())));
        let artifact = fetcher.require(&coordinate(), None).unwrap();
        assert_eq!(artifact.bytes, b"payload");
        assert_eq!(offline.request_count(), 0);
    }

    #[test]
    fn test_local_maven_replaces_mirrors() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("com/example/foo-java/1.0");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("foo-java-1.0.jar"), b"local").unwrap();

        let transport = MockTransport::default();
        let fetcher = ArtifactFetcher::new(&mirrors(), &transport)
            .with_local_maven(Some(temp_dir.path().to_path_buf()));

        assert_eq!(fetcher.require(&coordinate(), None).unwrap().bytes, b"local");

        let err = fetcher.require(&coordinate(), Some("sources")).unwrap_err();
        assert!(matches!(err.cause, FetchFailure::Local { .. }));
        assert_eq!(transport.request_count(), 0);
    }
}
