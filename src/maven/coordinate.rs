use std::fmt;
use std::path::PathBuf;

/// Group/artifact/version coordinate plus the packaging extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub extension: String,
}

impl ArtifactCoordinate {
    pub fn new(group: &str, artifact: &str, version: &str, extension: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
            extension: extension.to_string(),
        }
    }

    /// `artifact-version[-classifier].extension`
    pub fn filename(&self, classifier: Option<&str>) -> String {
        match classifier {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.artifact, self.version, classifier, self.extension
            ),
            None => format!("{}-{}.{}", self.artifact, self.version, self.extension),
        }
    }

    /// Repository-relative URL directory, with a trailing slash
    pub fn url_dir(&self) -> String {
        format!(
            "{}/{}/{}/",
            self.group.replace('.', "/"),
            self.artifact,
            self.version
        )
    }

    /// Repository-relative directory as a filesystem path
    pub fn repository_dir(&self) -> PathBuf {
        let mut path: PathBuf = self.group.split('.').collect();
        path.push(&self.artifact);
        path.push(&self.version);
        path
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}
