use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::maven::ArtifactCoordinate;

/// A vendor dependency descriptor, deserialized after it passed schema validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub file_name: String,
    pub name: String,
    pub version: String,
    pub frc_year: String,
    pub uuid: String,
    pub maven_urls: Vec<String>,
    pub json_url: String,

    #[serde(default)]
    pub requires: Vec<RequiredDescriptor>,

    #[serde(default)]
    pub conflicts_with: Vec<ConflictingDescriptor>,

    #[serde(default)]
    pub java_dependencies: Vec<JavaDependency>,

    #[serde(default)]
    pub jni_dependencies: Vec<JniDependency>,

    #[serde(default)]
    pub cpp_dependencies: Vec<CppDependency>,
}

impl Descriptor {
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        Self::deserialize(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredDescriptor {
    pub uuid: String,
    pub error_message: String,
    pub offline_file_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictingDescriptor {
    pub uuid: String,
    pub error_message: String,
    pub offline_file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl JavaDependency {
    pub fn coordinate(&self) -> ArtifactCoordinate {
        ArtifactCoordinate::new(&self.group_id, &self.artifact_id, &self.version, "jar")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JniDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub is_jar: bool,
    pub valid_platforms: Vec<String>,
    pub skip_invalid_platforms: bool,
}

impl JniDependency {
    pub fn coordinate(&self) -> ArtifactCoordinate {
        let extension = if self.is_jar { "jar" } else { "zip" };
        ArtifactCoordinate::new(&self.group_id, &self.artifact_id, &self.version, extension)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CppDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub lib_name: String,
    pub header_classifier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources_classifier: Option<String>,

    #[serde(default)]
    pub binary_platforms: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_invalid_platforms: Option<bool>,

    /// Whether consumers link the shared (true) or static (false) build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_library: Option<bool>,
}

impl CppDependency {
    pub fn coordinate(&self) -> ArtifactCoordinate {
        ArtifactCoordinate::new(&self.group_id, &self.artifact_id, &self.version, "zip")
    }
}
