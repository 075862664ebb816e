use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use super::DependencyContext;
use super::cpp::check_cpp;
use super::java::check_java;
use super::jni::check_jni;
use super::schema_check::SchemaValidator;
use crate::defaults::DEPLOYMENT_PLATFORM;
use crate::diagnostics::Report;
use crate::inspect::LibraryInspector;
use crate::loader::FileConfig;
use crate::maven::{ArtifactCache, ArtifactFetcher, Transport};
use crate::models::{CheckSettings, Descriptor};
use crate::schema::VENDORDEP_SCHEMA;

/// Checks one descriptor document end to end and returns its findings
pub struct ArtifactValidator<'a> {
    settings: &'a CheckSettings,
    transport: &'a dyn Transport,
    inspector: &'a dyn LibraryInspector,
}

impl<'a> ArtifactValidator<'a> {
    pub fn new(
        settings: &'a CheckSettings,
        transport: &'a dyn Transport,
        inspector: &'a dyn LibraryInspector,
    ) -> Self {
        Self {
            settings,
            transport,
            inspector,
        }
    }

    pub fn validate(&self, document: &Value, file_config: &FileConfig) -> Report {
        let mut report = Report::new();

        SchemaValidator::new(&VENDORDEP_SCHEMA).validate(document, &mut report);
        if report.has_errors() {
            debug!("schema check failed, skipping artifact checks");
            return report;
        }

        let descriptor = match Descriptor::from_value(document) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                report.error(format!("could not read descriptor: {e}"));
                return report;
            }
        };

        check_top_level(&descriptor, &mut report);
        if descriptor.maven_urls.is_empty()
            || (descriptor.java_dependencies.is_empty() && descriptor.cpp_dependencies.is_empty())
        {
            debug!("nothing to fetch, skipping network checks");
            return report;
        }

        self.check_json_url(&descriptor.json_url, &mut report);

        let fetcher = ArtifactFetcher::new(&descriptor.maven_urls, self.transport)
            .with_local_maven(self.settings.local_maven.clone())
            .with_cache(self.settings.cache_directory.as_ref().map(ArtifactCache::new));
        let ctx = DependencyContext {
            fetcher: &fetcher,
            inspector: self.inspector,
            file_config,
        };

        for (n, dep) in descriptor.java_dependencies.iter().enumerate() {
            let mut scope = report.scope(format!("javaDep.{n}"));
            check_java(dep, &ctx, &mut scope);
        }
        for (n, dep) in descriptor.cpp_dependencies.iter().enumerate() {
            let mut scope = report.scope(format!("cppDep.{n}"));
            check_cpp(dep, &ctx, &mut scope);
        }
        for (n, dep) in descriptor.jni_dependencies.iter().enumerate() {
            let mut scope = report.scope(format!("jniDep.{n}"));
            check_jni(dep, &ctx, &mut scope);
        }

        report
    }

    /// The published URL only has to serve some JSON document
    fn check_json_url(&self, url: &str, report: &mut Report) {
        info!("downloading \"{url}\"");
        let reason = match self.transport.get(url) {
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                Ok(_) => return,
                Err(e) => e.to_string(),
            },
            Err(e) => e.reason(),
        };
        report.warn(format!("could not fetch jsonUrl \"{url}\": {reason}"));
    }
}

/// Checks that need nothing but the descriptor itself
fn check_top_level(descriptor: &Descriptor, report: &mut Report) {
    if Uuid::parse_str(&descriptor.uuid).is_err() {
        report.error("\"uuid\" is not a valid UUID");
    }

    if descriptor.maven_urls.is_empty() {
        report.error("\"mavenUrls\" cannot be empty");
    }

    if descriptor.java_dependencies.is_empty() && descriptor.cpp_dependencies.is_empty() {
        report.error("no Java or C++ dependencies (at least one is required)");
    }

    if !descriptor.cpp_dependencies.is_empty()
        && !descriptor
            .cpp_dependencies
            .iter()
            .any(|dep| dep.binary_platforms.iter().any(|p| p == DEPLOYMENT_PLATFORM))
    {
        report.warn(format!(
            "{DEPLOYMENT_PLATFORM} binaryPlatform not found in any \"cppDependencies\""
        ));
    }

    if !descriptor.jni_dependencies.is_empty()
        && !descriptor
            .jni_dependencies
            .iter()
            .any(|dep| dep.valid_platforms.iter().any(|p| p == DEPLOYMENT_PLATFORM))
    {
        report.warn(format!(
            "{DEPLOYMENT_PLATFORM} validPlatform not found in any \"jniDependencies\""
        ));
    }

    for (i, required) in descriptor.requires.iter().enumerate() {
        if Uuid::parse_str(&required.uuid).is_err() {
            report.error(format!("\"requires.{i}.uuid\" is not a valid UUID"));
        }
    }
    for (i, conflict) in descriptor.conflicts_with.iter().enumerate() {
        if Uuid::parse_str(&conflict.uuid).is_err() {
            report.error(format!("\"conflictsWith.{i}.uuid\" is not a valid UUID"));
        }
    }
}
