use tracing::debug;

use super::DependencyContext;
use super::archive::{self, BinaryCheck};
use crate::defaults::{HEADER_EXTENSIONS, LEGACY_WINDOWS_PLATFORM, SOURCE_EXTENSIONS};
use crate::diagnostics::Report;
use crate::maven::ArtifactCoordinate;
use crate::models::{BuildVariant, CppDependency};

pub(super) fn check_cpp(dep: &CppDependency, ctx: &DependencyContext<'_>, report: &mut Report) {
    let coordinate = dep.coordinate();

    check_sources(dep, &coordinate, ctx, report);
    check_headers(dep, &coordinate, ctx, report);

    let shared_library = dep.shared_library.unwrap_or_else(|| {
        report.warn("\"sharedLibrary\" not set, assuming static linkage");
        false
    });

    for platform in &dep.binary_platforms {
        for variant in BuildVariant::ALL {
            // Only the family consumers link against is required
            let optional = variant.is_static() == shared_library;
            check_platform_build(dep, &coordinate, platform, variant, optional, ctx, report);
        }
    }
}

fn check_sources(
    dep: &CppDependency,
    coordinate: &ArtifactCoordinate,
    ctx: &DependencyContext<'_>,
    report: &mut Report,
) {
    let Some(classifier) = dep.sources_classifier.as_deref() else {
        report.info("no sources");
        return;
    };
    let artifact = match ctx.fetcher.require(coordinate, Some(classifier)) {
        Ok(artifact) => artifact,
        Err(err) => {
            report.warn(format!("could not fetch sources: {err}"));
            return;
        }
    };
    match archive::open(&artifact.bytes) {
        Ok(zip) => {
            let mut scope = report.scope(artifact.filename.clone());
            if !archive::has_entry_with_extension(&zip, SOURCE_EXTENSIONS) {
                scope.warn("no C++ sources in sources zip");
            }
        }
        Err(e) => report.error(format!("got bad sources zip: {e}")),
    }
}

fn check_headers(
    dep: &CppDependency,
    coordinate: &ArtifactCoordinate,
    ctx: &DependencyContext<'_>,
    report: &mut Report,
) {
    let artifact = match ctx.fetcher.require(coordinate, Some(dep.header_classifier.as_str())) {
        Ok(artifact) => artifact,
        Err(err) => {
            report.error(format!("could not fetch headers: {err}"));
            return;
        }
    };
    match archive::open(&artifact.bytes) {
        Ok(zip) => {
            let mut scope = report.scope(artifact.filename.clone());
            if !archive::has_entry_with_extension(&zip, HEADER_EXTENSIONS) {
                scope.warn("no C++ headers in headers zip");
            }
        }
        Err(e) => report.error(format!("got bad headers zip: {e}")),
    }
}

fn check_platform_build(
    dep: &CppDependency,
    coordinate: &ArtifactCoordinate,
    platform: &str,
    variant: BuildVariant,
    optional: bool,
    ctx: &DependencyContext<'_>,
    report: &mut Report,
) {
    let classifier = format!("{platform}{}", variant.classifier_suffix());
    let artifact = match ctx.fetcher.fetch(coordinate, Some(classifier.as_str()), optional) {
        Ok(Some(artifact)) => artifact,
        Ok(None) => {
            report.info(format!(
                "could not fetch optional binary platform {platform} build {variant}"
            ));
            return;
        }
        Err(_) if platform == LEGACY_WINDOWS_PLATFORM => {
            report.warn("WPILib no longer builds for 32-bit");
            return;
        }
        Err(err) => {
            report.error(format!(
                "could not fetch required C++ binary platform {platform} build {variant}: {err}"
            ));
            return;
        }
    };

    let mut zip = match archive::open(&artifact.bytes) {
        Ok(zip) => zip,
        Err(e) => {
            report.error(format!("got bad binary zip: {e}"));
            return;
        }
    };
    debug!("checking {} ({} entries)", artifact.filename, zip.len());
    let mut scope = report.scope(artifact.filename.clone());
    let check = BinaryCheck {
        platform,
        lib_name: Some(dep.lib_name.as_str()),
        variant,
        optional,
    };
    archive::check_binary(&mut zip, &check, ctx, &mut scope);
}
