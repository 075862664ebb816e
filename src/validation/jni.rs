use super::DependencyContext;
use super::archive::{self, BinaryCheck};
use crate::defaults::LEGACY_WINDOWS_PLATFORM;
use crate::diagnostics::Report;
use crate::models::{BuildVariant, JniDependency};

/// Every listed platform must have an archive holding exactly the shared JNI library
pub(super) fn check_jni(dep: &JniDependency, ctx: &DependencyContext<'_>, report: &mut Report) {
    let coordinate = dep.coordinate();

    for platform in &dep.valid_platforms {
        let artifact = match ctx.fetcher.require(&coordinate, Some(platform.as_str())) {
            Ok(artifact) => artifact,
            Err(_) if platform == LEGACY_WINDOWS_PLATFORM => {
                report.warn("WPILib no longer builds for 32-bit");
                continue;
            }
            Err(err) => {
                report.error(format!(
                    "could not fetch required JNI binary platform {platform}: {err}"
                ));
                continue;
            }
        };

        let mut zip = match archive::open(&artifact.bytes) {
            Ok(zip) => zip,
            Err(e) => {
                report.error(format!("got bad binary zip: {e}"));
                continue;
            }
        };
        let mut scope = report.scope(artifact.filename.clone());
        let check = BinaryCheck {
            platform,
            lib_name: None,
            variant: BuildVariant::Shared,
            optional: false,
        };
        archive::check_binary(&mut zip, &check, ctx, &mut scope);
    }
}
