use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use vendordep_check::diagnostics::Report;
use vendordep_check::inspect::BinaryInspector;
use vendordep_check::loader::load_descriptor;
use vendordep_check::maven::HttpTransport;
use vendordep_check::models::CheckSettings;
use vendordep_check::validation::ArtifactValidator;

/// Check every descriptor in turn. Returns `true` when none of them had errors.
pub fn check_command(files: &[PathBuf], settings: &CheckSettings) -> Result<bool> {
    let transport = HttpTransport::new().context("Failed to set up HTTP client")?;
    let inspector = BinaryInspector::new(settings.year.clone());
    let validator = ArtifactValidator::new(settings, &transport, &inspector);

    let mut all_passed = true;
    for path in files {
        let loaded = match load_descriptor(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                // Counts as a single error for the file
                eprintln!("{:?}", miette::Report::new(e));
                eprintln!("{}: 1 errors, 0 warnings", path.display());
                all_passed = false;
                continue;
            }
        };
        let report = validator.validate(&loaded.document, &loaded.file_config);
        print_report(path, &report);
        all_passed &= !report.has_errors();
    }

    info!(
        "checked {} file(s), {}",
        files.len(),
        if all_passed { "all passed" } else { "some failed" }
    );
    Ok(all_passed)
}

fn print_report(path: &Path, report: &Report) {
    let file = path.display();
    for diagnostic in report.diagnostics() {
        eprintln!("{file}: {}", diagnostic.render());
    }
    eprintln!("{file}: {}", report.summary());
}
