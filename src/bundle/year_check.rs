use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use uuid::Uuid;

use super::{BundleError, read_json};

/// Per-category problem counts of a year bundle
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct YearCheckResults {
    pub uuid_errors: usize,
    pub bad_file_errors: usize,
    pub duplicate_version_errors: usize,
    pub inconsistent_version_errors: usize,
    pub missing_description_errors: usize,
    pub missing_website_errors: usize,
    pub uncovered_file_errors: usize,
}

impl YearCheckResults {
    pub fn is_valid(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for YearCheckResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "uuid errors: {}", self.uuid_errors)?;
        writeln!(f, "bad file errors: {}", self.bad_file_errors)?;
        writeln!(f, "duplicate version errors: {}", self.duplicate_version_errors)?;
        writeln!(f, "inconsistent version errors: {}", self.inconsistent_version_errors)?;
        writeln!(f, "missing description errors: {}", self.missing_description_errors)?;
        writeln!(f, "missing website errors: {}", self.missing_website_errors)?;
        write!(f, "uncovered file errors: {}", self.uncovered_file_errors)
    }
}

#[derive(Debug, Default)]
pub struct YearCheck {
    pub results: YearCheckResults,
    /// One line per problem, in the order found
    pub findings: Vec<String>,
    /// Versions seen per descriptor name
    pub known_versions: BTreeMap<String, BTreeSet<String>>,
}

impl YearCheck {
    pub fn known_versions_listing(&self) -> String {
        let mut listing = String::from("Known versions:");
        for (name, versions) in &self.known_versions {
            let versions: Vec<&str> = versions.iter().map(String::as_str).collect();
            listing.push_str(&format!("\n  {name} - {}", versions.join(", ")));
        }
        listing
    }
}

fn text<'v>(entry: &'v Value, key: &str) -> &'v str {
    entry.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Cross-check `<root>/<year>.json` against the descriptors under `<root>/<year>/`
pub fn check_year_bundle(root: &Path, year: &str) -> Result<YearCheck, BundleError> {
    let manifest_path = root.join(format!("{year}.json"));
    let Value::Array(entries) = read_json(&manifest_path)? else {
        return Err(BundleError::NotAList {
            path: manifest_path,
        });
    };

    let mut check = YearCheck::default();
    let mut uuid_by_name: HashMap<String, String> = HashMap::new();
    let mut covered: HashSet<String> = HashSet::new();

    for entry in &entries {
        let path = text(entry, "path");
        let name = text(entry, "name");
        let version = text(entry, "version");
        let uuid = text(entry, "uuid");
        let results = &mut check.results;
        let findings = &mut check.findings;

        let file = match read_json(&root.join(path)) {
            Ok(file) if !path.is_empty() => {
                covered.insert(path.to_string());
                Some(file)
            }
            _ => {
                findings.push(format!("{path} - Could not find file"));
                results.bad_file_errors += 1;
                None
            }
        };

        if entry.get("description").is_none() {
            findings.push(format!("{path} - Missing description"));
            results.missing_description_errors += 1;
        }
        if entry.get("website").is_none() {
            findings.push(format!("{path} - Missing documentation website"));
            results.missing_website_errors += 1;
        }

        let versions = check.known_versions.entry(name.to_string()).or_default();
        if !versions.insert(version.to_string()) {
            findings.push(format!("{path} - Duplicated version {version}"));
            results.duplicate_version_errors += 1;
        }
        if let Some(file) = &file {
            let file_version = text(file, "version");
            if file_version != version {
                findings.push(format!(
                    "{path} - Version {version} does not match the version in the file {file_version}"
                ));
                results.inconsistent_version_errors += 1;
            }
        }

        let first_uuid = uuid_by_name
            .entry(name.to_string())
            .or_insert_with(|| uuid.to_string());
        if first_uuid != uuid {
            findings.push(format!(
                "{path} - UUID {uuid} has changed from previously seen UUID {first_uuid}"
            ));
            results.uuid_errors += 1;
        }
        if let Some(file) = &file {
            let file_uuid = text(file, "uuid");
            if file_uuid != uuid {
                findings.push(format!(
                    "{path} - UUID {uuid} does not match the UUID in the file {file_uuid}"
                ));
                results.uuid_errors += 1;
            }
        }
        if Uuid::parse_str(uuid).is_err() {
            findings.push(format!("{path} - UUID {uuid} is invalid"));
            results.uuid_errors += 1;
        }
    }

    let year_dir = root.join(year);
    let read_dir = fs::read_dir(&year_dir).map_err(BundleError::io(&year_dir))?;
    let mut uncovered = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(BundleError::io(&year_dir))?;
        let relative = format!("{year}/{}", dir_entry.file_name().to_string_lossy());
        if !covered.contains(&relative) {
            uncovered.push(relative);
        }
    }
    uncovered.sort();
    for file in uncovered {
        check
            .findings
            .push(format!("File {file} is not represented in the year bundle"));
        check.results.uncovered_file_errors += 1;
    }

    let distinct: HashSet<&String> = uuid_by_name.values().collect();
    if distinct.len() != uuid_by_name.len() {
        check.findings.push(format!(
            "There are a different number of vendordeps ({}) than there are UUIDs ({}), indicating UUIDs have been reused between vendordeps",
            uuid_by_name.len(),
            distinct.len()
        ));
        check.results.uuid_errors += 1;
    }

    Ok(check)
}
