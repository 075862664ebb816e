use globwalk::{FileType, GlobWalkerBuilder};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{BundleError, read_json};

/// Keys every metadata entry must provide; any others are carried into the manifest as-is
pub const METADATA_KEYS: [&str; 4] = ["uuid", "name", "website", "description"];

/// Build `<output>/<year>.json` and copy the year's descriptors to `<output>/<year>/`
///
/// Reads `<root>/<year>_metadata.json` and every `<root>/<year>/*.json`. Each manifest entry is the
/// descriptor's metadata plus its bundle-relative `path` and `version`.
pub fn generate_bundle(year: &str, root: &Path, output: &Path) -> Result<PathBuf, BundleError> {
    let metadata = load_metadata(&root.join(format!("{year}_metadata.json")))?;
    let descriptors = list_descriptors(&root.join(year))?;

    let mut entries = Vec::with_capacity(descriptors.len());
    for path in &descriptors {
        entries.push(Value::Object(manifest_entry(path, year, &metadata)?));
    }

    fs::create_dir_all(output).map_err(BundleError::io(output))?;
    let manifest = output.join(format!("{year}.json"));
    let mut content = serde_json::to_string_pretty(&entries).map_err(|source| BundleError::Json {
        path: manifest.clone(),
        source,
    })?;
    content.push('\n');
    fs::write(&manifest, content).map_err(BundleError::io(&manifest))?;
    info!("wrote {} entries to \"{}\"", entries.len(), manifest.display());

    let deps_dir = output.join(year);
    fs::create_dir_all(&deps_dir).map_err(BundleError::io(&deps_dir))?;
    for path in &descriptors {
        if let Some(name) = path.file_name() {
            fs::copy(path, deps_dir.join(name)).map_err(BundleError::io(path))?;
        }
    }

    Ok(manifest)
}

fn load_metadata(path: &Path) -> Result<HashMap<String, Map<String, Value>>, BundleError> {
    let Value::Array(entries) = read_json(path)? else {
        return Err(BundleError::NotAList {
            path: path.to_path_buf(),
        });
    };

    let mut by_uuid = HashMap::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let Value::Object(entry) = entry else {
            return Err(BundleError::NotAList {
                path: path.to_path_buf(),
            });
        };
        let missing: Vec<&'static str> = METADATA_KEYS
            .into_iter()
            .filter(|key| !entry.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(BundleError::MissingMetadataKeys {
                path: path.to_path_buf(),
                index,
                missing,
            });
        }
        let uuid = string_field(&entry, "uuid", path)?;
        by_uuid.insert(uuid, entry);
    }
    Ok(by_uuid)
}

/// Descriptor files directly inside `dir`, sorted by name
fn list_descriptors(dir: &Path) -> Result<Vec<PathBuf>, BundleError> {
    // globwalk needs an absolute base to strip matched paths against
    let base = fs::canonicalize(dir).map_err(BundleError::io(dir))?;
    let walker = GlobWalkerBuilder::from_patterns(&base, &["*.json"])
        .max_depth(1)
        .file_type(FileType::FILE)
        .build()?;

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| BundleError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        files.push(dir.join(entry.file_name()));
    }
    files.sort();
    Ok(files)
}

fn manifest_entry(
    path: &Path,
    year: &str,
    metadata: &HashMap<String, Map<String, Value>>,
) -> Result<Map<String, Value>, BundleError> {
    let Value::Object(descriptor) = read_json(path)? else {
        return Err(BundleError::MissingField {
            path: path.to_path_buf(),
            key: "uuid",
        });
    };
    let uuid = string_field(&descriptor, "uuid", path)?;
    let version = string_field(&descriptor, "version", path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut entry = metadata
        .get(&uuid)
        .cloned()
        .ok_or_else(|| BundleError::UnknownUuid {
            path: path.to_path_buf(),
            uuid: uuid.clone(),
        })?;
    entry.insert("path".to_string(), Value::String(format!("{year}/{file_name}")));
    entry.insert("version".to_string(), Value::String(version));
    Ok(entry)
}

fn string_field(map: &Map<String, Value>, key: &'static str, path: &Path) -> Result<String, BundleError> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| BundleError::MissingField {
            path: path.to_path_buf(),
            key,
        })
}
