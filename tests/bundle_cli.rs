use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const UUID_A: &str = "e5d1bca0-7f5a-4a8b-9c8c-1a2b3c4d5e6f";
const UUID_B: &str = "0b2c3d4e-5f60-4718-8a9b-0c1d2e3f4a5b";

fn write_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn seed(root: &Path) {
    write_json(
        &root.join("2024_metadata.json"),
        &json!([
            {"uuid": UUID_A, "name": "Alpha", "website": "https://alpha.example.com", "description": "Alpha"},
            {"uuid": UUID_B, "name": "Beta", "website": "https://beta.example.com", "description": "Beta"}
        ]),
    );
    write_json(
        &root.join("2024/Alpha-1.0.json"),
        &json!({"name": "Alpha", "uuid": UUID_A, "version": "1.0"}),
    );
    write_json(
        &root.join("2024/Beta-2.0.json"),
        &json!({"name": "Beta", "uuid": UUID_B, "version": "2.0"}),
    );
}

#[test]
fn generated_bundle_passes_the_year_check() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("bundles");
    seed(dir.path());

    Command::cargo_bin("vendordep-bundle")?
        .current_dir(dir.path())
        .args(["--output", "bundles", "2024"])
        .assert()
        .success();

    let manifest: Value = serde_json::from_str(&fs::read_to_string(output.join("2024.json"))?)?;
    assert_eq!(manifest[1]["path"], "2024/Beta-2.0.json");
    assert_eq!(manifest[1]["version"], "2.0");

    Command::cargo_bin("vendordep-year-check")?
        .arg("--root")
        .arg(&output)
        .args(["--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Known versions:"))
        .stdout(predicate::str::contains("  Alpha - 1.0"))
        .stdout(predicate::str::contains("uncovered file errors: 0"));
    Ok(())
}

#[test]
fn year_check_fails_on_stray_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("bundles");
    seed(dir.path());

    Command::cargo_bin("vendordep-bundle")?
        .arg("--root")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .arg("2024")
        .assert()
        .success();
    fs::write(output.join("2024/Gamma-0.1.json"), "{}")?;

    Command::cargo_bin("vendordep-year-check")?
        .arg("--root")
        .arg(&output)
        .args(["-y", "2024"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "File 2024/Gamma-0.1.json is not represented in the year bundle",
        ))
        .stdout(predicate::str::contains("uncovered file errors: 1"));
    Ok(())
}

#[test]
fn bundle_requires_metadata_for_every_descriptor() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    seed(dir.path());
    write_json(
        &dir.path().join("2024/Gamma-0.1.json"),
        &json!({"name": "Gamma", "uuid": "9f8e7d6c-5b4a-4392-8170-6f5e4d3c2b1a", "version": "0.1"}),
    );

    Command::cargo_bin("vendordep-bundle")?
        .current_dir(dir.path())
        .arg("2024")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in metadata"));
    Ok(())
}
