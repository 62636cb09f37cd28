use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pipex() -> Command {
    Command::cargo_bin("pipex").unwrap()
}

fn write_catalog(dir: &TempDir, name: &str, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, yaml).unwrap();
    path
}

const CUSTOM_CATALOG: &str = "\
stages:
  - id: 1
    title: Lint
    summary: style checks
    details: Run the linters.
    tools: [clippy]
  - id: 2
    title: Ship
    summary: release it
    details: Push the release.
";

// ---------------------------------------------------------------------------
// pipex stages
// ---------------------------------------------------------------------------

#[test]
fn stages_lists_every_builtin_title() {
    for title in [
        "Source", "Build", "Test", "Quality", "Package", "Deploy", "Monitor",
    ] {
        pipex()
            .arg("stages")
            .assert()
            .success()
            .stdout(predicate::str::contains(title));
    }
}

#[test]
fn stages_json_is_an_array_of_seven() {
    let output = pipex().args(["stages", "--json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let stages: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stages.as_array().unwrap().len(), 7);
    assert_eq!(stages[1]["title"], "Build");
}

// ---------------------------------------------------------------------------
// pipex show
// ---------------------------------------------------------------------------

#[test]
fn show_expands_one_stage() {
    pipex()
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[-] 2. Build"))
        .stdout(predicate::str::contains("[+] 1. Source"))
        .stdout(predicate::str::contains("Tools:"));
}

#[test]
fn show_json_emits_the_stage() {
    let output = pipex().args(["show", "2", "--json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let stage: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stage["id"], 2);
    assert_eq!(stage["title"], "Build");
    assert!(stage["tools"].as_array().unwrap().contains(&"Cargo".into()));
}

#[test]
fn show_unknown_stage_fails() {
    pipex()
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stage not found: 99"));
}

// ---------------------------------------------------------------------------
// --catalog / PIPEX_CATALOG
// ---------------------------------------------------------------------------

#[test]
fn custom_catalog_replaces_builtin() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "catalog.yaml", CUSTOM_CATALOG);

    pipex()
        .args(["--catalog", path.to_str().unwrap(), "stages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lint"))
        .stdout(predicate::str::contains("Ship"))
        .stdout(predicate::str::contains("Monitor").not());
}

#[test]
fn catalog_env_var_is_honored() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "catalog.yaml", CUSTOM_CATALOG);

    pipex()
        .env("PIPEX_CATALOG", &path)
        .arg("stages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lint"));
}

#[test]
fn missing_catalog_file_fails() {
    pipex()
        .args(["--catalog", "/nonexistent/catalog.yaml", "stages"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
}

// ---------------------------------------------------------------------------
// pipex catalog validate / export
// ---------------------------------------------------------------------------

#[test]
fn catalog_validate_accepts_good_file() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "catalog.yaml", CUSTOM_CATALOG);

    pipex()
        .args(["catalog", "validate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 2 stages"));
}

#[test]
fn catalog_validate_rejects_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let yaml = "\
stages:
  - id: 1
    title: A
    summary: s
    details: d
  - id: 1
    title: B
    summary: s
    details: d
";
    let path = write_catalog(&dir, "dup.yaml", yaml);

    pipex()
        .args(["catalog", "validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate stage id: 1"));
}

#[test]
fn catalog_validate_rejects_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "empty.yaml", "stages: []\n");

    pipex()
        .args(["catalog", "validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog is empty"));
}

#[test]
fn catalog_export_roundtrips_through_validate() {
    let output = pipex().args(["catalog", "export"]).assert().success();
    let yaml = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(yaml.contains("stages:"));

    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "exported.yaml", &yaml);

    pipex()
        .args(["catalog", "validate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 7 stages"));
}

// ---------------------------------------------------------------------------
// Reference tables
// ---------------------------------------------------------------------------

#[test]
fn environments_table() {
    pipex()
        .arg("environments")
        .assert()
        .success()
        .stdout(predicate::str::contains("development"))
        .stdout(predicate::str::contains("production"))
        .stdout(predicate::str::contains("PROMOTION GATE"));
}

#[test]
fn metrics_table() {
    pipex()
        .arg("metrics")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deployment frequency"))
        .stdout(predicate::str::contains("Change failure rate"));
}

#[test]
fn metrics_json() {
    let output = pipex().args(["metrics", "--json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let metrics: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(metrics.as_array().unwrap().len(), 4);
}

#[test]
fn tools_table() {
    pipex()
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("CI servers"))
        .stdout(predicate::str::contains("Observability"));
}
