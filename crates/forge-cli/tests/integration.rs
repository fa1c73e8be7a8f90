#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn forge(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("forge").unwrap();
    cmd.current_dir(dir.path())
        .env("FORGE_DIR", dir.path().join("papers"));
    cmd
}

fn setup_json(dir: &TempDir, args: &[&str]) -> Value {
    let output = forge(dir)
        .arg("--json")
        .arg("setup")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "setup failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// forge init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_base_dir_and_config() {
    let dir = TempDir::new().unwrap();
    forge(&dir).arg("init").assert().success();

    assert!(dir.path().join("papers").is_dir());
    assert!(dir.path().join("papers/forge.yaml").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    forge(&dir).arg("init").assert().success();
    forge(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:  forge.yaml"));
}

// ---------------------------------------------------------------------------
// forge setup
// ---------------------------------------------------------------------------

#[test]
fn setup_creates_project_and_records_name() {
    let dir = TempDir::new().unwrap();
    let md = dir.path().join("draft.md");
    std::fs::write(&md, "# Draft").unwrap();

    let out = setup_json(
        &dir,
        &["Quantum Entanglement!", "--md-file", md.to_str().unwrap()],
    );
    let name = out["name"].as_str().unwrap();
    assert!(name.starts_with("quantum_entanglement_"));
    assert_eq!(out["reused_name"], false);
    assert_eq!(out["markdown"], "created");
    assert_eq!(out["latex"], "absent");

    let project_dir = dir.path().join("papers").join(name);
    assert!(project_dir.is_dir());
    assert_eq!(
        std::fs::read_to_string(project_dir.join(format!("{name}.md"))).unwrap(),
        "# Draft"
    );
    assert!(dir.path().join("papers/name_cache.json").exists());
}

#[test]
fn setup_reuses_name_for_equivalent_prompt() {
    let dir = TempDir::new().unwrap();
    let first = setup_json(&dir, &["Swarm Robotics"]);
    let second = setup_json(&dir, &["  swarm   ROBOTICS  "]);

    assert_eq!(first["name"], second["name"]);
    assert_eq!(second["reused_name"], true);
}

#[test]
fn setup_keeps_existing_variant_unless_regenerating() {
    let dir = TempDir::new().unwrap();
    let old = dir.path().join("old.md");
    let new = dir.path().join("new.md");
    std::fs::write(&old, "OLD").unwrap();
    std::fs::write(&new, "NEW").unwrap();

    let out = setup_json(&dir, &["topic", "--md-file", old.to_str().unwrap()]);
    let name = out["name"].as_str().unwrap().to_string();
    let md_path = dir.path().join("papers").join(&name).join(format!("{name}.md"));

    let kept = setup_json(&dir, &["topic", "--md-file", new.to_str().unwrap()]);
    assert_eq!(kept["markdown"], "skipped");
    assert_eq!(std::fs::read_to_string(&md_path).unwrap(), "OLD");

    let replaced = setup_json(
        &dir,
        &["topic", "--md-file", new.to_str().unwrap(), "--regenerate-md"],
    );
    assert_eq!(replaced["markdown"], "overwritten");
    assert_eq!(std::fs::read_to_string(&md_path).unwrap(), "NEW");
}

#[test]
fn setup_punctuation_only_prompt_gets_untitled_name() {
    let dir = TempDir::new().unwrap();
    let out = setup_json(&dir, &["!!!???"]);
    let name = out["name"].as_str().unwrap();
    assert!(name.starts_with("untitled_"), "got {name}");
}

#[test]
fn setup_missing_content_file_fails() {
    let dir = TempDir::new().unwrap();
    forge(&dir)
        .args(["setup", "topic", "--md-file", "does-not-exist.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// ---------------------------------------------------------------------------
// forge lookup
// ---------------------------------------------------------------------------

#[test]
fn lookup_unknown_prompt_fails() {
    let dir = TempDir::new().unwrap();
    forge(&dir)
        .args(["lookup", "never seen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no project recorded"));
}

#[test]
fn lookup_after_setup_prints_name() {
    let dir = TempDir::new().unwrap();
    let out = setup_json(&dir, &["Swarm Robotics"]);
    let name = out["name"].as_str().unwrap();

    forge(&dir)
        .args(["lookup", "swarm robotics"])
        .assert()
        .success()
        .stdout(predicate::str::contains(name));
}

// ---------------------------------------------------------------------------
// forge list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_projects_and_artifacts() {
    let dir = TempDir::new().unwrap();
    let md = dir.path().join("draft.md");
    std::fs::write(&md, "# Draft").unwrap();
    let out = setup_json(&dir, &["Swarm Robotics", "--md-file", md.to_str().unwrap()]);
    let name = out["name"].as_str().unwrap();

    forge(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(name));

    let output = forge(&dir).args(["--json", "list"]).output().unwrap();
    let rows: Value = serde_json::from_slice(&output.stdout).unwrap();
    let row = &rows.as_array().unwrap()[0];
    assert_eq!(row["name"], *name);
    assert_eq!(row["markdown"], true);
    assert_eq!(row["latex"], false);
    assert_eq!(row["pdf"], false);
}

#[test]
fn list_empty_base_dir() {
    let dir = TempDir::new().unwrap();
    forge(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found"));
}
