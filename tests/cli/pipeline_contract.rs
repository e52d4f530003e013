use crate::harness::TestContext;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn full_run_produces_flat_archive() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--yes", "--name", "demo", "--base-path", "/sites/demo", "--title", "Demo Site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Packaged"))
        .stdout(predicate::str::contains("sha256:"));

    let app_config = ctx.read("demo/Dioxus.toml");
    assert!(app_config.contains("base_path = \"/sites/demo\""));
    assert!(app_config.contains("title = \"Demo Site\""));

    let listing = fs::read_to_string(ctx.archive_path("demo")).unwrap();
    let entries: Vec<&str> = listing.lines().collect();
    assert_eq!(entries, vec!["./assets/app.wasm", "./index.html"]);

    let invocations = ctx.toolchain().invocations();
    let steps: Vec<&str> = invocations
        .iter()
        .filter(|line| ["cargo check", "dx build", "zip"].iter().any(|step| line.starts_with(step)))
        .map(String::as_str)
        .collect();
    assert_eq!(steps.len(), 3);
    assert!(steps[0].starts_with("cargo check --target wasm32-unknown-unknown (in "));
    assert!(steps[1].starts_with("dx build --release --platform web (in "));
    assert!(steps[2].starts_with("zip -r -q -X "));
    assert!(steps[2].contains("demo.zip . (in "));
    assert!(steps[2].ends_with("demo/release/web/public)"));
}

#[test]
#[serial]
fn missing_cargo_fails_before_any_file_is_written() {
    let ctx = TestContext::new();
    ctx.toolchain().remove("cargo");

    ctx.cli()
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: cargo is required but was not found"))
        .stderr(predicate::str::contains("rustup.rs"));

    assert!(ctx.work_dir_entries().is_empty());
}

#[test]
#[serial]
fn declining_the_run_changes_nothing() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Aborted: nothing was changed"));

    assert!(ctx.work_dir_entries().is_empty());
    assert!(ctx.toolchain().invocations().is_empty());
}

#[test]
#[serial]
fn declined_overwrite_keeps_existing_project() {
    let ctx = TestContext::new();
    ctx.write("dioxus-web-demo/notes.txt", "hand-written notes");
    let before = ctx.snapshot(&ctx.project_dir("dioxus-web-demo"));

    ctx.cli()
        .write_stdin("y\nn\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("was left unchanged"))
        .stderr(predicate::str::contains("pipeline aborted during project generation"));

    assert_eq!(ctx.snapshot(&ctx.project_dir("dioxus-web-demo")), before);
    assert!(!ctx.archive_path("dioxus-web-demo").exists());
}

#[test]
#[serial]
fn missing_zip_leaves_build_output_for_manual_upload() {
    let ctx = TestContext::new();
    ctx.toolchain().remove("zip");

    ctx.cli()
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("no archive was created"))
        .stdout(predicate::str::contains("/dioxus-web-demo"));

    assert!(!ctx.archive_path("dioxus-web-demo").exists());
    assert!(ctx.output_dir("dioxus-web-demo").join("index.html").is_file());
}

#[test]
#[serial]
fn stale_archive_is_replaced_not_appended() {
    let ctx = TestContext::new();
    ctx.write("dioxus-web-demo.zip", "stale archive bytes\n");

    ctx.cli().arg("--yes").assert().success();

    let listing = ctx.read("dioxus-web-demo.zip");
    assert!(!listing.contains("stale archive bytes"));
    assert!(listing.lines().any(|line| line == "./index.html"));
}

#[test]
#[serial]
fn build_failure_keeps_generated_project() {
    let ctx = TestContext::new();
    ctx.toolchain().fail("dx", "build");

    ctx.cli()
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("dx build failed"))
        .stderr(predicate::str::contains("pipeline aborted during build"));

    assert!(ctx.project_dir("dioxus-web-demo").join("src/main.rs").is_file());
    assert!(!ctx.archive_path("dioxus-web-demo").exists());
}

#[test]
#[serial]
fn build_without_output_is_a_failure() {
    let ctx = TestContext::new();
    ctx.toolchain().build_without_output();

    ctx.cli()
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Build output not found"));

    assert!(!ctx.archive_path("dioxus-web-demo").exists());
}

#[test]
#[serial]
fn malformed_base_path_is_rejected_up_front() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--yes", "--base-path", "demo/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base path 'demo/'"));

    assert!(ctx.work_dir_entries().is_empty());
    assert!(ctx.toolchain().invocations().is_empty());
}
