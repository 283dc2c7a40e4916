use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PAGES: &str = r#"{
    // two pages, no tab bar
    "pages": [
        { "path": "pages/index/index" },
        { "path": "pages/about/about", "style": { "enablePullDownRefresh": true } },
    ],
}"#;

fn project(manifest: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("manifest.json"), manifest).unwrap();
    fs::write(dir.path().join("pages.json"), PAGES).unwrap();
    dir
}

fn uni(cwd: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("uni").unwrap();
    cmd.current_dir(cwd.path()).env_remove("RUST_LOG").env_remove("UNI__PLATFORM");
    cmd
}

#[test]
fn features_prints_json_defines() {
    let dir = project(r#"{ "h5": { "router": { "mode": "history" } } }"#);

    uni(&dir)
        .args(["features", "--input-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""__UNI_FEATURE_PAGES__": true"#))
        .stdout(predicate::str::contains(r#""__UNI_FEATURE_TABBAR__": false"#))
        .stdout(predicate::str::contains(r#""__UNI_FEATURE_PULL_DOWN_REFRESH__": true"#))
        .stdout(predicate::str::contains(r#""__UNI_FEATURE_ROUTER_MODE__": "\"history\"""#));
}

#[test]
fn features_prints_define_lines() {
    let dir = project("{}");

    uni(&dir)
        .args(["features", "--command", "build", "--format", "define", "-i"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("__UNI_FEATURE_WX__=true\n"))
        .stdout(predicate::str::contains("__UNI_FEATURE_ROUTER_MODE__=\"hash\"\n"))
        .stdout(predicate::str::contains("__UNI_FEATURE_NVUE__=false\n"));
}

#[test]
fn features_reads_options_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("manifest.json"), "{}").unwrap();
    fs::write(src.join("pages.json"), PAGES).unwrap();
    fs::write(dir.path().join("uni.toml"), "input_dir = \"src\"\nplatform = \"app\"\n").unwrap();

    uni(&dir)
        .args(["features", "--format", "define"])
        .assert()
        .success()
        .stdout(predicate::str::contains("__UNI_FEATURE_PAGES__=true"));
}

#[test]
fn environment_overrides_the_platform() {
    let dir = project("{}");

    uni(&dir)
        .env("UNI__PLATFORM", "mp-unknown")
        .args(["features"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load project options"));
}

#[test]
fn missing_project_files_fail() {
    let dir = tempfile::tempdir().unwrap();

    uni(&dir)
        .args(["features", "--input-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to resolve features"))
        .stderr(predicate::str::contains("manifest.json"));
}

#[test]
fn invoke_logs_the_forwarded_capability() {
    let dir = tempfile::tempdir().unwrap();

    uni(&dir)
        .args(["invoke", "--message", r#"{"name":"navigateTo","arg":{"url":"/pages/a"}}"#])
        .args(["--page-id", "3"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("navigateTo"))
        .stderr(predicate::str::contains("/pages/a"));
}

#[test]
fn invoke_ignores_post_message() {
    let dir = tempfile::tempdir().unwrap();

    uni(&dir)
        .args(["invoke", "-m", r#"{"name":"postMessage","arg":{"msg":"x"}}"#])
        .assert()
        .success()
        .stderr(predicate::str::contains("App service call").not());
}

#[test]
fn invoke_rejects_unknown_names() {
    let dir = tempfile::tempdir().unwrap();

    uni(&dir)
        .args(["invoke", "-m", r#"{"name":"share","arg":{}}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode web invoke message"));
}
