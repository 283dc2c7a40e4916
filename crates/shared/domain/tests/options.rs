use serde_json::json;
use std::path::PathBuf;
use std::str::FromStr;
use uni_domain::manifest::ManifestConfig;
use uni_domain::options::{BuildCommand, Platform, ProjectOptions};

#[test]
fn project_options_defaults_are_sane() {
    let options = ProjectOptions::default();
    assert_eq!(options.input_dir, PathBuf::from("."));
    assert_eq!(options.platform, Platform::H5);
    assert_eq!(options.pages_json_path(), PathBuf::from("./pages.json"));
}

#[test]
fn project_options_deserialize_partially() {
    let options: ProjectOptions =
        serde_json::from_value(json!({ "platform": "mp-weixin" })).expect("options deserialize");
    assert_eq!(options.platform, Platform::MpWeixin);
    assert_eq!(options.input_dir, PathBuf::from("."));
}

#[test]
fn platform_parses_kebab_case() {
    assert_eq!(Platform::from_str("app").ok(), Some(Platform::App));
    assert_eq!(Platform::from_str("mp-qq").ok(), Some(Platform::MpQq));
    assert_eq!(Platform::App.style_key(), "app-plus");
    assert_eq!(Platform::H5.to_string(), "h5");
}

#[test]
fn build_command_parses_lowercase() {
    assert_eq!(BuildCommand::from_str("build").ok(), Some(BuildCommand::Build));
    assert!(BuildCommand::Build.is_build());
    assert!(!BuildCommand::default().is_build());
}

#[test]
fn manifest_router_mode_reads_nested_path() {
    let manifest = ManifestConfig::from(json!({ "h5": { "router": { "mode": "history" } } }));
    assert_eq!(manifest.router_mode(), Some("history"));

    let bare = ManifestConfig::from(json!({ "name": "demo" }));
    assert_eq!(bare.router_mode(), None);

    let wrong_type = ManifestConfig::from(json!({ "h5": { "router": { "mode": 1 } } }));
    assert_eq!(wrong_type.router_mode(), None);
}
