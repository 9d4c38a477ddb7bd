//! Tests for root folder resolution and config file loading
//!
//! Tests that touch MYDICT_ROOT_FOLDER are marked #[serial] so they never
//! race each other on the process environment.

use mydict_common::config::{
    default_root_folder, resolve_root_folder, TomlConfig, ROOT_FOLDER_ENV,
};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
#[serial]
fn test_cli_argument_wins() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/mydict-from-env");
    let toml_config = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/mydict-from-toml")),
        ..Default::default()
    };

    let resolved = resolve_root_folder(
        Some(Path::new("/tmp/mydict-from-cli")),
        ROOT_FOLDER_ENV,
        &toml_config,
    );
    assert_eq!(resolved, PathBuf::from("/tmp/mydict-from-cli"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_env_var_beats_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/mydict-from-env");
    let toml_config = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/mydict-from-toml")),
        ..Default::default()
    };

    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &toml_config);
    assert_eq!(resolved, PathBuf::from("/tmp/mydict-from-env"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_toml_beats_default() {
    env::remove_var(ROOT_FOLDER_ENV);
    let toml_config = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/mydict-from-toml")),
        ..Default::default()
    };

    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &toml_config);
    assert_eq!(resolved, PathBuf::from("/tmp/mydict-from-toml"));
}

#[test]
#[serial]
fn test_no_overrides_uses_default() {
    env::remove_var(ROOT_FOLDER_ENV);

    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &TomlConfig::default());
    assert_eq!(resolved, default_root_folder());
    assert!(!resolved.as_os_str().is_empty());
}

#[test]
fn test_load_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 9000\nstatic_dir = \"assets\"\n").unwrap();

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config.port, Some(9000));
    assert_eq!(config.static_dir, Some(PathBuf::from("assets")));
    assert_eq!(config.root_folder, None);
}

#[test]
fn test_load_missing_config_file_is_error() {
    let dir = TempDir::new().unwrap();
    assert!(TomlConfig::load(&dir.path().join("absent.toml")).is_err());
}
