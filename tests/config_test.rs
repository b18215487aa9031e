// tests/config_test.rs
use scope_tag::config::{load_config, parse_config, Config, CONFIG_FILE_NAME};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
branch = "trunk"

[pre_release]
name = "beta"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.branch, "trunk");
    assert_eq!(config.pre_release.name.as_deref(), Some("beta"));
    assert_eq!(config.pre_release.timestamp_layout, None);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/scopetag.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.branch, "release");
    assert_eq!(config.pre_release.name.as_deref(), Some("rc"));
    assert_eq!(config.pre_release.timestamp_layout.as_deref(), Some("datetime"));
    assert_eq!(config.build_metadata.as_deref(), Some("ci.42"));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_missing_file_fails() {
    assert!(load_config(Some("tests/fixtures/does-not-exist.toml")).is_err());
}

#[test]
fn test_invalid_values_fail_validation() {
    let config = parse_config(
        r#"
[pre_release]
name = "rc.1"
"#,
    )
    .unwrap();
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "build_metadata = \"local\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    assert_eq!(config.unwrap().build_metadata.as_deref(), Some("local"));
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.branch, "main");
    assert!(config.decoration().pre_release.is_empty());
}
