use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;

fn beacon_convert(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("beacon-convert").unwrap();
    // Keep the developer's own config files and log settings out of the run
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_OUTPUT")
        .env_remove("LOG_FORMAT")
        .env_remove("BEACON_CONVERT_LOG_DIR");
    cmd
}

#[test]
fn test_cli_converts_fixed_paths() {
    let temp_dir = TempDir::new().unwrap();
    common::create_test_log(
        temp_dir.path(),
        common::INPUT_FILE,
        &common::log_line("2024-01-01 12:00:00", "GPS", "123456789012345", 45.123, 5.456),
    )
    .unwrap();

    beacon_convert(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion complete!"))
        .stdout(predicate::str::contains(common::OUTPUT_FILE));

    let json = fs::read_to_string(temp_dir.path().join(common::OUTPUT_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["number"], "123456789012345");
    assert_eq!(value[0]["positions"][0]["lat"], 45.123);
    assert_eq!(value[0]["positions"][0]["battery"], 100);
}

#[test]
fn test_cli_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();

    beacon_convert(&temp_dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(common::INPUT_FILE));

    assert!(!temp_dir.path().join(common::OUTPUT_FILE).exists());
}

#[test]
fn test_cli_console_logging_leaves_no_log_directory() {
    let temp_dir = TempDir::new().unwrap();
    common::create_test_log(temp_dir.path(), common::INPUT_FILE, "Mode: GPS").unwrap();

    beacon_convert(&temp_dir).assert().success();

    assert!(!temp_dir.path().join("logs").exists());
}

#[test]
fn test_cli_invalid_log_format_still_converts() {
    let temp_dir = TempDir::new().unwrap();
    common::create_test_log(temp_dir.path(), common::INPUT_FILE, "ICCID: 7 Mode: GPS").unwrap();

    beacon_convert(&temp_dir)
        .env("LOG_FORMAT", "text")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion complete!"))
        .stderr(predicate::str::contains("Warning: ignoring configuration"));

    let beacons: Vec<beacon_convert::Beacon> = serde_json::from_str(
        &fs::read_to_string(temp_dir.path().join(common::OUTPUT_FILE)).unwrap(),
    )
    .unwrap();
    assert_eq!(beacons[0].number, "7");
}

#[test]
fn test_cli_malformed_config_file_still_converts() {
    let temp_dir = TempDir::new().unwrap();
    common::create_test_log(temp_dir.path(), common::INPUT_FILE, "Mode: GPS").unwrap();
    fs::write(temp_dir.path().join("beacon-convert.toml"), "[logging\nlevel = ").unwrap();

    beacon_convert(&temp_dir).assert().success();

    assert!(temp_dir.path().join(common::OUTPUT_FILE).exists());
}
