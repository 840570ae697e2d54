//! CLI TOML configuration tests
//!
//! Configuration files, the default configuration location and command-line
//! overrides.

use crate::common::fixtures::*;
use clap::Parser;
use serial_test::serial;
use sourcescan::app::cli::args::*;
use sourcescan::app::cli::config::default_config_path;
use tempfile::TempDir;
use toml::Table;

#[test]
fn test_toml_values_leave_cli_values_alone() {
    let cli_args = vec![
        "sourcescan".to_string(),
        "--exclude".to_string(),
        "build".to_string(),
    ];
    let mut args = Args::try_parse_from(&cli_args).unwrap();

    let mut config = Table::new();
    config.insert(
        "exclude".to_string(),
        toml::Value::Array(vec![toml::Value::String("vendor".to_string())]),
    );
    config.insert(
        "target".to_string(),
        toml::Value::String("needle".to_string()),
    );
    Args::apply_toml_values(&mut args, &config).unwrap();

    assert_eq!(args.exclude, vec!["build".to_string()]);
    assert_eq!(args.target, Some("needle".to_string()));
}

#[test]
fn test_explicit_config_file_is_applied() {
    let project = web_project();
    let root = project.path();
    let config_home = TempDir::new().unwrap();
    let config = write_file(
        config_home.path(),
        "scan.toml",
        format!(
            "root = {:?}\ntarget = \"bold =\"\nextensions = [\"js\"]\n",
            root.to_string_lossy()
        ),
    );

    let output = sourcescan_cmd(config_home.path())
        .arg("--config-file")
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        format!(
            "FOUND in: {}\nLine 1: export const bold = true;\nSearch complete.\n",
            root.join("src").join("util.js").display()
        )
    );
}

#[test]
fn test_command_line_overrides_config_file() {
    let project = web_project();
    let root = project.path();
    let config_home = TempDir::new().unwrap();
    let config = write_file(
        config_home.path(),
        "scan.toml",
        "target = \"bold =\"\nextensions = [\"js\"]\n",
    );

    let output = sourcescan_cmd(config_home.path())
        .arg("--config-file")
        .arg(&config)
        .arg("--root")
        .arg(root)
        .args(["--target", "boldss", "--extension", ".ts"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!(
            "FOUND in: {}\nLine 1: const boldss = 1;\nSearch complete.\n",
            root.join("app.ts").display()
        )
    );
}

#[test]
fn test_missing_config_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");

    let output = run_scan(
        temp_dir.path(),
        &["--config-file", missing.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "");
    let stderr = stderr_of(&output);
    assert!(stderr.contains("FATAL"));
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_invalid_config_value_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_file(temp_dir.path(), "bad.toml", "extensions = 7\n");

    let output = run_scan(
        temp_dir.path(),
        &["--config-file", config.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("'extensions'"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_file_is_discovered() {
    let project = web_project();
    let root = project.path();
    let config_home = TempDir::new().unwrap();
    write_file(
        config_home.path(),
        "Sourcescan/sourcescan.toml",
        "target = \"bold =\"\nextensions = \"js\"\n",
    );

    let output = sourcescan_cmd(config_home.path())
        .arg("--root")
        .arg(root)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("util.js"));
    assert!(!stdout_of(&output).contains("app.ts"));
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_default_config_path_follows_xdg_config_home() {
    let config_home = TempDir::new().unwrap();
    let previous = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_var("XDG_CONFIG_HOME", config_home.path());

    let path = default_config_path();
    write_file(
        config_home.path(),
        "Sourcescan/sourcescan.toml",
        "target = \"from-default\"\n",
    );
    let mut args = Args::default();
    let loaded = args.load_config_file();

    match previous {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }

    assert_eq!(
        path,
        Some(config_home.path().join("Sourcescan").join("sourcescan.toml"))
    );
    assert_eq!(loaded.unwrap(), path);
    assert_eq!(args.target, Some("from-default".to_string()));
}
