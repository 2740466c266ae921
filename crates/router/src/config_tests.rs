// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_config_uses_defaults() {
    let config = HistoryConfig::from_toml_str("").unwrap();

    assert_eq!(config, HistoryConfig::default());
    assert!(config.recovery_enabled);
    assert!(!config.timeline_enabled);
}

#[test]
fn parses_all_fields() {
    let config = HistoryConfig::from_toml_str(
        r#"
recovery_enabled = false
timeline_enabled = true
recovery_log = "/var/dagh/recovery.log"
timeline_log = "/var/dagh/timeline.jsonl"
"#,
    )
    .unwrap();

    assert!(!config.recovery_enabled);
    assert!(config.timeline_enabled);
    assert_eq!(
        config.recovery_log.as_deref(),
        Some(Path::new("/var/dagh/recovery.log"))
    );
    assert_eq!(
        config.timeline_log_path().unwrap(),
        Path::new("/var/dagh/timeline.jsonl")
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let result = HistoryConfig::from_toml_str("recovery_enabeld = true");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn missing_paths_are_reported_by_name() {
    let config = HistoryConfig::default();

    let err = config.recovery_log_path().unwrap_err();
    assert!(matches!(err, ConfigError::MissingPath("recovery_log")));
    assert!(err.to_string().contains("recovery_log"));
}

#[test]
fn load_resolves_relative_paths_against_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.toml");
    std::fs::write(
        &path,
        "recovery_log = \"logs/recovery.log\"\ntimeline_log = \"/abs/timeline.jsonl\"\n",
    )
    .unwrap();

    let config = HistoryConfig::load(&path).unwrap();

    assert_eq!(
        config.recovery_log,
        Some(dir.path().join("logs").join("recovery.log"))
    );
    assert_eq!(config.timeline_log, Some(PathBuf::from("/abs/timeline.jsonl")));
}

#[test]
fn load_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = HistoryConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
