use std::io::Write;
use chrono::NaiveDate;
use stepca_console::config::{Config, ConfigError, Severity};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.form.key_name, "");
    assert_eq!(config.form.key_type, "EC");
    assert_eq!(config.form.duration, "24");
    assert_eq!(config.form.duration_unit, "h");
    assert_eq!(config.form.key_types, vec!["EC", "RSA", "OKP"]);
    assert_eq!(config.form.duration_units, vec!["s", "m", "h", "d"]);
    assert_eq!(config.submit.delay_ms, 2000);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());

    let names: Vec<&str> = config.certificates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["cert1", "cert2", "cert3"]);
    assert_eq!(config.certificates[1].status, "expired");
    assert_eq!(config.submit.renew_duration_secs, 86_400);

    let severities: Vec<Severity> = config.logs.iter().map(|l| l.severity).collect();
    assert_eq!(severities, vec![Severity::Debug, Severity::Info]);
    assert_eq!(config.logs[0].trace_id, "222");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("stepca-console/config.toml"));
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("load");
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let file = write_config(
        r#"
[form]
key_name = "web"
key_type = "RSA"

[submit]
delay_ms = 150

[[certificates]]
id = "1"
name = "only"
status = "active"
expiration_date = "2027-03-01"

[[logs]]
entry_id = "a1"
timestamp = "2026-10-01T08:30:00"
severity = "WARN"
message = "disk almost full"
trace_id = "t-9"
"#,
    );

    let config = Config::load_from(file.path()).expect("load");
    assert_eq!(config.form.key_name, "web");
    assert_eq!(config.form.key_type, "RSA");
    assert_eq!(config.form.duration_unit, "h");
    assert_eq!(config.submit.delay_ms, 150);
    assert_eq!(config.certificates.len(), 1);
    assert_eq!(
        config.certificates[0].expiration_date,
        NaiveDate::from_ymd_opt(2027, 3, 1).unwrap()
    );
    assert_eq!(config.logs.len(), 1);
    assert_eq!(config.logs[0].severity, Severity::Warn);
    assert!(config.logs[0].command.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_unknown_severity_is_parse_error() {
    let file = write_config(
        r#"
[[logs]]
entry_id = "a1"
timestamp = "2026-10-01T08:30:00"
severity = "FATAL"
message = "boom"
trace_id = "t"
"#,
    );
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_fails_zero_renew_duration() {
    let mut config = Config::default();
    config.submit.renew_duration_secs = 0;
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("Renew duration"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_parse_error_reports_path() {
    let file = write_config("[form\nkey_name = ");
    match Config::load_from(file.path()) {
        Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("Expected ParseError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_validation_fails_unknown_key_type() {
    let file = write_config(
        r#"
[form]
key_type = "DSA"
"#,
    );
    match Config::load_from(file.path()) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("DSA"));
        }
        other => panic!("Expected ValidationError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_validation_fails_empty_key_types() {
    let mut config = Config::default();
    config.form.key_types.clear();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("At least one key type"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_unknown_unit() {
    let mut config = Config::default();
    config.form.duration_unit = "w".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_fails_empty_units() {
    let mut config = Config::default();
    config.form.duration_units.clear();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("duration unit"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}
