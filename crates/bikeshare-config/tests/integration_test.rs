//! Integration tests for bikeshare-config crate.

use bikeshare_common::DashboardError;
use bikeshare_config::{ColorScheme, Config, ConfigLoader};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_full_yaml_config_round_trip() {
    let yaml = r##"
data:
  path: day.csv
server:
  host: 0.0.0.0
  port: 8600
graphs:
  background_color: "#F0F0F0"
  color_scheme: monochrome
  font_family: DejaVu Sans
  title_font_size: 18
  label_font_size: 12
  scale: 1.5
  show_grid: false
logging:
  level: debug
  json: true
  spans: true
  file: /tmp/dashboard.log
"##;
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = ConfigLoader::load_from_file(file.path()).unwrap();

    assert_eq!(config.data.path, PathBuf::from("day.csv"));
    assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:8600");
    assert_eq!(config.graphs.color_scheme, ColorScheme::Monochrome);
    assert!(!config.graphs.show_grid);

    let logging = config.logging.to_logging_config();
    assert_eq!(logging.level, "debug");
    assert!(logging.json_format);
    assert!(logging.include_spans);
    assert!(!logging.pretty_format);
    assert_eq!(logging.file_path, Some(PathBuf::from("/tmp/dashboard.log")));
}

#[test]
fn test_pretty_logging_reaches_bootstrap_config() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"[logging]\npretty = true\n").unwrap();

    let logging = ConfigLoader::load_from_file(file.path())
        .unwrap()
        .logging
        .to_logging_config();
    assert!(logging.pretty_format);
    assert!(!logging.include_spans);
}

#[test]
fn test_invalid_config_surfaces_as_dashboard_error() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(b"graphs:\n  scale: 12.0\n").unwrap();

    let err: DashboardError = ConfigLoader::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, DashboardError::Config { .. }));
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_default_config_serializes_to_yaml() {
    let yaml = serde_yaml::to_string(&Config::default()).unwrap();
    assert!(yaml.contains("path: data.csv"));
    assert!(yaml.contains("port: 8501"));
}
