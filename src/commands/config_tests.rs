use tempfile::TempDir;

use super::{format_config_text, run_config_show_impl, run_config_validate_impl};
use crate::cli::ConfigOutputFormat;
use crate::config::Config;
use crate::output::OutputFormat;
use crate::stats::StatName;

#[test]
fn validate_config_nonexistent_file_returns_error() {
    let path = std::path::Path::new("nonexistent_config.toml");
    let err = run_config_validate_impl(path).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn validate_config_invalid_toml_returns_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("invalid.toml");
    std::fs::write(&config_path, "this is not valid { toml }").unwrap();

    assert!(run_config_validate_impl(&config_path).is_err());
}

#[test]
fn validate_config_valid_minimal_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("minimal.toml");
    std::fs::write(&config_path, "# minimal valid config\n").unwrap();

    assert!(run_config_validate_impl(&config_path).is_ok());
}

#[test]
fn validate_config_rejects_unknown_statistic() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[report]\nstats = [\"median-length\"]\n").unwrap();

    assert!(run_config_validate_impl(&config_path).is_err());
}

#[test]
fn validate_config_rejects_empty_stats() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("empty.toml");
    std::fs::write(&config_path, "[report]\nstats = []\n").unwrap();

    let err = run_config_validate_impl(&config_path).unwrap_err();
    assert!(err.to_string().contains("at least one statistic"));
}

#[test]
fn format_config_text_lists_sections() {
    let text = format_config_text(&Config::default());
    assert!(text.contains("=== Effective Configuration ==="));
    assert!(text.contains("[report]"));
    assert!(text.contains("\"total-posts-per-week\""));
    assert!(text.contains("include_empty_periods = false"));
    assert!(text.contains("[output]"));
    assert!(text.contains("format = \"text\""));
}

#[test]
fn show_json_reflects_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(
        &config_path,
        "[report]\nstats = [\"max-character-length\"]\n\n[output]\nformat = \"md\"\n",
    )
    .unwrap();

    let output =
        run_config_show_impl(Some(&config_path), ConfigOutputFormat::Json, false).unwrap();
    let config: Config = serde_json::from_str(&output).unwrap();
    assert_eq!(config.report.stats, vec![StatName::MaxPostLength]);
    assert_eq!(config.output.format, OutputFormat::Markdown);
}

#[test]
fn show_without_config_uses_defaults() {
    let output = run_config_show_impl(None, ConfigOutputFormat::Text, true).unwrap();
    assert_eq!(output, format_config_text(&Config::default()));
}
