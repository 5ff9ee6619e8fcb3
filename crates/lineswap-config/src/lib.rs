//! Shared configuration for the `lineswap` line replacement tool.
//!
//! Values are layered by `ortho_config`: built-in defaults, then an optional
//! TOML file named by `--config-path` or `LINESWAP_CONFIG_PATH`, then
//! `LINESWAP_*` environment variables, and finally command-line flags.

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod options;

pub use defaults::{
    DEFAULT_LOG_FILTER, default_log_filter, default_log_filter_string, default_log_format,
    default_write_mode,
};
pub use options::{LogFormat, OptionParseError, WriteMode};

/// Resolved runtime configuration for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "LINESWAP")]
pub struct Config {
    /// `tracing` filter directive applied to diagnostic events.
    #[ortho_config(default = default_log_filter_string())]
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
    /// Output format for diagnostic events.
    #[ortho_config(default = default_log_format())]
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
    /// Strategy used when writing the edited file back.
    #[ortho_config(default = default_write_mode())]
    #[serde(default = "default_write_mode")]
    pub write_mode: WriteMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            write_mode: default_write_mode(),
        }
    }
}

impl Config {
    /// Filter directive handed to the telemetry subscriber.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Format used by the telemetry subscriber.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Persistence strategy for rewritten files.
    #[must_use]
    pub const fn write_mode(&self) -> WriteMode {
        self.write_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_quiet_and_in_place() {
        let config = Config::default();
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert_eq!(config.write_mode(), WriteMode::InPlace);
    }

    #[rstest]
    #[case("in_place", WriteMode::InPlace)]
    #[case("IN_PLACE", WriteMode::InPlace)]
    #[case("atomic", WriteMode::Atomic)]
    #[case("Atomic", WriteMode::Atomic)]
    fn write_mode_parses_case_insensitively(#[case] raw: &str, #[case] expected: WriteMode) {
        let parsed: WriteMode = raw.parse().expect("write mode should parse");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("json", LogFormat::Json)]
    #[case("COMPACT", LogFormat::Compact)]
    fn log_format_parses_case_insensitively(#[case] raw: &str, #[case] expected: LogFormat) {
        let parsed: LogFormat = raw.parse().expect("log format should parse");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn unknown_write_mode_is_rejected() {
        let result: Result<WriteMode, OptionParseError> = "journalled".parse();
        assert!(result.is_err());
    }

    #[test]
    fn only_json_logs_are_timestamped() {
        assert!(LogFormat::Json.timestamped());
        assert!(!LogFormat::Compact.timestamped());
    }

    #[test]
    fn loads_defaults_without_any_source() {
        let config = Config::load_from_iter([std::ffi::OsString::from("lineswap")])
            .expect("defaults alone must load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn write_mode_displays_as_snake_case() {
        assert_eq!(WriteMode::InPlace.to_string(), "in_place");
        assert_eq!(WriteMode::Atomic.to_string(), "atomic");
    }
}
