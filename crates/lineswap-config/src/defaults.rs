use crate::options::{LogFormat, WriteMode};

/// Default log filter expression used by the binary.
///
/// Kept at `warn` so a successful one-shot run writes nothing to stderr.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Default persistence strategy for rewritten files.
#[must_use]
pub const fn default_write_mode() -> WriteMode {
    WriteMode::InPlace
}
