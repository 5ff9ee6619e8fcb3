//! Error types for the CLI runtime.

use std::sync::Arc;

use thiserror::Error;

use crate::replace::ReplaceError;
use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("error: failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("error: failed to initialise logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("error: {0}")]
    Replace(#[from] ReplaceError),
}

impl AppError {
    /// Text written to stderr, without a trailing newline.
    ///
    /// Usage errors keep clap's message and usage block. Every other failure
    /// is folded onto a single line.
    pub(crate) fn render(&self) -> String {
        let text = self.to_string();
        match self {
            Self::CliUsage(_) => text.trim_end().to_owned(),
            _ => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn replace_failure_renders_on_one_line() {
        let error = AppError::Replace(ReplaceError::FileOpen {
            path: PathBuf::from("multi\nline.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone\n"),
        });
        let rendered = error.render();
        assert_eq!(rendered.lines().count(), 1, "{rendered:?}");
        assert!(rendered.starts_with("error: cannot open file multi line.txt"));
    }

    #[test]
    fn usage_error_loses_only_trailing_whitespace() {
        let error = clap::Error::raw(clap::error::ErrorKind::TooManyValues, "too many\n\n");
        let rendered = AppError::CliUsage(error).render();
        assert!(!rendered.ends_with('\n'), "{rendered:?}");
        assert!(rendered.contains("too many"));
    }
}
