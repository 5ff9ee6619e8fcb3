//! Diagnostic logging for a single `lineswap` invocation.
//!
//! Events go to stderr so stdout stays reserved for `--help` and `--version`.
//! The default `warn` filter keeps a successful replacement silent; raise it
//! with `--log-filter=debug` to see the load, replace and persist steps.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing_subscriber::fmt::{self, time::UtcTime};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, Registry};

use lineswap_config::{Config, LogFormat};

type StderrLayer = Box<dyn Layer<Registry> + Send + Sync>;

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Reasons the diagnostic logger could not be set up.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The `log_filter` setting is not a valid `tracing` directive.
    #[error("invalid log filter {directive:?}: {reason}")]
    Filter {
        /// Directive as configured.
        directive: String,
        /// Parser complaint.
        reason: String,
    },
    /// Another global logger was registered before ours.
    #[error("cannot install logger: {0}")]
    Install(#[source] TryInitError),
}

/// Registers the stderr logger described by `config`.
///
/// Only the first call has an effect; the runtime tests drive several
/// invocations through one process and share that logger.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable directive and
/// [`TelemetryError::Install`] when a global logger already exists.
pub fn initialise(config: &Config) -> Result<(), TelemetryError> {
    INSTALLED.get_or_try_init(|| install(config)).map(|_| ())
}

fn install(config: &Config) -> Result<(), TelemetryError> {
    let filter = parse_filter(config.log_filter())?;
    tracing_subscriber::registry()
        .with(stderr_layer(config.log_format()).with_filter(filter))
        .try_init()
        .map_err(TelemetryError::Install)
}

fn parse_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|error| TelemetryError::Filter {
        directive: directive.to_owned(),
        reason: error.to_string(),
    })
}

fn stderr_layer(format: LogFormat) -> StderrLayer {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(!format.timestamped() && io::stderr().is_terminal());
    match format {
        LogFormat::Json => layer
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .with_timer(UtcTime::rfc_3339())
            .boxed(),
        // A one-shot command has no use for wall-clock time at a terminal.
        LogFormat::Compact => layer.compact().without_time().boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn rejects_unparsable_filter() {
        let error = parse_filter("lineswap=notalevel").expect_err("filter should be rejected");
        match error {
            TelemetryError::Filter { directive, .. } => {
                assert_eq!(directive, "lineswap=notalevel");
            }
            other => panic!("expected filter error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("warn")]
    #[case("lineswap=debug")]
    #[case("info,lineswap::persist=trace")]
    fn accepts_common_directives(#[case] directive: &str) {
        assert!(parse_filter(directive).is_ok());
    }
}
