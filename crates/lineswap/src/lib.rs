//! Replace a single line of a text file.
//!
//! The library exposes [`replace_line`] and [`LineReplacer`] for programmatic
//! use, plus [`run`], the command-line runtime behind the `lineswap` binary.
//! The runtime splits configuration flags from the positional command, loads
//! configuration, initialises telemetry and performs one replacement. IO
//! streams are injected so tests can drive it without a subprocess.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

mod cli;
mod config;
pub mod document;
mod errors;
mod line_number;
mod persist;
pub mod replace;
pub mod telemetry;

use cli::Cli;
use config::{ConfigLoader, OrthoConfigLoader, split_config_arguments};
pub use document::{Document, Line};
use errors::AppError;
pub use line_number::parse_line_number;
pub use lineswap_config::{Config, WriteMode};
pub use replace::{LineIndex, LineReplacer, ReplaceError, replace_line};

/// Bundles the output streams used by the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self { stdout, stderr }
    }
}

struct CliRunner<'a, 'io, W: Write, E: Write, L: ConfigLoader> {
    io: &'a mut IoStreams<'io, W, E>,
    loader: &'a L,
}

impl<'a, 'io, W, E, L> CliRunner<'a, 'io, W, E, L>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    fn new(io: &'a mut IoStreams<'io, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&args);

        let cli = match Cli::try_parse_from(&split.command_arguments) {
            Ok(cli) => cli,
            Err(error) if is_informational(&error) => {
                return match write!(self.io.stdout, "{error}") {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(_) => ExitCode::FAILURE,
                };
            }
            Err(error) => return self.fail(&AppError::CliUsage(error)),
        };

        match self.execute(&cli, &split.config_arguments) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => self.fail(&error),
        }
    }

    fn execute(&self, cli: &Cli, config_arguments: &[OsString]) -> Result<(), AppError> {
        let config = self.loader.load(config_arguments)?;
        telemetry::initialise(&config)?;

        let line = parse_line_number(&cli.line_number);
        LineReplacer::new(config.write_mode()).replace_line(
            &cli.filename,
            line,
            cli.new_content.as_encoded_bytes(),
        )?;
        Ok(())
    }

    fn fail(&mut self, error: &AppError) -> ExitCode {
        // Nothing useful remains to be done if stderr itself is broken.
        let _ = writeln!(self.io.stderr, "{}", error.render());
        ExitCode::FAILURE
    }
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// Runs the CLI using the provided arguments and output handles.
///
/// Returns [`ExitCode::SUCCESS`] after a replacement (or `--help` and
/// `--version` given as the first command token) and [`ExitCode::FAILURE`]
/// for every error. A usage error prints clap's message and usage block;
/// every other failure prints exactly one line to `stderr`.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}
