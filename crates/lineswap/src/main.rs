//! `lineswap` binary entry point.
//!
//! Delegates to [`lineswap::run`] with the process arguments and locked
//! standard streams.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    lineswap::run(std::env::args_os(), &mut stdout, &mut stderr)
}
