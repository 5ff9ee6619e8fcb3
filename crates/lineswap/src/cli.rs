//! CLI argument definitions for `lineswap`.
//!
//! Shared by the runtime parser and the build script that renders the
//! manual page, so this module depends on nothing but `clap`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Replace one line of a text file in place.
#[derive(Parser, Debug)]
#[command(
    name = "lineswap",
    version,
    about = "Replace one line of a text file",
    after_help = "Configuration flags (--config-path, --log-filter, --log-format, \
                  --write-mode) must precede FILENAME."
)]
pub(crate) struct Cli {
    /// File whose line should be replaced.
    #[arg(value_name = "FILENAME")]
    pub(crate) filename: PathBuf,
    /// 1-based number of the line to replace. Non-numeric input reads as 0.
    #[arg(value_name = "LINE_NUMBER", allow_hyphen_values = true)]
    pub(crate) line_number: String,
    /// Replacement text; a trailing newline is appended.
    #[arg(value_name = "NEW_CONTENT", allow_hyphen_values = true)]
    pub(crate) new_content: OsString,
}
