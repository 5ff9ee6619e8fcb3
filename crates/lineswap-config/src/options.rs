//! Enumerated settings that can arrive from a file, the environment or a flag.
//!
//! Both enums accept their snake_case name in any letter case, so
//! `--write-mode ATOMIC` and `write_mode = "atomic"` mean the same thing.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Rendering of diagnostic events on stderr.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event, timestamped, for wrappers that collect logs.
    Json,
    /// Terse `LEVEL message key=value` lines for people at a terminal.
    #[default]
    Compact,
}

impl LogFormat {
    /// Whether events carry a timestamp in this format.
    #[must_use]
    pub const fn timestamped(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// How the edited file is put back on disk.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WriteMode {
    /// Truncate the existing file and rewrite it through the same handle.
    ///
    /// Inode, permissions and hard links survive; an interrupted write can
    /// leave the file truncated or partially written.
    #[default]
    InPlace,
    /// Write a sibling temporary file, sync it, then rename it over the
    /// resolved target so readers see either the old or the new contents.
    Atomic,
}

/// Error returned when text names no known [`LogFormat`] or [`WriteMode`].
pub type OptionParseError = strum::ParseError;
