//! Separates configuration flags from the positional command.
//!
//! Configuration flags are only recognised ahead of `FILENAME`. Once the
//! first token that is not a known flag appears, it and everything after it
//! belong to the command, so replacement text such as `--log-filter` is never
//! mistaken for configuration.
//!
//! The command half is then fenced with `--` so `clap` reads every token as a
//! positional, whether it looks like `--help`, `-V` or a path starting with a
//! hyphen. Only a help or version flag in the very first command slot, or an
//! explicit `--` there, is passed through untouched.

use std::ffi::{OsStr, OsString};

use lineswap_config::Config;
use ortho_config::OrthoConfig;

use crate::errors::AppError;

/// Flags forwarded to the configuration loader.
///
/// Must match the fields of [`lineswap_config::Config`] plus the loader's
/// own `--config-path`.
const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--write-mode",
];

/// Tokens that keep their flag meaning when they open the command.
const LEADING_ONLY_FLAGS: &[&str] = &["-h", "--help", "-V", "--version", "--"];

pub(crate) trait ConfigLoader {
    /// Loads configuration from the program name plus leading config flags.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

/// Loads configuration through `ortho_config` layering.
pub(crate) struct OrthoConfigLoader;

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// A recognised flag; `needs_value` when its value is the next argument.
    ConfigFlag { needs_value: bool },
    /// Anything else; the command starts here.
    Command,
}

fn opens_with_flag(argument: &OsStr) -> bool {
    argument
        .to_str()
        .is_some_and(|text| LEADING_ONLY_FLAGS.contains(&text))
}

fn classify(argument: &OsStr) -> Token {
    let Some(text) = argument.to_str() else {
        return Token::Command;
    };
    let (flag, inline_value) = match text.split_once('=') {
        Some((flag, _)) => (flag, true),
        None => (text, false),
    };
    if CONFIG_CLI_FLAGS.contains(&flag) {
        Token::ConfigFlag {
            needs_value: !inline_value,
        }
    } else {
        Token::Command
    }
}

/// Arguments partitioned between the configuration loader and `clap`.
///
/// Both halves start with the program name so each parser sees a complete
/// argument vector. The command half carries a `--` after the program name
/// unless it opens with a help, version or `--` token.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) command_arguments: Vec<OsString>,
}

pub(crate) fn split_config_arguments(args: &[OsString]) -> ArgumentSplit {
    let Some((program, rest)) = args.split_first() else {
        return ArgumentSplit::default();
    };

    let mut config_arguments = vec![program.clone()];
    let mut remaining = rest.iter();
    let mut command_arguments = vec![program.clone()];

    while let Some(argument) = remaining.next() {
        match classify(argument) {
            Token::ConfigFlag { needs_value } => {
                config_arguments.push(argument.clone());
                if needs_value {
                    if let Some(value) = remaining.next() {
                        config_arguments.push(value.clone());
                    }
                }
            }
            Token::Command => {
                if !opens_with_flag(argument) {
                    command_arguments.push(OsString::from("--"));
                }
                command_arguments.push(argument.clone());
                command_arguments.extend(remaining.cloned());
                break;
            }
        }
    }

    ArgumentSplit {
        config_arguments,
        command_arguments,
    }
}
