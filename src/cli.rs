//! Command-line surface: clap types, help text and length validation.

use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::error::LengthError;

pub const DEFAULT_LENGTH: i64 = 16;
pub const MIN_LENGTH: i64 = 1;
pub const MAX_LENGTH: i64 = 1000;

const AFTER_HELP: &str = "\
Examples:
  passgen -l 20
  passgen --length 32 --exclude \"0O1lI\"
  passgen -l 16 -e \"{}[]\"

Character sets used:
  - Uppercase: A-Z
  - Lowercase: a-z
  - Digits: 0-9
  - Special: !@#$%^&*()_+-=[]{}|;:,.<>?";

/// PassGen - Secure Password Generator
#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    long_about = None,
    disable_version_flag = true,
    args_override_self = true,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Length of the password
    #[arg(
        short = 'l',
        long = "length",
        value_name = "NUMBER",
        default_value_t = DEFAULT_LENGTH,
        value_parser = parse_length,
        allow_hyphen_values = true
    )]
    pub length: i64,

    /// Characters to exclude from the password
    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "CHARS",
        allow_hyphen_values = true
    )]
    pub exclude: Option<String>,
}

impl Cli {
    /// The requested length, checked against `[MIN_LENGTH, MAX_LENGTH]`.
    pub fn length(&self) -> Result<PasswordLength, LengthError> {
        PasswordLength::try_from(self.length)
    }

    pub fn exclude(&self) -> &str {
        self.exclude.as_deref().unwrap_or("")
    }
}

/// Parse a length, tolerating surrounding whitespace (`" 12"`).
fn parse_length(value: &str) -> Result<i64, std::num::ParseIntError> {
    value.trim().parse()
}

/// A password length known to be within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PasswordLength {
    fn default() -> Self {
        Self(DEFAULT_LENGTH as usize)
    }
}

impl TryFrom<i64> for PasswordLength {
    type Error = LengthError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            v if v < MIN_LENGTH => Err(LengthError::TooShort(v)),
            v if v > MAX_LENGTH => Err(LengthError::TooLong(v)),
            v => Ok(Self(v as usize)),
        }
    }
}

/// True when `-h` or `--help` appears anywhere after the program name.
///
/// Help wins over every other argument, valid or not.
pub fn wants_help(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .any(|a| a.as_os_str() == "-h" || a.as_os_str() == "--help")
}

/// Rendered help text, without terminal styling.
pub fn help() -> String {
    Cli::command().render_help().to_string()
}
