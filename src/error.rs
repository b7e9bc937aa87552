//! Error types for password generation and the CLI runner.

use crate::cli::{MAX_LENGTH, MIN_LENGTH};

/// Failures of the generator itself.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Exclusions removed every character of the base alphabet.
    #[error("no characters available for password generation after exclusions")]
    EmptyAlphabet,

    /// The secure random source could not produce bytes.
    #[error("secure random source failed: {0}")]
    Entropy(#[from] rand::Error),
}

/// A requested length outside the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LengthError {
    #[error("password length must be at least {min}", min = MIN_LENGTH)]
    TooShort(i64),

    #[error("password length cannot exceed {max} characters", max = MAX_LENGTH)]
    TooLong(i64),
}

/// Top-level error surfaced by [`crate::run_from`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Length(#[from] LengthError),

    #[error("failed to generate password: {0}")]
    Generate(#[from] GenerateError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error. Every failure is terminal.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) | Error::Length(_) | Error::Generate(_) | Error::Io(_) => 1,
        }
    }
}
