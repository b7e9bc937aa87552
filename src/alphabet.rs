//! Character classes and the alphabet passwords are drawn from.
//!
//! The base alphabet is the four fixed classes concatenated in order:
//! uppercase, lowercase, digits, special. Exclusions are applied by
//! filtering, so survivors keep their relative order.

use crate::error::GenerateError;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// An ordered, non-empty pool of candidate characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// The full base alphabet with no exclusions.
    pub fn base() -> Self {
        let chars = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL]
            .iter()
            .flat_map(|class| class.chars())
            .collect();
        Self { chars }
    }

    /// Base alphabet minus every character in `exclude`.
    ///
    /// Characters in `exclude` that are not part of the base alphabet are
    /// ignored.
    ///
    /// # Errors
    /// Returns [`GenerateError::EmptyAlphabet`] when nothing survives.
    pub fn excluding(exclude: &str) -> Result<Self, GenerateError> {
        let mut alphabet = Self::base();
        if !exclude.is_empty() {
            alphabet.chars.retain(|c| !exclude.contains(*c));
        }
        if alphabet.chars.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }
        Ok(alphabet)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}
