//! Password generation.
//!
//! Exposes [`generate`], which draws from the operating system's secure
//! random source, and [`generate_with`], which runs the same algorithm over
//! any caller-supplied cryptographic RNG (useful for tests and benchmarks).
//!
//! Each position consumes four random bytes read as a little-endian `u32`,
//! reduced modulo the alphabet size. The reduction carries a bias of at most
//! `alphabet_size / 2^32` per draw.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::alphabet::Alphabet;
use crate::error::GenerateError;

const BYTES_PER_CHAR: usize = 4;

/// Generate a password of `length` characters, excluding every character in
/// `exclude`, using the OS random source.
///
/// # Errors
/// - [`GenerateError::EmptyAlphabet`] if `exclude` covers the whole alphabet.
/// - [`GenerateError::Entropy`] if the OS random source fails.
pub fn generate(length: usize, exclude: &str) -> Result<String, GenerateError> {
    generate_with(&mut OsRng, length, exclude)
}

/// Same as [`generate`] but draws bytes from `rng`.
pub fn generate_with<R>(rng: &mut R, length: usize, exclude: &str) -> Result<String, GenerateError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let alphabet = Alphabet::excluding(exclude)?;
    log::debug!(
        "generating {} chars from {} candidate symbols",
        length,
        alphabet.len()
    );

    let mut bytes = vec![0u8; length * BYTES_PER_CHAR];
    log::trace!("requesting {} random bytes", bytes.len());
    rng.try_fill_bytes(&mut bytes)?;

    let password = sample(&alphabet, &bytes);
    bytes.fill(0);
    Ok(password)
}

/// Map each 4-byte chunk of `bytes` to one character of `alphabet`.
fn sample(alphabet: &Alphabet, bytes: &[u8]) -> String {
    let chars = alphabet.as_chars();
    let size = chars.len() as u32;
    bytes
        .chunks_exact(BYTES_PER_CHAR)
        .map(|chunk| {
            let value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            chars[(value % size) as usize]
        })
        .collect()
}
