use log::trace;
use rand::Rng;

use crate::core::{compose, sampler::draw};
use crate::errors::{NanoIdError, Result};
use crate::types::URL_SAFE;
use crate::{Alphabet, GeneratorConfig, DEFAULT_LENGTH};

/// A reusable identifier generator with a fixed alphabet and length.
///
/// The alphabet is composed once at construction. Every call to
/// [`IdGenerator::generate`] draws fresh characters, so identifiers from the
/// same instance are independent of each other. The generator holds no
/// mutable state and can be shared between threads freely.
///
/// Randomness comes from [`rand::rng`]. Identifiers are hard to collide, not
/// hard to guess; do not rely on them as secrets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    // Non-empty whenever `length > 0`
    alphabet: Vec<char>,
    length: usize,
}

impl IdGenerator {
    /// Creates a generator drawing `length` characters from the concatenation of `alphabet`.
    ///
    /// Fails with [`NanoIdError::EmptyAlphabet`] if the composed alphabet has
    /// no characters and `length` is non-zero.
    pub fn new(alphabet: &[Alphabet], length: usize) -> Result<Self> {
        Self::from_chars(compose(alphabet), length)
    }

    /// Creates a generator over the characters of a raw string
    pub fn with_alphabet(alphabet: &str, length: usize) -> Result<Self> {
        Self::from_chars(alphabet.chars().collect(), length)
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let length = checked_length(config.length)?;
        Self::new(&config.alphabet, length)
    }

    fn from_chars(alphabet: Vec<char>, length: usize) -> Result<Self> {
        if alphabet.is_empty() && length > 0 {
            return Err(NanoIdError::EmptyAlphabet);
        }

        trace!("Creating id generator (alphabet: {} chars, length: {})", alphabet.len(), length);
        Ok(Self { alphabet, length })
    }

    pub fn generate(&self) -> String {
        self.generate_with_rng(&mut rand::rng())
    }

    /// Generates an identifier using the given random source instead of the thread-local one
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.length).map(|_| draw(&self.alphabet, rng)).collect()
    }

    /// Returns an endless iterator of freshly generated identifiers
    pub fn iter(&self) -> Ids<'_> {
        Ids { generator: self }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for IdGenerator {
    /// URL-safe alphabet, 21 characters
    fn default() -> Self {
        Self {
            alphabet: URL_SAFE.chars().collect(),
            length: DEFAULT_LENGTH,
        }
    }
}

pub struct Ids<'a> {
    generator: &'a IdGenerator,
}

impl Iterator for Ids<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generator.generate())
    }
}

/// Converts a signed length, rejecting negative values with [`NanoIdError::InvalidLength`]
pub fn checked_length(length: i64) -> Result<usize> {
    usize::try_from(length).map_err(|_| NanoIdError::InvalidLength(length))
}

/// One-off generation over an already composed alphabet.
pub(crate) fn generate_from(alphabet: &[char], length: usize) -> Result<String> {
    if length == 0 {
        return Ok(String::new());
    }
    if alphabet.is_empty() {
        return Err(NanoIdError::EmptyAlphabet);
    }

    let mut rng = rand::rng();
    Ok((0..length).map(|_| draw(alphabet, &mut rng)).collect())
}
