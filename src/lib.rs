use once_cell::sync::Lazy;

pub mod core;
pub mod types;
pub mod errors;
pub mod config;
mod id;

pub use types::{Alphabet, LOWERCASE_LETTERS, NUMBERS, UPPERCASE_LETTERS, URL_SAFE};
pub use errors::{NanoIdError, Result};
pub use config::GeneratorConfig;
pub use id::{checked_length, IdGenerator, Ids};

/// Length used when the caller does not pick one.
///
/// With the 64 character URL-safe alphabet this gives about a 1% chance of
/// any collision after a billion identifiers.
pub const DEFAULT_LENGTH: usize = 21;

static DEFAULT_GENERATOR: Lazy<IdGenerator> = Lazy::new(IdGenerator::default);

/// Generates a 21 character identifier from the URL-safe alphabet
pub fn nanoid() -> String {
    DEFAULT_GENERATOR.generate()
}

/// Generates a single identifier.
///
/// `length` defaults to [`DEFAULT_LENGTH`] and `alphabet` to
/// [`Alphabet::UrlSafe`]. Variants are concatenated in order, so
/// `Some(&[Alphabet::Numbers, Alphabet::from("abc")])` draws from 13 characters.
///
/// A length of zero always succeeds with an empty string. Any other length
/// fails with [`NanoIdError::EmptyAlphabet`] if the composed alphabet is empty.
pub fn generate(length: Option<usize>, alphabet: Option<&[Alphabet]>) -> Result<String> {
    let length = length.unwrap_or(DEFAULT_LENGTH);
    match alphabet {
        Some(variants) => id::generate_from(&crate::core::compose(variants), length),
        None => id::generate_from(DEFAULT_GENERATOR.alphabet(), length),
    }
}

/// Generates a single identifier drawing from the characters of `alphabet`
pub fn generate_with_alphabet(alphabet: &str, length: usize) -> Result<String> {
    let chars: Vec<char> = alphabet.chars().collect();
    id::generate_from(&chars, length)
}
