use std::fmt;

use serde::{Deserialize, Serialize};

pub const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
/// Uppercase, lowercase and digits followed by `-` and `_`. 64 characters.
pub const URL_SAFE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// A set of characters identifiers can be drawn from.
///
/// Variants are composed by concatenation, so passing the same variant twice
/// doubles the weight of its characters. Nothing is deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    #[default]
    UrlSafe,
    UppercaseLetters,
    LowercaseLetters,
    Numbers,
    Custom(String),
}

impl Alphabet {
    /// Returns the characters of this variant, in sampling order
    pub fn chars(&self) -> &str {
        match self {
            Alphabet::UrlSafe => URL_SAFE,
            Alphabet::UppercaseLetters => UPPERCASE_LETTERS,
            Alphabet::LowercaseLetters => LOWERCASE_LETTERS,
            Alphabet::Numbers => NUMBERS,
            Alphabet::Custom(s) => s,
        }
    }

    /// Number of characters (not bytes) this variant contributes
    pub fn len(&self) -> usize {
        self.chars().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.chars().is_empty()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.chars())
    }
}

// Macro to generate From impls for custom alphabets
macro_rules! impl_custom_alphabet_conversion {
    ($type:ty, $conv:expr) => {
        impl From<$type> for Alphabet {
            fn from(value: $type) -> Self {
                Alphabet::Custom($conv(value))
            }
        }
    };
}

impl_custom_alphabet_conversion!(String, |s: String| s);
impl_custom_alphabet_conversion!(&str, |s: &str| s.to_string());
impl_custom_alphabet_conversion!(char, |c: char| c.to_string());
