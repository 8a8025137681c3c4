use rand::Rng;

use crate::errors::{NanoIdError, Result};

/// Picks one character from `alphabet` with uniform probability.
///
/// The index comes from [`Rng::random_range`], which rejects out-of-range
/// samples instead of reducing modulo the length, so no character is favoured.
pub fn random_character<R: Rng + ?Sized>(alphabet: &[char], rng: &mut R) -> Result<char> {
    if alphabet.is_empty() {
        return Err(NanoIdError::EmptyAlphabet);
    }

    Ok(draw(alphabet, rng))
}

// alphabet must be non-empty
pub(crate) fn draw<R: Rng + ?Sized>(alphabet: &[char], rng: &mut R) -> char {
    alphabet[rng.random_range(0..alphabet.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character_alphabet() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert_eq!(random_character(&['x'], &mut rng).unwrap(), 'x');
        }
    }

    #[test]
    fn test_empty_alphabet() {
        let result = random_character(&[], &mut rand::rng());
        assert!(matches!(result, Err(NanoIdError::EmptyAlphabet)));
    }

    #[test]
    fn test_multibyte_characters() {
        let alphabet = ['λ', 'ж', '語'];
        let c = random_character(&alphabet, &mut rand::rng()).unwrap();
        assert!(alphabet.contains(&c));
    }
}
