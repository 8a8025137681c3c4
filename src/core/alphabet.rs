use log::trace;

use crate::Alphabet;

/// Concatenates the characters of every variant, in the order given.
///
/// Duplicates are kept: `[Numbers, Numbers]` yields twenty characters and
/// doubles the chance of drawing each digit. An empty slice (or only empty
/// custom strings) yields an empty alphabet, which is rejected once a
/// character actually has to be drawn from it.
pub fn compose(variants: &[Alphabet]) -> Vec<char> {
    let chars: Vec<char> = variants.iter().flat_map(|v| v.chars().chars()).collect();
    trace!("Composed alphabet of {} characters from {} variants", chars.len(), variants.len());
    chars
}
