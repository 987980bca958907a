//! Character sets used to synthesize short code candidates.
//!
//! The readable alphabet deliberately excludes visually ambiguous glyphs
//! (`0`/`o`, `1`/`i`/`l`) so codes stay typable when read off a screenshot
//! or over the phone. The consonant/vowel subsets drive the memorable
//! pattern in [`crate::utils::code_generator`].

use rand::Rng;

/// Digits and lowercase letters minus the ambiguous `0`, `1`, `i`, `l`, `o`.
pub const READABLE_CHARS: &str = "23456789abcdefghjkmnpqrstuvwxyz";

/// Vowels drawn at odd positions of memorable codes.
pub const VOWELS: &str = "aeu";

/// Consonants (digits included) drawn at even positions of memorable codes.
pub const CONSONANTS: &str = "23456789bcdfghjkmnpqrstvwxyz";

/// Draws one uniformly random character from `alphabet`.
///
/// Alphabets here are ASCII-only, so byte indexing is safe.
pub(crate) fn draw(alphabet: &str, rng: &mut impl Rng) -> char {
    let bytes = alphabet.as_bytes();
    bytes[rng.random_range(0..bytes.len())] as char
}

/// Total combinations the readable alphabet offers at a given code length.
///
/// At the starting length of 4 this is 31^4 = 923,521 — several times the
/// expected corpus of ~200,000 codes, which keeps early collision rates low.
pub fn combinations(length: u32) -> u64 {
    (READABLE_CHARS.len() as u64).pow(length)
}
