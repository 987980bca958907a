//! Short code generation and custom alias validation.
//!
//! Two candidate strategies: fully random draws from the readable alphabet,
//! and a consonant/vowel alternation that yields pronounceable codes such as
//! `ka9m` or `pu3n`. [`generate_unique_code`] drives either strategy against
//! an injected availability check, escalating the candidate length as
//! attempts accumulate so the namespace keeps comfortably ahead of the
//! corpus.
//!
//! Uniform pseudo-randomness is sufficient here: code generation is a
//! namespace-collision concern, not a security primitive.

use std::future::Future;

use chrono::Utc;
use serde_json::json;

use crate::error::AppError;
use crate::utils::alphabet::{draw, CONSONANTS, READABLE_CHARS, VOWELS};
use crate::utils::reserved::is_reserved_word;

/// Initial candidate length; 31^4 combinations for a ~200k corpus.
const STARTING_LENGTH: usize = 4;

/// Total attempt budget before the timestamp fallback takes over.
const MAX_ATTEMPTS: u32 = 100;

/// Candidate length grows by one after this many failed attempts.
const ATTEMPTS_PER_LENGTH: u32 = 20;

/// Marker prepended to fallback codes so they are recognizable in the wild.
const FALLBACK_PREFIX: char = 'q';

/// Random readable characters appended to the fallback code to cover two
/// callers exhausting their budgets within the same millisecond.
const FALLBACK_SUFFIX_LEN: usize = 2;

/// Generates a fully random code of `length` readable characters.
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length).map(|_| draw(READABLE_CHARS, &mut rng)).collect()
}

/// Generates a pronounceable code alternating consonants and vowels,
/// starting with a consonant.
pub fn generate_memorable_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|i| {
            if i % 2 == 0 {
                draw(CONSONANTS, &mut rng)
            } else {
                draw(VOWELS, &mut rng)
            }
        })
        .collect()
}

/// Generates a code that the injected availability check accepts.
///
/// Starts at length 4 and retries up to 100 times, bumping the length every
/// 20 attempts. When `prefer_memorable` is set the first half of the budget
/// uses the consonant/vowel pattern; the rest falls back to random draws.
/// Reserved words are never offered to the check and count as failed
/// attempts.
///
/// This function cannot exhaust: when the budget runs out it returns a
/// timestamp-derived fallback code that is unique by construction.
///
/// # Errors
///
/// Propagates any error from `is_available` unchanged. A failing store must
/// not be mistaken for either "taken" or "free".
pub async fn generate_unique_code<F, Fut>(
    is_available: F,
    prefer_memorable: bool,
) -> Result<String, AppError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<bool, AppError>>,
{
    let mut length = STARTING_LENGTH;
    let mut attempts: u32 = 0;

    while attempts < MAX_ATTEMPTS {
        let candidate = if prefer_memorable && attempts < MAX_ATTEMPTS / 2 {
            generate_memorable_code(length)
        } else {
            generate_random_code(length)
        };

        if !is_reserved_word(&candidate) && is_available(candidate.clone()).await? {
            return Ok(candidate);
        }

        attempts += 1;
        if attempts % ATTEMPTS_PER_LENGTH == 0 {
            length += 1;
            tracing::debug!(attempts, length, "increasing short code candidate length");
        }
    }

    metrics::counter!("shortcode_fallbacks").increment(1);
    tracing::warn!(attempts, "code generation exhausted attempts, using timestamp fallback");
    Ok(fallback_code())
}

/// Validates a user-supplied custom alias.
///
/// Rules: 3-50 characters, ASCII alphanumerics and hyphens only, no leading,
/// trailing, or consecutive hyphens, and not a reserved word. Aliases are
/// compared case-insensitively for lookup, so callers lowercase before
/// storage.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the violated rule.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.len() < 3 {
        return Err(AppError::bad_request(
            "Alias must be at least 3 characters long",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if alias.len() > 50 {
        return Err(AppError::bad_request(
            "Alias must be less than 50 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(AppError::bad_request(
            "Alias can only contain letters, numbers, and hyphens",
            json!({ "alias": alias }),
        ));
    }

    if alias.contains("--") {
        return Err(AppError::bad_request(
            "Alias cannot contain consecutive hyphens",
            json!({ "alias": alias }),
        ));
    }

    if alias.starts_with('-') || alias.ends_with('-') {
        return Err(AppError::bad_request(
            "Alias cannot start or end with a hyphen",
            json!({ "alias": alias }),
        ));
    }

    if is_reserved_word(alias) {
        return Err(AppError::bad_request(
            "This alias is reserved and cannot be used",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

fn fallback_code() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut rng = rand::rng();

    let mut code = String::with_capacity(12);
    code.push(FALLBACK_PREFIX);
    code.push_str(&encode_base36(millis));
    for _ in 0..FALLBACK_SUFFIX_LEN {
        code.push(draw(READABLE_CHARS, &mut rng));
    }
    code
}

/// Compact base-36 encoding (`0-9a-z`) of a millisecond timestamp.
fn encode_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = String::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    #[test]
    fn test_random_code_has_requested_length() {
        for n in 1..=10 {
            assert_eq!(generate_random_code(n).len(), n);
        }
    }

    #[test]
    fn test_random_code_uses_only_readable_chars() {
        for _ in 0..100 {
            let code = generate_random_code(8);
            assert!(code.chars().all(|c| READABLE_CHARS.contains(c)), "{code}");
        }
    }

    #[test]
    fn test_memorable_code_alternates_consonant_vowel() {
        for n in 1..=9 {
            let code = generate_memorable_code(n);
            assert_eq!(code.len(), n);
            for (i, c) in code.chars().enumerate() {
                if i % 2 == 0 {
                    assert!(CONSONANTS.contains(c), "index {i} of {code} not a consonant");
                } else {
                    assert!(VOWELS.contains(c), "index {i} of {code} not a vowel");
                }
            }
        }
    }

    #[test]
    fn test_encode_base36() {
        assert_eq!(encode_base36(0), "0");
        assert_eq!(encode_base36(35), "z");
        assert_eq!(encode_base36(36), "10");
        assert_eq!(encode_base36(1_700_000_000_000), "lpg9cfqo");
    }

    #[tokio::test]
    async fn test_unique_code_short_circuits_on_first_available() {
        let calls = AtomicU32::new(0);

        let code = generate_unique_code(
            |_candidate| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(true) }
            },
            true,
        )
        .await
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(code.len(), 4);
    }

    #[tokio::test]
    async fn test_unique_code_escalates_length_every_20_attempts() {
        // Reject everything until attempt 25; the accepted candidate must
        // already be one character longer.
        let calls = AtomicU32::new(0);

        let code = generate_unique_code(
            |_candidate| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move { Ok(n >= 25) }
            },
            true,
        )
        .await
        .unwrap();

        assert_eq!(code.len(), 5);
    }

    #[tokio::test]
    async fn test_unique_code_falls_back_when_exhausted() {
        let first = generate_unique_code(|_c| async { Ok(false) }, true)
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let second = generate_unique_code(|_c| async { Ok(false) }, false)
            .await
            .unwrap();

        assert!(first.starts_with('q'));
        assert!(second.starts_with('q'));
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_unique_code_propagates_predicate_errors() {
        let result = generate_unique_code(
            |_c| async {
                Err::<bool, _>(AppError::internal("store unreachable", json!({})))
            },
            false,
        )
        .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[test]
    fn test_validate_alias_accepts_reasonable_aliases() {
        assert!(validate_custom_alias("my-link").is_ok());
        assert!(validate_custom_alias("promo2025").is_ok());
        assert!(validate_custom_alias("ABC").is_ok());
    }

    #[test]
    fn test_validate_alias_rejects_bad_lengths() {
        assert!(validate_custom_alias("ab").is_err());
        assert!(validate_custom_alias(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_alias_rejects_bad_characters() {
        assert!(validate_custom_alias("my link").is_err());
        assert!(validate_custom_alias("my_link").is_err());
        assert!(validate_custom_alias("caf\u{e9}").is_err());
    }

    #[test]
    fn test_validate_alias_rejects_hyphen_abuse() {
        assert!(validate_custom_alias("-lead").is_err());
        assert!(validate_custom_alias("trail-").is_err());
        assert!(validate_custom_alias("two--hyphens").is_err());
    }

    #[test]
    fn test_validate_alias_rejects_reserved_words() {
        assert!(validate_custom_alias("admin").is_err());
        assert!(validate_custom_alias("STATS").is_err());
    }
}
