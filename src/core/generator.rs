//! Random password generation with character-class coverage.

use crate::constants;
use anyhow::{bail, Result};
use rand::{rngs::OsRng, Rng};

/// Characters eligible for generated passwords: ASCII letters, digits,
/// and the fixed symbol set. All single-byte, so byte indexing is safe.
const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Generate a random password of exactly `length` characters.
///
/// Every character is drawn from the OS random source. Whole candidates
/// are resampled until one covers all four character classes; the cap
/// keeps the loop total without changing the practical behavior.
pub fn generate_password(length: usize) -> Result<String> {
    if length < constants::MIN_PASSWORD_LENGTH {
        bail!(
            "password length {} cannot cover all required character classes (minimum {})",
            length,
            constants::MIN_PASSWORD_LENGTH
        );
    }

    for _ in 0..constants::MAX_GENERATE_ATTEMPTS {
        let candidate: String = (0..length)
            .map(|_| ALPHABET[OsRng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        if meets_complexity(&candidate) {
            return Ok(candidate);
        }
    }

    bail!(
        "no policy-compliant password after {} attempts",
        constants::MAX_GENERATE_ATTEMPTS
    )
}

/// Whether a value contains at least one uppercase letter, one lowercase
/// letter, one digit, and one symbol from the fixed set.
pub fn meets_complexity(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| constants::PASSWORD_SYMBOLS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_length_matches_request() {
        for length in [4, 8, 16, 48] {
            let password = generate_password(length).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_every_generation_covers_all_classes() {
        for _ in 0..50 {
            let password = generate_password(8).unwrap();
            assert!(meets_complexity(&password), "non-compliant: {}", password);
        }
    }

    #[test]
    fn test_generated_chars_stay_in_alphabet() {
        let password = generate_password(constants::DEFAULT_PASSWORD_LENGTH).unwrap();
        for c in password.chars() {
            assert!(ALPHABET.contains(&(c as u8)), "unexpected char: {}", c);
        }
    }

    #[test]
    fn test_too_short_length_rejected() {
        for length in 0..constants::MIN_PASSWORD_LENGTH {
            assert!(generate_password(length).is_err());
        }
    }

    #[test]
    fn test_meets_complexity() {
        assert!(meets_complexity("Aa1!"));
        assert!(meets_complexity("xK4#pq9Z"));
        assert!(!meets_complexity(""));
        assert!(!meets_complexity("alllowercase1!"));
        assert!(!meets_complexity("ALLUPPERCASE1!"));
        assert!(!meets_complexity("NoDigitsHere!"));
        assert!(!meets_complexity("NoSymbols123"));
    }
}
