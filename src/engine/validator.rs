//! Word validation against a letter pool and a dictionary

use crate::core::{Dictionary, LetterPool, fits, known};
use thiserror::Error;
use tracing::warn;

/// Why a player's word was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidWord {
    #[error("the word uses letters that were not drawn")]
    InsufficientLetters,

    #[error("the word is not in the dictionary")]
    NotInDictionary,
}

/// Result of validating a player's word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(InvalidWord),
}

impl ValidationOutcome {
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Convert into a `Result` for callers that prefer `?`
    ///
    /// # Errors
    /// Returns the rejection reason for `Invalid`.
    pub const fn into_result(self) -> Result<(), InvalidWord> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(reason) => Err(reason),
        }
    }
}

/// Validate a word: it must be formable from the pool and known to the dictionary
///
/// Letter availability is checked first, so a word that fails both checks is
/// reported as `InsufficientLetters`.
///
/// # Examples
/// ```
/// use scrabble_solver::core::{Dictionary, LetterPool};
/// use scrabble_solver::engine::{InvalidWord, ValidationOutcome, validate};
///
/// let pool: LetterPool = "CATXXXX".parse().unwrap();
/// let dictionary = Dictionary::new(["cat", "act"]);
///
/// assert_eq!(validate(&pool, "cat", &dictionary), ValidationOutcome::Valid);
/// assert_eq!(
///     validate(&pool, "tax", &dictionary),
///     ValidationOutcome::Invalid(InvalidWord::NotInDictionary)
/// );
/// assert_eq!(
///     validate(&pool, "dog", &dictionary),
///     ValidationOutcome::Invalid(InvalidWord::InsufficientLetters)
/// );
/// ```
#[must_use]
pub fn validate(pool: &LetterPool, word: &str, dictionary: &Dictionary) -> ValidationOutcome {
    let outcome = if !fits(pool, word) {
        ValidationOutcome::Invalid(InvalidWord::InsufficientLetters)
    } else if !known(word, dictionary) {
        ValidationOutcome::Invalid(InvalidWord::NotInDictionary)
    } else {
        ValidationOutcome::Valid
    };

    if let ValidationOutcome::Invalid(reason) = outcome {
        warn!(word, letters = %pool, %reason, "rejected word");
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (LetterPool, Dictionary) {
        (
            "CATXXXX".parse().unwrap(),
            Dictionary::new(["cat", "act", "at", "a", "dog"]),
        )
    }

    #[test]
    fn valid_word_accepted() {
        let (pool, dictionary) = setup();
        assert_eq!(validate(&pool, "cat", &dictionary), ValidationOutcome::Valid);
        assert_eq!(validate(&pool, "ACT", &dictionary), ValidationOutcome::Valid);
        assert!(validate(&pool, "a", &dictionary).is_valid());
    }

    #[test]
    fn missing_letters_rejected() {
        let (pool, dictionary) = setup();
        assert_eq!(
            validate(&pool, "dog", &dictionary),
            ValidationOutcome::Invalid(InvalidWord::InsufficientLetters)
        );
    }

    #[test]
    fn letters_checked_before_dictionary() {
        // Neither formable nor known: the letter check wins
        let pool: LetterPool = "AB".parse().unwrap();
        let dictionary = Dictionary::new(["cat"]);
        assert_eq!(
            validate(&pool, "ABC", &dictionary),
            ValidationOutcome::Invalid(InvalidWord::InsufficientLetters)
        );
    }

    #[test]
    fn unknown_word_rejected() {
        let (pool, dictionary) = setup();
        assert_eq!(
            validate(&pool, "tax", &dictionary),
            ValidationOutcome::Invalid(InvalidWord::NotInDictionary)
        );
    }

    #[test]
    fn empty_word_not_in_dictionary() {
        let (pool, dictionary) = setup();
        assert_eq!(
            validate(&pool, "", &dictionary),
            ValidationOutcome::Invalid(InvalidWord::NotInDictionary)
        );
    }

    #[test]
    fn into_result_carries_reason() {
        assert_eq!(ValidationOutcome::Valid.into_result(), Ok(()));
        assert_eq!(
            ValidationOutcome::Invalid(InvalidWord::NotInDictionary).into_result(),
            Err(InvalidWord::NotInDictionary)
        );
    }
}
