//! Letter pool representation and the sub-multiset fit check
//!
//! A `LetterPool` is the rack of letters drawn for one round. It is logically a
//! multiset: order is kept for display and for permutation order, but never
//! affects whether a word fits.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters drawn per round
pub const NUM_LETTERS: usize = 7;

/// Error type for letters that cannot be placed in a pool
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("'{0}' is not an ASCII letter")]
    NonAlphabetic(char),
}

/// An immutable rack of uppercase ASCII letters, duplicates permitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Create a pool from letters, normalizing them to uppercase
    ///
    /// # Errors
    /// Returns `PoolError::NonAlphabetic` for the first character that is not
    /// an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use scrabble_solver::core::LetterPool;
    ///
    /// let pool = LetterPool::new("cat".chars()).unwrap();
    /// assert_eq!(pool.letters(), &['C', 'A', 'T']);
    ///
    /// assert!(LetterPool::new("c4t".chars()).is_err());
    /// ```
    pub fn new(letters: impl IntoIterator<Item = char>) -> Result<Self, PoolError> {
        let letters = letters
            .into_iter()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_uppercase())
                } else {
                    Err(PoolError::NonAlphabetic(c))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { letters })
    }

    /// Wrap letters already known to be uppercase ASCII
    pub(crate) const fn from_letters(letters: Vec<char>) -> Self {
        Self { letters }
    }

    /// The letters in draw order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// How many times each letter occurs in the pool
    #[must_use]
    pub fn counts(&self) -> FxHashMap<char, usize> {
        letter_counts(self.letters.iter().copied())
    }
}

/// Parses a rack such as `"CATXXXX"`, `"c a t"` or `"C, A, T"`
///
/// Whitespace and commas are separators; anything else must be a letter.
impl FromStr for LetterPool {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().filter(|c| !c.is_whitespace() && *c != ','))
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Count occurrences of each character
#[must_use]
pub fn letter_counts(chars: impl IntoIterator<Item = char>) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in chars {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Check that every letter of `word` is covered by the pool
///
/// Compares uppercase forms. Each letter may be used at most as many times as
/// it appears in the pool; a single letter over budget fails the whole word.
/// The empty word always fits.
///
/// # Examples
/// ```
/// use scrabble_solver::core::{LetterPool, fits};
///
/// let pool: LetterPool = "AABT".parse().unwrap();
/// assert!(fits(&pool, "bat"));
/// assert!(!fits(&pool, "abba")); // only one B
/// ```
#[must_use]
pub fn fits(pool: &LetterPool, word: &str) -> bool {
    let available = pool.counts();
    let needed = letter_counts(word.to_uppercase().chars());

    needed
        .iter()
        .all(|(letter, &count)| count <= available.get(letter).copied().unwrap_or(0))
}
