//! Letter values and word scoring

use rustc_hash::FxHashMap;
use std::fmt;

/// Mapping from letter to point value
///
/// Lookup is total: letters absent from the table are worth 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    values: FxHashMap<char, u32>,
}

impl ScoreTable {
    /// Build a table from `(letter, value)` pairs, keyed by uppercase letter
    ///
    /// Later pairs overwrite earlier ones for the same letter.
    pub fn new(values: impl IntoIterator<Item = (char, u32)>) -> Self {
        let values = values
            .into_iter()
            .map(|(letter, value)| (letter.to_ascii_uppercase(), value))
            .collect();
        Self { values }
    }

    /// Value of a single (uppercase) letter, 0 if unknown
    #[inline]
    #[must_use]
    pub fn value(&self, letter: char) -> u32 {
        self.values.get(&letter).copied().unwrap_or(0)
    }

    /// Number of letters with an explicit value
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Sum the letter values of a word
///
/// Case-insensitive. Never fails: unknown characters contribute 0, the
/// empty word scores 0 and the total saturates at `u32::MAX`.
///
/// # Examples
/// ```
/// use scrabble_solver::core::{ScoreTable, score};
///
/// let table = ScoreTable::new([('C', 3), ('A', 1), ('T', 1)]);
/// assert_eq!(score("cat", &table), 5);
/// assert_eq!(score("cab", &table), 4); // B is not in the table
/// assert_eq!(score("", &table), 0);
/// ```
#[must_use]
pub fn score(word: &str, table: &ScoreTable) -> u32 {
    word.to_uppercase()
        .chars()
        .map(|c| table.value(c))
        .fold(0, u32::saturating_add)
}

/// A dictionary word paired with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: impl Into<String>, table: &ScoreTable) -> Self {
        let word = word.into();
        let score = score(&word, table);
        Self { word, score }
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (value: {})", self.word, self.score)
    }
}
