//! Dictionary membership
//!
//! Words are stored lowercase in a hash set so lookups stay O(1) while the
//! permutation pipeline probes thousands of candidates per round.

use rustc_hash::FxHashSet;

/// A fixed vocabulary of known words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, normalizing entries to lowercase
    ///
    /// Surrounding whitespace is trimmed and empty entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use scrabble_solver::core::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["Cat", " act ", ""]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("CAT"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
            })
            .collect();
        Self { words }
    }

    /// Case-insensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Check whether `word` is a known dictionary word
#[inline]
#[must_use]
pub fn known(word: &str, dictionary: &Dictionary) -> bool {
    dictionary.contains(word)
}
