//! Main engine interface

use super::candidates::filter_known;
use super::draw::TileBag;
use super::error::EngineError;
use super::permutations::{arrangements, permute};
use super::selector::{best_of, first_max};
use super::validator::{ValidationOutcome, validate};
use crate::core::{Dictionary, LetterPool, ScoreTable, ScoredWord, score};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Static game data loaded once at startup
///
/// Replaces global lookup tables: everything a round needs is passed in
/// explicitly through this bundle.
#[derive(Debug, Clone)]
pub struct GameData {
    pub dictionary: Dictionary,
    pub scores: ScoreTable,
    pub pouch: TileBag,
}

impl GameData {
    #[must_use]
    pub const fn new(dictionary: Dictionary, scores: ScoreTable, pouch: TileBag) -> Self {
        Self {
            dictionary,
            scores,
            pouch,
        }
    }

    /// Engine borrowing this bundle's dictionary and score table
    #[must_use]
    pub const fn engine(&self) -> Engine<'_> {
        Engine::new(&self.dictionary, &self.scores)
    }
}

/// Validation, scoring and optimal-word search over one dictionary and score table
///
/// Holds only shared references; every method is a pure computation over the
/// pool it is given.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    dictionary: &'a Dictionary,
    scores: &'a ScoreTable,
}

impl<'a> Engine<'a> {
    /// Create an engine over the given dictionary and score table
    ///
    /// # Examples
    /// ```
    /// use scrabble_solver::core::{Dictionary, LetterPool, ScoreTable};
    /// use scrabble_solver::engine::Engine;
    ///
    /// let dictionary = Dictionary::new(["cat", "act", "at", "a"]);
    /// let scores = ScoreTable::new([('C', 3), ('A', 1), ('T', 1)]);
    /// let engine = Engine::new(&dictionary, &scores);
    ///
    /// let pool: LetterPool = "CATXXXX".parse().unwrap();
    /// assert!(engine.validate(&pool, "cat").is_valid());
    /// assert_eq!(engine.find_best_word(&pool).unwrap().word, "CAT");
    /// ```
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, scores: &'a ScoreTable) -> Self {
        Self { dictionary, scores }
    }

    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &'a ScoreTable {
        self.scores
    }

    /// Validate a player's word against the pool and dictionary
    #[must_use]
    pub fn validate(&self, pool: &LetterPool, word: &str) -> ValidationOutcome {
        validate(pool, word, self.dictionary)
    }

    /// Score a word with this engine's table
    #[inline]
    #[must_use]
    pub fn score(&self, word: &str) -> u32 {
        score(word, self.scores)
    }

    /// Dictionary words formable from the pool, in generator order
    ///
    /// Lazy; repeated letters in the pool can yield the same word more than once.
    pub fn candidates<'p>(&self, pool: &'p LetterPool) -> impl Iterator<Item = String> + 'p
    where
        'a: 'p,
    {
        filter_known(permute(pool), self.dictionary)
    }

    /// Find the highest-scoring dictionary word formable from the pool
    ///
    /// Ties go to the word the generator emits first: shorter lengths first,
    /// then pool-position order.
    ///
    /// # Errors
    /// Returns `EngineError::EmptyCandidateSet` if no arrangement of the pool is
    /// a dictionary word.
    pub fn find_best_word(&self, pool: &LetterPool) -> Result<ScoredWord, EngineError> {
        let mut generated = 0usize;
        let mut kept = 0usize;

        let candidates = permute(pool).inspect(|_| generated += 1);
        let words = filter_known(candidates, self.dictionary).inspect(|_| kept += 1);
        let best = best_of(words, self.scores);

        debug!(letters = %pool, generated, kept, "searched permutations");
        best
    }

    /// Same result as [`Engine::find_best_word`], searching each word length on
    /// its own rayon task
    ///
    /// Buckets are merged in ascending length order so the tie-break matches
    /// the sequential search.
    ///
    /// # Errors
    /// Returns `EngineError::EmptyCandidateSet` if no arrangement of the pool is
    /// a dictionary word.
    pub fn find_best_word_parallel(&self, pool: &LetterPool) -> Result<ScoredWord, EngineError> {
        let buckets: Vec<Option<ScoredWord>> = (1..=pool.len())
            .into_par_iter()
            .map(|len| best_of(filter_known(arrangements(pool, len), self.dictionary), self.scores).ok())
            .collect();

        debug!(letters = %pool, buckets = buckets.len(), "merged parallel search");
        first_max(buckets.into_iter().flatten()).ok_or(EngineError::EmptyCandidateSet)
    }

    /// Every distinct dictionary word formable from the pool
    ///
    /// Sorted by score, highest first; equal scores keep generator order.
    #[must_use]
    pub fn valid_words(&self, pool: &LetterPool) -> Vec<ScoredWord> {
        let mut seen = FxHashSet::default();
        let mut words: Vec<ScoredWord> = self
            .candidates(pool)
            .filter(|word| seen.insert(word.clone()))
            .map(|word| ScoredWord::new(word, self.scores))
            .collect();

        words.sort_by(|a, b| b.score.cmp(&a.score));
        words
    }
}

/// Player score as a percentage of the best score, rounded to one decimal
///
/// # Errors
/// Returns `EngineError::DivisionUndefined` when `best_score` is 0.
///
/// # Examples
/// ```
/// use scrabble_solver::engine::{EngineError, score_ratio};
///
/// assert_eq!(score_ratio(5, 5), Ok(100.0));
/// assert_eq!(score_ratio(2, 3), Ok(66.7));
/// assert_eq!(score_ratio(5, 0), Err(EngineError::DivisionUndefined));
/// ```
pub fn score_ratio(player_score: u32, best_score: u32) -> Result<f64, EngineError> {
    if best_score == 0 {
        return Err(EngineError::DivisionUndefined);
    }

    let percent = f64::from(player_score) / f64::from(best_score) * 100.0;
    Ok(round_tenths(percent))
}

/// Round to one decimal place, ties to even on the exact binary value
///
/// `{:.1}` rounds the exact value of `value`, not an inexact `value * 10.0`.
fn round_tenths(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
