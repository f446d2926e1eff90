//! Rate a word against a known letter pool
//!
//! One complete round without randomness: validate, score, search, compare.

use super::search;
use crate::core::{LetterPool, ScoredWord};
use crate::engine::{Engine, EngineError, InvalidWord, score_ratio};
use thiserror::Error;
use tracing::info;

/// Outcome of a completed round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub letters: LetterPool,
    pub player: ScoredWord,
    pub optimal: ScoredWord,
    /// Player score as a percentage of the optimal score
    pub ratio: f64,
}

/// Why a round could not be completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The player's word was rejected; the caller can prompt again
    #[error("Not a valid word combination! ({0})")]
    Invalid(#[from] InvalidWord),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Validate and score `word`, then compare it with the best word for `letters`
///
/// Surrounding whitespace in `word` is ignored.
///
/// # Errors
///
/// Returns `RoundError::Invalid` if the word does not fit the letters or is
/// unknown, and `RoundError::Engine` if no optimal word exists or it scores 0.
pub fn rate_word(
    engine: &Engine,
    letters: LetterPool,
    word: &str,
    parallel: bool,
) -> Result<RoundResult, RoundError> {
    let word = word.trim();
    engine.validate(&letters, word).into_result()?;

    let player = ScoredWord::new(word, engine.scores());
    let optimal = search(engine, &letters, parallel)?;
    let ratio = score_ratio(player.score, optimal.score)?;

    info!(
        letters = %letters,
        player = %player,
        optimal = %optimal,
        ratio,
        "round complete"
    );

    Ok(RoundResult {
        letters,
        player,
        optimal,
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, ScoreTable};

    fn setup() -> (Dictionary, ScoreTable) {
        (
            Dictionary::new(["cat", "act", "at", "a"]),
            ScoreTable::new([('C', 3), ('A', 1), ('T', 1)]),
        )
    }

    fn pool(s: &str) -> LetterPool {
        s.parse().unwrap()
    }

    #[test]
    fn optimal_word_rates_100() {
        let (dictionary, scores) = setup();
        let engine = Engine::new(&dictionary, &scores);

        let result = rate_word(&engine, pool("CATXXXX"), "cat", false).unwrap();
        assert_eq!(result.player.word, "cat");
        assert_eq!(result.player.score, 5);
        assert_eq!(result.optimal.word, "CAT");
        assert_eq!(result.optimal.score, 5);
        assert!((result.ratio - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weaker_word_rates_lower() {
        let (dictionary, scores) = setup();
        let engine = Engine::new(&dictionary, &scores);

        let result = rate_word(&engine, pool("CATXXXX"), "at", true).unwrap();
        assert_eq!(result.player.score, 2);
        assert!((result.ratio - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        let (dictionary, scores) = setup();
        let engine = Engine::new(&dictionary, &scores);

        let result = rate_word(&engine, pool("CATXXXX"), " cat \n", false).unwrap();
        assert_eq!(result.player.word, "cat");
        assert_eq!(result.player.score, 5);
    }

    #[test]
    fn invalid_word_rejected() {
        let (dictionary, scores) = setup();
        let engine = Engine::new(&dictionary, &scores);

        assert_eq!(
            rate_word(&engine, pool("AB"), "abc", false),
            Err(RoundError::Invalid(InvalidWord::InsufficientLetters))
        );
        assert_eq!(
            rate_word(&engine, pool("CATXXXX"), "tax", false),
            Err(RoundError::Invalid(InvalidWord::NotInDictionary))
        );
    }

    #[test]
    fn zero_value_optimal_word_is_division_error() {
        let dictionary = Dictionary::new(["xx"]);
        let scores = ScoreTable::default();
        let engine = Engine::new(&dictionary, &scores);

        assert_eq!(
            rate_word(&engine, pool("XX"), "xx", false),
            Err(RoundError::Engine(EngineError::DivisionUndefined))
        );
    }
}
