//! Optimal word search command

use super::search;
use crate::core::{LetterPool, ScoredWord};
use crate::engine::{Engine, EngineError, permutation_count};

/// Configuration for an optimal-word search
#[derive(Debug, Clone, Copy, Default)]
pub struct BestConfig {
    /// Search each word length on its own rayon task
    pub parallel: bool,
    /// Also collect every distinct valid word
    pub list_all: bool,
}

/// Result of an optimal-word search
pub struct BestResult {
    pub letters: LetterPool,
    pub best: ScoredWord,
    /// Every distinct valid word, best first (empty unless requested)
    pub words: Vec<ScoredWord>,
    /// How many arrangements the search generated
    pub candidates: u64,
}

/// Find the best word for `letters`
///
/// # Errors
///
/// Returns `EngineError::EmptyCandidateSet` if no dictionary word can be formed.
pub fn find_best(
    engine: &Engine,
    letters: LetterPool,
    config: BestConfig,
) -> Result<BestResult, EngineError> {
    let best = search(engine, &letters, config.parallel)?;
    let words = if config.list_all {
        engine.valid_words(&letters)
    } else {
        Vec::new()
    };

    Ok(BestResult {
        candidates: permutation_count(letters.len()),
        letters,
        best,
        words,
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

    #[test]
    fn finds_best_word() {
        let (dictionary, scores) = setup();
        let engine = Engine::new(&dictionary, &scores);

        let result = find_best(&engine, "CATXXXX".parse().unwrap(), BestConfig::default()).unwrap();
        assert_eq!(result.best.word, "CAT");
        assert_eq!(result.best.score, 5);
        assert_eq!(result.candidates, 13_699);
        assert!(result.words.is_empty());
    }

    #[test]
    fn lists_all_words_when_requested() {
        let (dictionary, scores) = setup();
        let engine = Engine::new(&dictionary, &scores);
        let config = BestConfig {
            parallel: true,
            list_all: true,
        };

        let result = find_best(&engine, "CATXXXX".parse().unwrap(), config).unwrap();
        let names: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, ["CAT", "ACT", "AT", "A"]);
    }

    #[test]
    fn no_words_is_an_error() {
        let (dictionary, scores) = setup();
        let engine = Engine::new(&dictionary, &scores);

        let result = find_best(&engine, "ZZ".parse().unwrap(), BestConfig::default());
        assert!(matches!(result, Err(EngineError::EmptyCandidateSet)));
    }
}
