//! Best-word selection
//!
//! Ties on score resolve to the first maximum in iteration order, which makes
//! the result deterministic for a fixed generator order.

use super::EngineError;
use crate::core::{ScoreTable, ScoredWord};

/// Select the highest-scoring word from a sequence
///
/// # Errors
/// Returns `EngineError::EmptyCandidateSet` if the sequence is empty.
///
/// # Examples
/// ```
/// use scrabble_solver::core::ScoreTable;
/// use scrabble_solver::engine::best_of;
///
/// let table = ScoreTable::new([('C', 3), ('A', 1), ('T', 1)]);
/// let words = ["at", "cat", "act"].map(String::from);
///
/// let best = best_of(words, &table).unwrap();
/// assert_eq!(best.word, "cat"); // "act" ties at 5 but comes later
/// assert_eq!(best.score, 5);
/// ```
pub fn best_of<I>(words: I, table: &ScoreTable) -> Result<ScoredWord, EngineError>
where
    I: IntoIterator<Item = String>,
{
    first_max(
        words
            .into_iter()
            .map(|word| ScoredWord::new(word, table)),
    )
    .ok_or(EngineError::EmptyCandidateSet)
}

/// Fold scored words keeping the first strictly-greatest entry
///
/// `Iterator::max_by_key` keeps the last maximum, so the fold is explicit.
pub(crate) fn first_max<I>(scored: I) -> Option<ScoredWord>
where
    I: IntoIterator<Item = ScoredWord>,
{
    scored.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.score >= candidate.score => Some(current),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ScoreTable {
        ScoreTable::new([('C', 3), ('A', 1), ('T', 1), ('Z', 10)])
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn selects_highest_score() {
        let best = best_of(words(&["a", "at", "cat", "z"]), &table()).unwrap();
        assert_eq!(best.word, "z");
        assert_eq!(best.score, 10);
    }

    #[test]
    fn tie_resolves_to_first_encountered() {
        let best = best_of(words(&["act", "cat"]), &table()).unwrap();
        assert_eq!(best.word, "act");

        let best = best_of(words(&["cat", "act"]), &table()).unwrap();
        assert_eq!(best.word, "cat");
    }

    #[test]
    fn tie_with_later_lower_scores() {
        let best = best_of(words(&["at", "ta", "a"]), &table()).unwrap();
        assert_eq!(best.word, "at");
        assert_eq!(best.score, 2);
    }

    #[test]
    fn all_zero_scores_pick_first() {
        let best = best_of(words(&["xy", "yx"]), &table()).unwrap();
        assert_eq!(best.word, "xy");
        assert_eq!(best.score, 0);
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(
            best_of(Vec::<String>::new(), &table()),
            Err(EngineError::EmptyCandidateSet)
        );
    }
}
