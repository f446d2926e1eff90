//! Command implementations

pub mod best;
pub mod play;
pub mod rate;

pub use best::{BestConfig, BestResult, find_best};
pub use play::{PlayConfig, PlayStats, run_play};
pub use rate::{RoundError, RoundResult, rate_word};

use crate::core::{LetterPool, ScoredWord};
use crate::engine::{Engine, EngineError};

/// Run the optimal-word search, on rayon when `parallel` is set
fn search(engine: &Engine, letters: &LetterPool, parallel: bool) -> Result<ScoredWord, EngineError> {
    if parallel {
        engine.find_best_word_parallel(letters)
    } else {
        engine.find_best_word(letters)
    }
}
