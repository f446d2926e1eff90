//! Engine failure types

use thiserror::Error;

/// Hard failures of the search and rating operations
///
/// These are not expected in normal play. Either one points at a data problem
/// (a dictionary that cannot cover the pool, a score table full of zeros) and
/// is propagated rather than coerced to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no dictionary word can be formed from the letter pool")]
    EmptyCandidateSet,

    #[error("score ratio is undefined when the best score is 0")]
    DivisionUndefined,
}
