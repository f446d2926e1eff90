//! Word search and validation engine
//!
//! Pipeline: `permute` → `filter_known` → `best_of`, plus the `validate` path
//! for the player's own word. `Engine` bundles the dictionary and score table
//! so callers pass them once.

mod candidates;
mod draw;
mod error;
mod game;
mod permutations;
mod selector;
mod validator;

pub use candidates::filter_known;
pub use draw::{BagDraw, DrawSource, FixedDraw, TileBag, TileBagError};
pub use error::EngineError;
pub use game::{Engine, GameData, score_ratio};
pub use permutations::{arrangements, permutation_count, permute};
pub use selector::best_of;
pub use validator::{InvalidWord, ValidationOutcome, validate};
