//! Core domain types for the letter-draw word game
//!
//! This module contains the fundamental domain types and the pure predicates
//! built on them. Nothing here owns randomness or performs I/O; every type is
//! read-only once constructed.

mod dictionary;
mod pool;
mod score;

pub use dictionary::{Dictionary, known};
pub use pool::{LetterPool, NUM_LETTERS, PoolError, fits, letter_counts};
pub use score::{ScoreTable, ScoredWord, score};
