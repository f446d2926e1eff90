//! Embedded game data
//!
//! The default dictionary, letter values and tile pouch, compiled into the
//! binary so a round never touches the filesystem.

mod embedded;
mod tiles;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use tiles::{LETTER_SCORES, POUCH};

use crate::core::{Dictionary, ScoreTable};
use crate::engine::{GameData, TileBag, TileBagError};

/// Dictionary built from the embedded word list
#[must_use]
pub fn standard_dictionary() -> Dictionary {
    Dictionary::new(DICTIONARY)
}

/// Standard letter values
#[must_use]
pub fn standard_scores() -> ScoreTable {
    ScoreTable::new(LETTER_SCORES.iter().copied())
}

/// Standard tile pouch
///
/// # Errors
/// Returns an error only if the embedded pouch table is malformed.
pub fn standard_pouch() -> Result<TileBag, TileBagError> {
    TileBag::from_counts(POUCH)
}

/// Everything a standard game needs
///
/// # Errors
/// Returns an error only if the embedded pouch table is malformed.
///
/// # Examples
/// ```
/// use scrabble_solver::wordlists::standard_game_data;
///
/// let data = standard_game_data().unwrap();
/// assert!(data.dictionary.contains("cat"));
/// assert_eq!(data.pouch.len(), 98);
/// ```
pub fn standard_game_data() -> Result<GameData, TileBagError> {
    Ok(GameData::new(
        standard_dictionary(),
        standard_scores(),
        standard_pouch()?,
    ))
}
