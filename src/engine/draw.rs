//! Letter draw sources
//!
//! The engine never owns randomness. Rounds ask a `DrawSource` for a pool,
//! and tests inject a fixed one.

use crate::core::{LetterPool, PoolError};
use rand::Rng;
use thiserror::Error;

/// Error type for tile bag definitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileBagError {
    #[error(transparent)]
    Letter(#[from] PoolError),

    #[error("tile bag must contain at least one tile")]
    Empty,
}

/// Weighted multiset of letters to draw from
///
/// A letter's weight is how many times it appears in the bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBag {
    tiles: Vec<char>,
}

impl TileBag {
    /// Create a bag from individual tiles
    ///
    /// # Errors
    /// Returns `TileBagError::Letter` for a non-letter tile and
    /// `TileBagError::Empty` if no tiles are given.
    pub fn new(tiles: impl IntoIterator<Item = char>) -> Result<Self, TileBagError> {
        let tiles = LetterPool::new(tiles)?.letters().to_vec();
        if tiles.is_empty() {
            return Err(TileBagError::Empty);
        }
        Ok(Self { tiles })
    }

    /// Create a bag from `(letter, count)` pairs
    ///
    /// # Errors
    /// Same as [`TileBag::new`].
    ///
    /// # Examples
    /// ```
    /// use scrabble_solver::engine::TileBag;
    ///
    /// let bag = TileBag::from_counts(&[('E', 3), ('Q', 1)]).unwrap();
    /// assert_eq!(bag.len(), 4);
    /// ```
    pub fn from_counts(counts: &[(char, usize)]) -> Result<Self, TileBagError> {
        Self::new(
            counts
                .iter()
                .flat_map(|&(letter, count)| std::iter::repeat_n(letter, count)),
        )
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: an empty bag cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw `n` letters uniformly with replacement
    ///
    /// Each slot is an independent pick, so a letter can appear more often than
    /// its weight in the bag.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> LetterPool {
        let letters = (0..n).map(|_| self.tiles[rng.random_range(0..self.tiles.len())]);
        LetterPool::from_letters(letters.collect())
    }
}

/// Something that can hand out a letter pool at the start of a round
pub trait DrawSource {
    /// Draw a pool of `n` letters
    fn draw(&mut self, n: usize) -> LetterPool;
}

/// Random draws from a tile bag
pub struct BagDraw<'a, R: Rng> {
    bag: &'a TileBag,
    rng: R,
}

impl<'a, R: Rng> BagDraw<'a, R> {
    pub const fn new(bag: &'a TileBag, rng: R) -> Self {
        Self { bag, rng }
    }
}

impl<R: Rng> DrawSource for BagDraw<'_, R> {
    fn draw(&mut self, n: usize) -> LetterPool {
        self.bag.draw(&mut self.rng, n)
    }
}

/// Always returns the same pool, ignoring the requested size
#[derive(Debug, Clone)]
pub struct FixedDraw {
    pool: LetterPool,
}

impl FixedDraw {
    #[must_use]
    pub const fn new(pool: LetterPool) -> Self {
        Self { pool }
    }
}

impl DrawSource for FixedDraw {
    fn draw(&mut self, _n: usize) -> LetterPool {
        self.pool.clone()
    }
}
