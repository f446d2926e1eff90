//! Scrabble Solver
//!
//! A letter-draw word game engine: checks whether a word can be formed from a
//! drawn rack and is a real word, scores it, and finds the best-scoring word
//! the same rack allows.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabble_solver::core::LetterPool;
//! use scrabble_solver::engine::score_ratio;
//! use scrabble_solver::wordlists::standard_game_data;
//!
//! let data = standard_game_data().unwrap();
//! let engine = data.engine();
//!
//! let letters: LetterPool = "CATERSX".parse().unwrap();
//! assert!(engine.validate(&letters, "cat").is_valid());
//!
//! let best = engine.find_best_word(&letters).unwrap();
//! let ratio = score_ratio(engine.score("cat"), best.score).unwrap();
//! println!("Best: {best}, you scored {ratio}");
//! ```

// Core domain types
pub mod core;

// Validation and search algorithms
pub mod engine;

// Embedded game data
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
