//! Streaming dictionary filter over generated candidates

use crate::core::{Dictionary, known};

/// Keep only candidates the dictionary knows, preserving input order
///
/// # Examples
/// ```
/// use scrabble_solver::core::Dictionary;
/// use scrabble_solver::engine::filter_known;
///
/// let dictionary = Dictionary::new(["at", "a"]);
/// let candidates = ["A", "T", "AT", "TA"].map(String::from);
/// let words: Vec<String> = filter_known(candidates, &dictionary).collect();
/// assert_eq!(words, ["A", "AT"]);
/// ```
pub fn filter_known<'d, I>(candidates: I, dictionary: &'d Dictionary) -> impl Iterator<Item = String> + 'd
where
    I: IntoIterator<Item = String>,
    I::IntoIter: 'd,
{
    candidates
        .into_iter()
        .filter(move |word| known(word, dictionary))
}
