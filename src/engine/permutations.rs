//! Lazy permutation generation over a letter pool
//!
//! Arrangements are drawn from pool positions, not distinct letters, so a pool
//! with repeated letters yields repeated strings. Nothing is deduplicated here.

use crate::core::LetterPool;
use itertools::Itertools;

/// Every arrangement of exactly `len` letters from the pool
///
/// Order follows pool positions lexicographically: for `ABC` and `len = 2`
/// this is `AB, AC, BA, BC, CA, CB`. Yields nothing when `len` is 0 or exceeds
/// the pool size.
pub fn arrangements(pool: &LetterPool, len: usize) -> impl Iterator<Item = String> + '_ {
    (len > 0)
        .then(|| {
            pool.letters()
                .iter()
                .permutations(len)
                .map(|letters| letters.into_iter().collect::<String>())
        })
        .into_iter()
        .flatten()
}

/// Every arrangement of 1 to `pool.len()` letters, shortest first
///
/// The sequence is produced lazily and is a pure function of the pool: calling
/// it again yields the same sequence from the start.
///
/// # Examples
/// ```
/// use scrabble_solver::core::LetterPool;
/// use scrabble_solver::engine::permute;
///
/// let pool: LetterPool = "AB".parse().unwrap();
/// let all: Vec<String> = permute(&pool).collect();
/// assert_eq!(all, ["A", "B", "AB", "BA"]);
/// ```
pub fn permute(pool: &LetterPool) -> impl Iterator<Item = String> + '_ {
    (1..=pool.len()).flat_map(move |len| arrangements(pool, len))
}

/// Number of strings `permute` yields for a pool of `n` letters
///
/// Σ n!/(n-k)! for k in 1..=n. Saturates at `u64::MAX`.
#[must_use]
pub fn permutation_count(n: usize) -> u64 {
    let n = n as u64;
    let mut total: u64 = 0;
    let mut falling: u64 = 1;
    for k in 0..n {
        falling = falling.saturating_mul(n - k);
        total = total.saturating_add(falling);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(s: &str) -> LetterPool {
        s.parse().unwrap()
    }

    #[test]
    fn arrangements_positional_order() {
        let p = pool("ABC");
        let pairs: Vec<String> = arrangements(&p, 2).collect();
        assert_eq!(pairs, ["AB", "AC", "BA", "BC", "CA", "CB"]);
    }

    #[test]
    fn arrangements_out_of_range_lengths() {
        let p = pool("ABC");
        assert_eq!(arrangements(&p, 0).count(), 0);
        assert_eq!(arrangements(&p, 4).count(), 0);
    }

    #[test]
    fn permute_emits_every_length() {
        let p = pool("ABC");
        let all: Vec<String> = permute(&p).collect();
        assert_eq!(all.len(), 15);
        assert_eq!(&all[..3], ["A", "B", "C"]);
        for len in 1..=3 {
            assert!(all.iter().any(|w| w.len() == len));
        }
        assert!(all.iter().all(|w| w.len() <= 3));
    }

    #[test]
    fn permute_keeps_duplicates() {
        let p = pool("ZZ");
        let all: Vec<String> = permute(&p).collect();
        assert_eq!(all, ["Z", "Z", "ZZ", "ZZ"]);
    }

    #[test]
    fn permute_seven_letters_cardinality() {
        let p = pool("CATXXXX");
        assert_eq!(permute(&p).count(), 13_699);
        assert_eq!(permutation_count(7), 13_699);
    }

    #[test]
    fn permute_is_restartable() {
        let p = pool("ABCD");
        let first: Vec<String> = permute(&p).collect();
        let second: Vec<String> = permute(&p).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn permute_empty_pool() {
        let p = pool("");
        assert_eq!(permute(&p).count(), 0);
        assert_eq!(permutation_count(0), 0);
    }

    #[test]
    fn permutation_count_small_values() {
        assert_eq!(permutation_count(1), 1);
        assert_eq!(permutation_count(2), 4);
        assert_eq!(permutation_count(3), 15);
        assert_eq!(permutation_count(4), 64);
    }

    #[test]
    fn permutation_count_saturates() {
        assert_eq!(permutation_count(100), u64::MAX);
    }
}
