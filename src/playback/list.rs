// Random list generation and reshuffling for the working array

use rand::seq::SliceRandom;
use rand::Rng;

/// Fisher-Yates shuffle in place; the multiset of values is unchanged
pub fn reshuffle<R: Rng + ?Sized>(values: &mut [i64], rng: &mut R) {
    values.shuffle(rng);
}

/// A fresh list of `len` values drawn uniformly from `0..max_value`
pub fn random_list<R: Rng + ?Sized>(len: usize, max_value: i64, rng: &mut R) -> Vec<i64> {
    let max_value = max_value.max(1);
    (0..len).map(|_| rng.random_range(0..max_value)).collect()
}
