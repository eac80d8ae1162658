//! Bounded-array sorting drill: fill an array with random 0..=2 values, keep
//! a capped number of each value, then bubble-sort what is left.

use rand::Rng;

/// How many of each value `limit` keeps, indexed by value
pub const CAPS: [usize; 3] = [3, 5, 6];

/// `n` uniform draws from `0..=2`.
pub fn fill(n: usize, rng: &mut impl Rng) -> Vec<u8> {
    (0..n).map(|_| rng.gen_range(0..=2)).collect()
}

/// Keep values in their original order until each value's cap is reached.
/// Values without a cap are dropped.
pub fn limit(values: &[u8]) -> Vec<u8> {
    let mut kept = [0usize; CAPS.len()];
    let mut out = Vec::with_capacity(CAPS.iter().sum());

    for &value in values {
        let slot = value as usize;
        if slot < CAPS.len() && kept[slot] < CAPS[slot] {
            kept[slot] += 1;
            out.push(value);
        }
    }

    out
}

/// In-place ascending bubble sort.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    for pass in 0..items.len() - 1 {
        let mut swapped = false;
        for j in 0..items.len() - 1 - pass {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
