//! Top-k Kendall distance between two rankings.
//!
//! Implements the K^(p) distance of Fagin, Kumar and Sivakumar, "Comparing
//! top k lists" (SIAM J. Discrete Math. 2003). Every pair of items drawn from
//! the union of both rankings is scored, not only pairs of shared items:
//!
//! - both items in both rankings: 1 if their order differs
//! - both in one ranking, only one of them in the other: 1 if the ranking
//!   holding both puts the missing one ahead (the other ranking implies the
//!   present item comes first)
//! - each item in a different ranking only: 1
//! - both items in the same ranking only: `penalty`
//!
//! The distance is normalized by its value for two disjoint rankings of the
//! same lengths, which is the largest it can get.

use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

/// Normalized K^(p) distance of two rankings, in `[0, 1]`.
///
/// `penalty` is the `p` parameter in `[0, 1]`. Repeated items count once, at
/// their first position. The result is symmetric in its arguments. Two empty
/// rankings are at distance 0.0; an empty and a non-empty ranking at 1.0.
pub fn top_k_kendall_distance<T: Eq + Hash>(left: &[T], right: &[T], penalty: f64) -> f64 {
    let left = dedup_first(left);
    let right = dedup_first(right);
    let k1 = left.len();
    let k2 = right.len();

    if k1 == 0 && k2 == 0 {
        return 0.0;
    }
    if k1 == 0 || k2 == 0 {
        return 1.0;
    }

    let right_positions: AHashMap<&T, usize> =
        right.iter().enumerate().map(|(i, item)| (*item, i)).collect();
    let left_members: AHashSet<&T> = left.iter().copied().collect();

    // Positions in `right` of the shared items, in `left` order.
    let mut shared_positions = Vec::new();
    let mut left_only = 0usize;
    let mut left_only_ahead = 0usize;
    for item in &left {
        match right_positions.get(item) {
            Some(&position) => {
                shared_positions.push(position);
                left_only_ahead += left_only;
            }
            None => left_only += 1,
        }
    }

    let mut right_only = 0usize;
    let mut right_only_ahead = 0usize;
    for item in &right {
        if left_members.contains(item) {
            right_only_ahead += right_only;
        } else {
            right_only += 1;
        }
    }

    let discordant = count_inversions(&mut shared_positions);
    let distance = (discordant + left_only_ahead + right_only_ahead + left_only * right_only)
        as f64
        + penalty * (pairs(left_only) + pairs(right_only));
    let max_distance = (k1 * k2) as f64 + penalty * (pairs(k1) + pairs(k2));

    (distance / max_distance).clamp(0.0, 1.0)
}

/// `1 - top_k_kendall_distance`: 1.0 for identical rankings, 0.0 for
/// disjoint ones.
pub fn top_k_kendall_similarity<T: Eq + Hash>(left: &[T], right: &[T], penalty: f64) -> f64 {
    1.0 - top_k_kendall_distance(left, right, penalty)
}

fn pairs(n: usize) -> f64 {
    (n * n.saturating_sub(1) / 2) as f64
}

fn dedup_first<T: Eq + Hash>(items: &[T]) -> Vec<&T> {
    let mut seen = AHashSet::with_capacity(items.len());
    items.iter().filter(|item| seen.insert(*item)).collect()
}

/// Number of pairs `i < j` with `values[i] > values[j]`; sorts `values`.
fn count_inversions(values: &mut [usize]) -> usize {
    let n = values.len();
    if n < 2 {
        return 0;
    }

    let mid = n / 2;
    let mut count = count_inversions(&mut values[..mid]) + count_inversions(&mut values[mid..]);

    let mut merged = Vec::with_capacity(n);
    let (mut i, mut j) = (0, mid);
    while i < mid && j < n {
        if values[i] <= values[j] {
            merged.push(values[i]);
            i += 1;
        } else {
            merged.push(values[j]);
            count += mid - i;
            j += 1;
        }
    }
    merged.extend_from_slice(&values[i..mid]);
    merged.extend_from_slice(&values[j..]);
    values.copy_from_slice(&merged);

    count
}
