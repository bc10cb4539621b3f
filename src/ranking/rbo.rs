//! Rank-biased overlap (RBO).
//!
//! Implements the extrapolated RBO of Webber, Moffat and Zobel, "A Similarity
//! Measure for Indefinite Rankings" (TOIS 2010), including the form for lists
//! of unequal length. The agreement at each depth `d` (overlap of the two
//! depth-`d` prefixes divided by `d`) is weighted geometrically by the
//! persistence `p`, so the top of the rankings dominates.

use std::hash::Hash;

use ahash::AHashSet;

/// Extrapolated rank-biased overlap of two rankings, in `[0, 1]`.
///
/// `persistence` is the `p` parameter and must lie in `(0, 1)`; smaller values
/// concentrate weight on the first ranks. Repeated items count once, at their
/// first position. The result is symmetric in its arguments.
///
/// Two empty rankings are identical (1.0); an empty ranking shares nothing
/// with a non-empty one (0.0).
pub fn rank_biased_overlap<T: Eq + Hash>(left: &[T], right: &[T], persistence: f64) -> f64 {
    let (short, long) = if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    };
    let s = short.len();
    let l = long.len();

    if l == 0 {
        return 1.0;
    }
    if s == 0 {
        return 0.0;
    }

    let p = persistence;
    let mut seen_short: AHashSet<&T> = AHashSet::with_capacity(s);
    let mut seen_long: AHashSet<&T> = AHashSet::with_capacity(l);
    let mut overlap = 0usize;
    let mut overlap_at_short = 0usize;
    let mut weighted_sum = 0.0;
    let mut weight = 1.0;

    for d in 1..=l {
        weight *= p;

        if d <= s {
            let item = &short[d - 1];
            if seen_short.insert(item) && seen_long.contains(item) {
                overlap += 1;
            }
        }
        let item = &long[d - 1];
        if seen_long.insert(item) && seen_short.contains(item) {
            overlap += 1;
        }

        if d == s {
            overlap_at_short = overlap;
        }

        let depth = d as f64;
        weighted_sum += overlap as f64 / depth * weight;

        // Past the end of the short list its unseen tail is assumed to agree
        // at the same rate as its seen part.
        if d > s {
            weighted_sum += overlap_at_short as f64 * (d - s) as f64 / (s as f64 * depth) * weight;
        }
    }

    // `weight` is now p^l.
    let extrapolated = ((overlap - overlap_at_short) as f64 / l as f64
        + overlap_at_short as f64 / s as f64)
        * weight;

    ((1.0 - p) / p * weighted_sum + extrapolated).clamp(0.0, 1.0)
}
