//! The blended ranking similarity score.
//!
//! ```text
//! score = w * RBO_ext(S, T, p) + (1 - w) * (1 - K^(q)(S, T))
//! ```
//!
//! RBO rewards shared membership near the top of both rankings; the top-k
//! Kendall term scores the relative order of every pair of items, including
//! pairs where only one item is shared. The score lies in `[0, 1]`, is 1.0
//! for identical rankings, 0.0 for rankings with no item in common, is
//! symmetric in its arguments, and never drops when an item ranked first in
//! both lists is added.

use std::hash::Hash;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::ranking::kendall::top_k_kendall_similarity;
use crate::ranking::rbo::rank_biased_overlap;

/// A similarity score together with the parts it was blended from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityBreakdown {
    /// Extrapolated rank-biased overlap.
    pub rank_biased_overlap: f64,
    /// One minus the normalized top-k Kendall distance.
    pub order_agreement: f64,
    /// Final blended score.
    pub score: f64,
}

impl SimilarityBreakdown {
    /// Compute the blended similarity of two rankings.
    ///
    /// Repeated items are dropped after their first occurrence before
    /// scoring, so a ranking always matches itself exactly.
    pub fn compute<T: Eq + Hash>(
        left: &[T],
        right: &[T],
        persistence: f64,
        overlap_weight: f64,
        kendall_penalty: f64,
    ) -> Self {
        let left = dedup_first(left);
        let right = dedup_first(right);

        if left == right {
            return Self {
                rank_biased_overlap: 1.0,
                order_agreement: 1.0,
                score: 1.0,
            };
        }

        let rank_biased_overlap = rank_biased_overlap(&left, &right, persistence);
        let order_agreement = top_k_kendall_similarity(&left, &right, kendall_penalty);
        let score = (overlap_weight * rank_biased_overlap
            + (1.0 - overlap_weight) * order_agreement)
            .clamp(0.0, 1.0);

        Self {
            rank_biased_overlap,
            order_agreement,
            score,
        }
    }
}

/// Blended ranking similarity of two rankings, in `[0, 1]`.
pub fn ranking_similarity<T: Eq + Hash>(
    left: &[T],
    right: &[T],
    persistence: f64,
    overlap_weight: f64,
    kendall_penalty: f64,
) -> f64 {
    SimilarityBreakdown::compute(left, right, persistence, overlap_weight, kendall_penalty).score
}

fn dedup_first<T: Eq + Hash>(items: &[T]) -> Vec<&T> {
    let mut seen = AHashSet::with_capacity(items.len());
    items.iter().filter(|item| seen.insert(*item)).collect()
}
