//! One-shot similarity checks for test code.
//!
//! ```
//! use ranksim::assertions::assert_ranking_similarity;
//!
//! assert_ranking_similarity(["a", "b"], ["b", "c"], 0.4);
//! ```

use crate::error::{RankSimError, Result};
use crate::ranking::{RankedList, RankingSimilarity, RankingSimilarityConfig};

/// Score two ranked lists and fail unless the score reaches the threshold.
///
/// Returns the score on success and [`RankSimError::BelowThreshold`] otherwise.
/// A non-finite threshold is an `InvalidConfig` error.
pub fn check_ranking_similarity(
    list_1: impl Into<RankedList>,
    list_2: impl Into<RankedList>,
    success_threshold: f64,
) -> Result<f64> {
    let mut scorer =
        RankingSimilarity::with_config(RankingSimilarityConfig::with_threshold(success_threshold))?;
    let score = scorer.measure(&list_1.into(), &list_2.into())?;

    if scorer.is_successful()? {
        Ok(score)
    } else {
        Err(RankSimError::BelowThreshold {
            score,
            threshold: success_threshold,
        })
    }
}

/// Assert that two ranked lists are at least `success_threshold` similar.
///
/// # Panics
///
/// Panics if the score is below the threshold or the input is malformed.
#[track_caller]
pub fn assert_ranking_similarity(
    list_1: impl Into<RankedList>,
    list_2: impl Into<RankedList>,
    success_threshold: f64,
) {
    if let Err(e) = check_ranking_similarity(list_1, list_2, success_threshold) {
        panic!("assertion failed: {e}");
    }
}
