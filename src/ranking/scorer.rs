//! The ranking similarity scorer.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::error::{RankSimError, Result};
use crate::ranking::config::RankingSimilarityConfig;
use crate::ranking::item::RankedList;
use crate::ranking::similarity::SimilarityBreakdown;

/// Scores how alike two ranked lists are and checks the result against a
/// success threshold.
///
/// The scorer remembers the score of its most recent successful
/// [`measure`](Self::measure) call; [`is_successful`](Self::is_successful)
/// compares that score with the configured threshold.
///
/// # Examples
///
/// ```
/// use ranksim::ranking::{RankedList, RankingSimilarity};
///
/// let mut scorer = RankingSimilarity::new(0.5);
/// let shifted = scorer
///     .measure(&RankedList::from(["a", "b"]), &RankedList::from(["b", "c"]))
///     .unwrap();
/// let swapped = scorer
///     .measure(&RankedList::from(["a", "b"]), &RankedList::from(["b", "a"]))
///     .unwrap();
///
/// assert!(swapped > shifted);
/// assert!(scorer.is_successful().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct RankingSimilarity {
    config: RankingSimilarityConfig,
    last_score: Option<f64>,
}

impl RankingSimilarity {
    /// Create a scorer with default parameters and the given threshold.
    pub fn new(success_threshold: f64) -> Self {
        Self {
            config: RankingSimilarityConfig::with_threshold(success_threshold),
            last_score: None,
        }
    }

    /// Create a scorer from a full configuration.
    pub fn with_config(config: RankingSimilarityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            last_score: None,
        })
    }

    pub fn name(&self) -> &str {
        "Ranking Similarity"
    }

    pub fn config(&self) -> &RankingSimilarityConfig {
        &self.config
    }

    pub fn success_threshold(&self) -> f64 {
        self.config.success_threshold
    }

    /// Score two ranked lists and record the result.
    ///
    /// Records are compared by the configured key field. On error the
    /// previously recorded score is kept.
    pub fn measure(&mut self, list_1: &RankedList, list_2: &RankedList) -> Result<f64> {
        let breakdown = self.breakdown(list_1, list_2)?;
        self.last_score = Some(breakdown.score);
        Ok(breakdown.score)
    }

    /// Score two ranked lists given as dynamic JSON values.
    ///
    /// Both values must be arrays of strings, numbers, booleans or records.
    pub fn measure_json(&mut self, list_1: &Value, list_2: &Value) -> Result<f64> {
        let (list_1, list_2) = parse_json_lists(list_1, list_2)?;
        self.measure(&list_1, &list_2)
    }

    /// Score two rankings of already extracted keys and record the result.
    pub fn measure_keys<T: Eq + Hash>(&mut self, list_1: &[T], list_2: &[T]) -> f64 {
        let breakdown = self.compute(list_1, list_2);
        tracing::debug!(
            "{}: {} vs {} keys -> {:.4}",
            self.name(),
            list_1.len(),
            list_2.len(),
            breakdown.score
        );
        self.last_score = Some(breakdown.score);
        breakdown.score
    }

    /// Score two ranked lists without recording the result.
    pub fn breakdown(&self, list_1: &RankedList, list_2: &RankedList) -> Result<SimilarityBreakdown> {
        let key_field = self.config.key_field.as_str();
        let keys_1 = list_1.keys(key_field).inspect_err(|e| {
            tracing::warn!("Rejected first ranked list: {}", e);
        })?;
        let keys_2 = list_2.keys(key_field).inspect_err(|e| {
            tracing::warn!("Rejected second ranked list: {}", e);
        })?;

        let breakdown = self.compute(&keys_1, &keys_2);
        tracing::debug!(
            "{}: {} vs {} items -> {:.4} (rbo {:.4}, order {:.4})",
            self.name(),
            keys_1.len(),
            keys_2.len(),
            breakdown.score,
            breakdown.rank_biased_overlap,
            breakdown.order_agreement
        );
        Ok(breakdown)
    }

    /// Score of the most recent successful measurement, if any.
    pub fn last_score(&self) -> Option<f64> {
        self.last_score
    }

    /// Whether the most recent score meets the success threshold.
    ///
    /// A NaN threshold, which only [`new`](Self::new) lets through, is an
    /// `InvalidConfig` error rather than a silent failure.
    pub fn is_successful(&self) -> Result<bool> {
        if self.config.success_threshold.is_nan() {
            return Err(RankSimError::invalid_config(
                "success_threshold is NaN; no score can meet it",
            ));
        }
        match self.last_score {
            Some(score) => Ok(score >= self.config.success_threshold),
            None => Err(RankSimError::state(
                "is_successful called before any measurement",
            )),
        }
    }

    /// Forget the recorded score.
    pub fn reset(&mut self) {
        self.last_score = None;
    }

    fn compute<T: Eq + Hash>(&self, list_1: &[T], list_2: &[T]) -> SimilarityBreakdown {
        SimilarityBreakdown::compute(
            list_1,
            list_2,
            self.config.persistence,
            self.config.overlap_weight,
            self.config.kendall_penalty,
        )
    }
}

/// Parse both sides of a JSON comparison, logging whichever side is rejected.
fn parse_json_lists(list_1: &Value, list_2: &Value) -> Result<(RankedList, RankedList)> {
    let list_1 = RankedList::from_json(list_1).inspect_err(|e| {
        tracing::warn!("Rejected first ranked list: {}", e);
    })?;
    let list_2 = RankedList::from_json(list_2).inspect_err(|e| {
        tracing::warn!("Rejected second ranked list: {}", e);
    })?;
    Ok((list_1, list_2))
}

/// A [`RankingSimilarity`] that can be shared between threads and tasks.
///
/// Clones share the same scorer and therefore the same recorded score.
#[derive(Debug, Clone)]
pub struct SharedRankingSimilarity {
    inner: Arc<RwLock<RankingSimilarity>>,
}

impl SharedRankingSimilarity {
    pub fn new(scorer: RankingSimilarity) -> Self {
        Self {
            inner: Arc::new(RwLock::new(scorer)),
        }
    }

    pub fn measure(&self, list_1: &RankedList, list_2: &RankedList) -> Result<f64> {
        // Keys are extracted and scored under the read lock; only the
        // recorded score needs the write lock.
        let breakdown = self.inner.read().breakdown(list_1, list_2)?;
        self.inner.write().last_score = Some(breakdown.score);
        Ok(breakdown.score)
    }

    pub fn measure_json(&self, list_1: &Value, list_2: &Value) -> Result<f64> {
        let (list_1, list_2) = parse_json_lists(list_1, list_2)?;
        self.measure(&list_1, &list_2)
    }

    pub fn last_score(&self) -> Option<f64> {
        self.inner.read().last_score()
    }

    pub fn is_successful(&self) -> Result<bool> {
        self.inner.read().is_successful()
    }

    pub fn reset(&self) {
        self.inner.write().reset();
    }

    pub fn success_threshold(&self) -> f64 {
        self.inner.read().success_threshold()
    }
}

impl From<RankingSimilarity> for SharedRankingSimilarity {
    fn from(scorer: RankingSimilarity) -> Self {
        Self::new(scorer)
    }
}
