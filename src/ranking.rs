//! Ranking similarity scoring.
//!
//! Compares two ranked lists by blending rank-biased overlap (shared members,
//! weighted toward the top ranks) with a top-k Kendall distance over every
//! pair of items in either list.

pub mod config;
pub mod item;
pub mod kendall;
pub mod rbo;
pub mod scorer;
pub mod similarity;

pub use config::RankingSimilarityConfig;
pub use item::{DEFAULT_KEY_FIELD, Item, RankedList};
pub use scorer::{RankingSimilarity, SharedRankingSimilarity};
pub use similarity::{SimilarityBreakdown, ranking_similarity};
