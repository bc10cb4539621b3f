//! # ranksim
//!
//! Similarity scoring for ranked lists, for judging retrieval and
//! language-model outputs against an expected ranking.
//!
//! ## Features
//!
//! - Extrapolated rank-biased overlap for rankings of any length
//! - Pairwise order agreement among shared items
//! - Plain values or records compared by a key field
//! - Threshold-based success checks and one-shot assertions

pub mod assertions;
pub mod error;
pub mod ranking;

pub mod prelude {
    pub use crate::assertions::{assert_ranking_similarity, check_ranking_similarity};
    pub use crate::error::{RankSimError, Result};
    pub use crate::ranking::{
        Item, RankedList, RankingSimilarity, RankingSimilarityConfig, SharedRankingSimilarity,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
