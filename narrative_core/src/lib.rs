//! # Narrative Core
//!
//! Decides which pieces of estate history a narrative prompt gets to see.
//! Reads the log stores kept by `game_rules` and returns a short, ordered
//! list of lines ready to be embedded in a prompt template.
//!
//! ## Core Components
//!
//! - **curation**: Normalization, deduplication, bucketing, and greedy selection of logs
//! - **config**: Bucket limits, bonuses, and breadth penalties, loadable from TOML
//!
//! ## Design Philosophy
//!
//! - **Pure**: Output depends only on the snapshot, the focus group, the month, and the config
//! - **Forgiving**: Sparse or malformed history is absorbed, never surfaced as an error
//! - **Explainable**: Every pick carries the score it won with

pub mod config;
pub mod curation;
pub mod error;

pub use config::*;
pub use curation::*;
pub use error::CurationError;
