//! Attention stage.
//!
//! This module contains:
//! - KeywordSet, the scenario's salient words
//! - classify / partition for highlighting prompt tokens

pub mod salience;

pub use salience::{KeywordSet, classify, partition};
