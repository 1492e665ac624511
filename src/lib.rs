//! llm-tour: an interactive walkthrough of how an LLM answers a prompt.
//!
//! The crate drives an educational, step-by-step explanation of LLM
//! inference. Nothing here runs a model; every stage is simulated:
//! - Prompt capture and whitespace pseudo-tokenization
//! - Keyword salience standing in for attention
//! - Timed, token-by-token playback of a scripted response
//! - Bounded navigation across the explanatory stages

pub mod config;
pub mod error;
pub mod telemetry;

pub mod attention;
pub mod core;
pub mod educational;
pub mod engine;

pub use attention::{KeywordSet, classify, partition};
pub use config::{PlaybackConfig, TokenizerConfig, TourConfig};
pub use crate::core::{
    DemoScenario, PseudoTokenizer, StageCatalog, StageDescriptor, StageKind, Token, tokenize,
};
pub use engine::{GenerationPlayer, PlaybackState, SessionView, StageNavigator, TourSession};
pub use error::{Error, Result};
