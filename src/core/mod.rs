//! Core data for the walkthrough.
//!
//! This module contains the fundamental building blocks:
//! - StageCatalog and StageDescriptor for the explanatory stages
//! - Token and PseudoTokenizer for the prompt breakdown
//! - DemoScenario for the bundled prompt, keywords, and response

pub mod scenario;
pub mod stage;
pub mod token;

pub use scenario::DemoScenario;
pub use stage::{Accent, StageCatalog, StageDescriptor, StageKind};
pub use token::{PseudoTokenizer, Token, tokenize};
