//! Demo scenarios.
//!
//! A scenario bundles the sample prompt, the words the attention stage
//! highlights, and the scripted response the inference stage plays back.
//! New scenarios are data, loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One demonstration: prompt, salient keywords, and scripted response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoScenario {
    /// Human-readable name.
    pub name: String,
    /// Prompt the session opens with.
    pub prompt: String,
    /// Lowercased words the attention stage marks as salient.
    pub keywords: Vec<String>,
    /// Scripted output fragments, in reveal order.
    pub response: Vec<String>,
}

impl DemoScenario {
    /// The bundled egg-cooking scenario.
    pub fn reference() -> Self {
        Self {
            name: "cuinar un ou".to_string(),
            prompt: "Com es cuina un ou?".to_string(),
            keywords: ["cuina", "ou", "ou?"].map(String::from).to_vec(),
            response: [
                "Per", "cuinar", "un", "ou,", "pots", "fer-lo", "fregit", "o", "bullit.",
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    /// Parse and validate a scenario from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load and validate a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the scenario can be played back and matched against.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidScenario` for an empty response, a blank
    /// response fragment, or a keyword that is not lowercase.
    pub fn validate(&self) -> Result<()> {
        if self.response.is_empty() {
            return Err(Error::InvalidScenario(format!(
                "{}: response has no fragments",
                self.name
            )));
        }
        if let Some(pos) = self.response.iter().position(|f| f.trim().is_empty()) {
            return Err(Error::InvalidScenario(format!(
                "{}: response fragment {pos} is blank",
                self.name
            )));
        }
        if let Some(kw) = self.keywords.iter().find(|k| k.to_lowercase() != **k) {
            return Err(Error::InvalidScenario(format!(
                "{}: keyword {kw:?} is not lowercase",
                self.name
            )));
        }
        Ok(())
    }

    /// The full response as the decoding stage shows it.
    pub fn decoded_text(&self) -> String {
        self.response.join(" ")
    }
}

impl Default for DemoScenario {
    fn default() -> Self {
        Self::reference()
    }
}
