//! Pseudo-tokenization of the prompt.
//!
//! This is a display-only stand-in for a real tokenizer: the prompt is
//! trimmed and split on whitespace runs, and every fragment gets a
//! synthetic value drawn from `[0, max_value)`. Values are illustration,
//! not identity. Two tokenizations of the same text may disagree unless
//! the tokenizer is seeded or configured with stable values.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::TokenizerConfig;

/// A display unit derived from the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Position in the token sequence.
    pub id: usize,
    /// Fragment of the prompt.
    pub text: String,
    /// Synthetic value in `[0, max_value)`.
    pub value: u32,
}

/// Split a prompt into its whitespace-delimited fragments.
///
/// Blank input yields no fragments.
pub fn split_fragments(raw: &str) -> impl Iterator<Item = &str> {
    raw.split_whitespace()
}

/// Tokenize with the default configuration and an entropy-seeded generator.
///
/// # Example
///
/// ```
/// use llm_tour::core::token::tokenize;
///
/// let tokens = tokenize("Com es cuina un ou?");
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[4].text, "ou?");
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(raw: &str) -> Vec<Token> {
    PseudoTokenizer::new(&TokenizerConfig::default()).tokenize(raw)
}

/// Tokenizer holding the value generator and the optional value cache.
#[derive(Debug, Clone)]
pub struct PseudoTokenizer {
    max_value: u32,
    rng: StdRng,
    /// Values keyed by (position, text), only kept with `stable_values`.
    cache: Option<HashMap<(usize, String), u32>>,
}

impl PseudoTokenizer {
    /// Create a tokenizer from configuration.
    pub fn new(config: &TokenizerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            max_value: config.max_value.max(1),
            rng,
            cache: config.stable_values.then(HashMap::new),
        }
    }

    /// Recompute the full token sequence for `raw`.
    ///
    /// Nothing is diffed against the previous sequence. With stable values
    /// enabled, the cache is pruned to the entries of this sequence.
    pub fn tokenize(&mut self, raw: &str) -> Vec<Token> {
        let tokens: Vec<Token> = split_fragments(raw)
            .enumerate()
            .map(|(id, text)| {
                let value = self.value_for(id, text);
                Token {
                    id,
                    text: text.to_string(),
                    value,
                }
            })
            .collect();

        if let Some(cache) = self.cache.as_mut() {
            cache.retain(|(id, text), _| tokens.get(*id).is_some_and(|t| &t.text == text));
        }

        tracing::trace!(count = tokens.len(), "tokenized prompt");
        tokens
    }

    fn value_for(&mut self, id: usize, text: &str) -> u32 {
        let max = self.max_value;
        match self.cache.as_mut() {
            Some(cache) => {
                let rng = &mut self.rng;
                *cache
                    .entry((id, text.to_string()))
                    .or_insert_with(|| rng.gen_range(0..max))
            }
            None => self.rng.gen_range(0..max),
        }
    }
}

impl Default for PseudoTokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64, stable: bool) -> PseudoTokenizer {
        PseudoTokenizer::new(&TokenizerConfig {
            seed: Some(seed),
            stable_values: stable,
            ..Default::default()
        })
    }

    #[test]
    fn test_reference_prompt() {
        let tokens = seeded(1, false).tokenize("Com es cuina un ou?");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Com", "es", "cuina", "un", "ou?"]);
        for (i, t) in tokens.iter().enumerate() {
            assert_eq!(t.id, i);
            assert!(t.value < 50_000);
        }
    }

    #[test]
    fn test_blank_input_yields_no_tokens() {
        let mut tokenizer = seeded(1, false);
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let tokens = seeded(1, false).tokenize("  hola\t\t  món \n");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hola");
        assert_eq!(tokens[1].text, "món");
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = seeded(7, false).tokenize("a b c d");
        let b = seeded(7, false).tokenize("a b c d");
        assert_eq!(a, b);
    }

    #[test]
    fn test_stable_values_survive_edits() {
        let mut tokenizer = seeded(3, true);
        let first = tokenizer.tokenize("Com es cuina");
        let second = tokenizer.tokenize("Com es cuina un ou?");
        assert_eq!(first[..], second[..3]);
    }

    #[test]
    fn test_stable_cache_is_pruned() {
        let mut tokenizer = seeded(3, true);
        tokenizer.tokenize("a b c");
        tokenizer.tokenize("a");
        assert_eq!(tokenizer.cache.as_ref().map(HashMap::len), Some(1));
    }

    #[test]
    fn test_small_value_bound() {
        let mut tokenizer = PseudoTokenizer::new(&TokenizerConfig {
            max_value: 1,
            seed: Some(0),
            stable_values: false,
        });
        assert!(tokenizer.tokenize("x y z").iter().all(|t| t.value == 0));
    }
}
