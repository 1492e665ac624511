//! Keyword salience for the attention stage.
//!
//! No attention weights are computed. A token is salient when its
//! lowercased text is one of the scenario's keywords, which is enough to
//! show the model "focusing" on the content words of the prompt.

use std::collections::BTreeSet;

use crate::core::token::Token;

/// Set of lowercased salient words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: BTreeSet<String>,
}

impl KeywordSet {
    /// Build a keyword set, lowercasing every entry.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Check whether a token text matches a keyword, ignoring case.
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(&text.to_lowercase())
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if there are no keywords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Flag each token as salient or not, in token order.
///
/// # Example
///
/// ```
/// use llm_tour::attention::{KeywordSet, classify};
/// use llm_tour::core::token::tokenize;
///
/// let keywords = KeywordSet::new(["cuina", "ou", "ou?"]);
/// let flags = classify(&tokenize("Com es cuina un ou?"), &keywords);
/// assert_eq!(flags, vec![false, false, true, false, true]);
/// ```
pub fn classify(tokens: &[Token], keywords: &KeywordSet) -> Vec<bool> {
    tokens.iter().map(|t| keywords.contains(&t.text)).collect()
}

/// Split tokens into `(salient, background)`, each keeping token order.
pub fn partition<'a>(
    tokens: &'a [Token],
    keywords: &KeywordSet,
) -> (Vec<&'a Token>, Vec<&'a Token>) {
    tokens.iter().partition(|t| keywords.contains(&t.text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: usize, text: &str) -> Token {
        Token {
            id,
            text: text.to_string(),
            value: 0,
        }
    }

    #[test]
    fn test_case_insensitive_match() {
        let keywords = KeywordSet::new(["CUINA"]);
        assert!(keywords.contains("cuina"));
        assert!(keywords.contains("Cuina"));
        assert!(!keywords.contains("cuinar"));
    }

    #[test]
    fn test_no_match_is_all_false() {
        let tokens = vec![token(0, "hola"), token(1, "món")];
        let keywords = KeywordSet::new(["ou"]);
        assert_eq!(classify(&tokens, &keywords), vec![false, false]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(classify(&[], &KeywordSet::new(["ou"])).is_empty());
        let tokens = vec![token(0, "ou")];
        assert_eq!(classify(&tokens, &KeywordSet::default()), vec![false]);
    }

    #[test]
    fn test_partition_keeps_order() {
        let tokens = vec![token(0, "Com"), token(1, "cuina"), token(2, "un"), token(3, "OU")];
        let (salient, background) = partition(&tokens, &KeywordSet::new(["ou", "cuina"]));
        let salient: Vec<usize> = salient.iter().map(|t| t.id).collect();
        let background: Vec<usize> = background.iter().map(|t| t.id).collect();
        assert_eq!(salient, vec![1, 3]);
        assert_eq!(background, vec![0, 2]);
    }
}
