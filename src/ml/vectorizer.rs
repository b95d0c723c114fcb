// ============================================================
// Layer 5 — Count Vectorizer
// ============================================================
// Bag-of-words term counter.
//
// Tokens are runs of two or more word characters (`\b\w\w+\b`),
// lowercased. Single letters and punctuation never become
// features.
//
// fit():       collect every distinct token of the corpus, sort
//              them, and give each its sorted position as column
//              index. The vocabulary is frozen from then on.
// transform(): count the tokens of one document against the
//              frozen vocabulary. Tokens that were never seen at
//              fit time are dropped silently.
//
// Example:
//   fit(["hello world", "hello there"])
//     vocabulary = {hello: 0, there: 1, world: 2}
//   transform("hello hello moon") = {0: 2}

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AssistantError, AssistantResult};

/// Sparse term counts: column index → occurrences
pub type TermCounts = BTreeMap<usize, u32>;

fn token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"))
}

fn tokens(doc: &str) -> Vec<String> {
    token_pattern()
        .find_iter(&doc.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountVectorizer {
    vocabulary: BTreeMap<String, usize>,
}

impl CountVectorizer {
    /// Build the vocabulary from `docs`.
    /// Fails with EmptyVocabulary when no document has a single token.
    pub fn fit(docs: &[String]) -> AssistantResult<Self> {
        let terms: BTreeSet<String> = docs.iter().flat_map(|d| tokens(d)).collect();
        if terms.is_empty() {
            return Err(AssistantError::EmptyVocabulary);
        }

        let vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        Ok(Self { vocabulary })
    }

    /// Count the in-vocabulary tokens of one document
    pub fn transform(&self, doc: &str) -> TermCounts {
        let mut counts = TermCounts::new();
        for tok in tokens(doc) {
            if let Some(&idx) = self.vocabulary.get(&tok) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// True when the indices are exactly 0..len, which is what fit produces
    pub fn is_consistent(&self) -> bool {
        let idx: BTreeSet<usize> = self.vocabulary.values().copied().collect();
        idx.len() == self.vocabulary.len() && idx.iter().copied().eq(0..self.vocabulary.len())
    }
}
