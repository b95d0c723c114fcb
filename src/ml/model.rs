// ============================================================
// Layer 5 — Model Artifact
// ============================================================
// The fitted (vectorizer, classifier) pair. The two halves are
// always fitted together and always saved and loaded together:
// the classifier's feature columns are the vectorizer's
// vocabulary indices.

use serde::{Deserialize, Serialize};

use crate::data::normalizer::normalize;
use crate::domain::error::{AssistantError, AssistantResult};
use crate::ml::naive_bayes::MultinomialNb;
use crate::ml::vectorizer::CountVectorizer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub vectorizer: CountVectorizer,
    pub classifier: MultinomialNb,
}

impl ModelArtifact {
    pub fn new(vectorizer: CountVectorizer, classifier: MultinomialNb) -> Self {
        Self { vectorizer, classifier }
    }

    /// Reject pairs whose halves do not line up (hand-edited or
    /// truncated-then-patched files)
    pub fn validate(&self) -> AssistantResult<()> {
        if !self.vectorizer.is_consistent() {
            return Err(AssistantError::ModelFormat("vectorizer indices are not contiguous".into()));
        }
        if !self.classifier.is_consistent() {
            return Err(AssistantError::ModelFormat("classifier tables have mismatched shapes".into()));
        }
        if self.vectorizer.len() != self.classifier.n_features() {
            return Err(AssistantError::ModelFormat(format!(
                "vocabulary has {} terms but classifier expects {}",
                self.vectorizer.len(),
                self.classifier.n_features()
            )));
        }
        Ok(())
    }

    /// Normalize, vectorize and classify one raw input
    pub fn predict(&self, text: &str) -> AssistantResult<String> {
        let row = self.vectorizer.transform(&normalize(text));
        tracing::debug!("Input '{}' hit {} known terms", text, row.len());
        self.classifier
            .predict(&row)
            .map(str::to_string)
            .ok_or_else(|| AssistantError::ModelFormat("classifier has no classes".into()))
    }
}
