// ============================================================
// Layer 5 — Trainer
// ============================================================
// Fits a fresh ModelArtifact from the whole corpus. There is no
// incremental update: every call starts from zero.
//
//   Step 1: normalize every input          (Layer 4)
//   Step 2: fit the vocabulary             (vectorizer.rs)
//   Step 3: vectorize every input
//   Step 4: fit Naive Bayes, one class per distinct output

use crate::data::normalizer::Normalizer;
use crate::domain::error::{AssistantError, AssistantResult};
use crate::domain::training_example::TrainingExample;
use crate::ml::model::ModelArtifact;
use crate::ml::naive_bayes::{MultinomialNb, DEFAULT_ALPHA};
use crate::ml::vectorizer::{CountVectorizer, TermCounts};

pub fn fit_artifact(examples: &[TrainingExample]) -> AssistantResult<ModelArtifact> {
    if examples.is_empty() {
        return Err(AssistantError::NoTrainingData);
    }

    let normalizer = Normalizer::new();
    let inputs: Vec<String> = examples.iter().map(|ex| normalizer.normalize(&ex.input)).collect();
    let labels: Vec<String> = examples.iter().map(|ex| ex.output.clone()).collect();

    let vectorizer = CountVectorizer::fit(&inputs)?;
    let rows: Vec<TermCounts> = inputs.iter().map(|doc| vectorizer.transform(doc)).collect();
    let classifier = MultinomialNb::fit(&rows, &labels, vectorizer.len(), DEFAULT_ALPHA);

    tracing::info!(
        "Fitted model: {} examples, {} classes, {} terms",
        examples.len(),
        classifier.classes().len(),
        vectorizer.len()
    );

    Ok(ModelArtifact::new(vectorizer, classifier))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_is_no_training_data() {
        assert!(matches!(fit_artifact(&[]), Err(AssistantError::NoTrainingData)));
    }

    #[test]
    fn test_single_example_round_trip() {
        let model = fit_artifact(&[TrainingExample::new("hello", "world")]).unwrap();
        assert_eq!(model.predict("hello").unwrap(), "world");
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_memorises_outputs_by_term_overlap() {
        let model = fit_artifact(&[
            TrainingExample::new("What is the weather like today?", "It looks sunny."),
            TrainingExample::new("Recommend me a pizza place", "Try the corner pizzeria."),
            TrainingExample::new("Who wrote Hamlet", "William Shakespeare."),
        ])
        .unwrap();

        assert_eq!(model.predict("WEATHER today??").unwrap(), "It looks sunny.");
        assert_eq!(model.predict("any good pizza").unwrap(), "Try the corner pizzeria.");
        assert_eq!(model.predict("hamlet author, who?").unwrap(), "William Shakespeare.");
    }

    #[test]
    fn test_punctuation_only_corpus_has_empty_vocabulary() {
        let err = fit_artifact(&[TrainingExample::new("?!", "huh")]).unwrap_err();
        assert!(matches!(err, AssistantError::EmptyVocabulary));
    }
}
