// ============================================================
// Layer 3 — Error Kinds
// ============================================================
// Every fault at the corpus/model boundary is turned into one of
// these variants. None of them is fatal to the serving process:
// callers either show the message or fall through to the next
// strategy.
//
// "Model unavailable" is absent on purpose: a missing model is
// a normal predictor outcome (see
// application::predict_use_case::Answer).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    /// The math pre-filter matched but evaluation failed
    #[error("invalid math expression: {0}")]
    InvalidExpression(String),

    /// Retrain was asked for with an empty corpus
    #[error("no training data available to train the model")]
    NoTrainingData,

    /// The corpus holds examples but none of their inputs yields a token
    #[error("empty vocabulary; the training inputs contain no usable words")]
    EmptyVocabulary,

    /// A corpus line could not be parsed back into a TrainingExample
    #[error("corrupt corpus at line {line}: {reason}")]
    CorruptCorpus { line: usize, reason: String },

    /// Filesystem fault while reading or writing corpus/model files
    #[error("storage unavailable ({context}): {source}")]
    StorageUnavailable {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The model file exists but does not decode into a model
    #[error("model file is unreadable: {0}")]
    ModelFormat(String),

    /// Upload or download through the object store failed
    #[error("object store error: {0}")]
    ObjectStore(String),
}

impl AssistantError {
    /// Wrap an io::Error with a short description of what was attempted
    pub fn storage(context: impl Into<String>, source: io::Error) -> Self {
        Self::StorageUnavailable { context: context.into(), source }
    }
}

pub type AssistantResult<T> = Result<T, AssistantError>;
