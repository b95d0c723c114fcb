// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// Answers a user message with an ordered chain of strategies.
// Each stage either answers or passes to the next one:
//
//   1. MathStrategy         — allow-listed expression → value
//   2. LearnedModelStrategy — model file → best matching output
//                             (or the "unavailable" sentinel)
//
// Every outcome, including faults, comes back as an Answer that
// can be shown to the user. Nothing here returns an error.

use std::fmt;

use crate::application::config::AppConfig;
use crate::data::math::evaluate_if_math;
use crate::infra::model_store::ModelStore;

/// Shown when no model has been trained yet
pub const MODEL_UNAVAILABLE: &str = "⚠️ Model not available yet. Train it first.";

/// Tagged result of the strategy chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Result of the math pre-filter
    Math(String),
    /// Label picked by the classifier
    Learned(String),
    /// No model file exists
    Unavailable,
    /// Loading or inference failed; carries the reason
    Failed(String),
}

impl Answer {
    /// Which stage produced this answer
    pub fn source(&self) -> &'static str {
        match self {
            Answer::Math(_) => "math",
            Answer::Learned(_) => "model",
            Answer::Unavailable => "unavailable",
            Answer::Failed(_) => "error",
        }
    }

    /// Displayable text
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Math(v) | Answer::Learned(v) => f.write_str(v),
            Answer::Unavailable => f.write_str(MODEL_UNAVAILABLE),
            Answer::Failed(reason) => write!(f, "❌ Prediction failed: {reason}"),
        }
    }
}

/// What a single stage decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Answered(Answer),
    Pass,
}

pub trait AnswerStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn attempt(&self, text: &str) -> StageOutcome;
}

// ─── Math stage ───────────────────────────────────────────────────────────────
pub struct MathStrategy;

impl AnswerStrategy for MathStrategy {
    fn name(&self) -> &'static str {
        "math"
    }

    fn attempt(&self, text: &str) -> StageOutcome {
        match evaluate_if_math(text) {
            Some(value) => StageOutcome::Answered(Answer::Math(value)),
            None => StageOutcome::Pass,
        }
    }
}

// ─── Learned model stage ──────────────────────────────────────────────────────
pub struct LearnedModelStrategy {
    models: ModelStore,
}

impl LearnedModelStrategy {
    pub fn new(models: ModelStore) -> Self {
        Self { models }
    }
}

impl AnswerStrategy for LearnedModelStrategy {
    fn name(&self) -> &'static str {
        "model"
    }

    fn attempt(&self, text: &str) -> StageOutcome {
        // the model is re-read on every call so a retrain is picked up at once
        let answer = match self.models.load() {
            Ok(None) => Answer::Unavailable,
            Ok(Some(model)) => match model.predict(text) {
                Ok(label) => Answer::Learned(label),
                Err(e) => Answer::Failed(e.to_string()),
            },
            Err(e) => {
                tracing::warn!("Cannot load model '{}': {e}", self.models.path().display());
                Answer::Failed(e.to_string())
            }
        };
        StageOutcome::Answered(answer)
    }
}

// ─── PredictUseCase ───────────────────────────────────────────────────────────
pub struct PredictUseCase {
    strategies: Vec<Box<dyn AnswerStrategy>>,
}

impl PredictUseCase {
    /// Standard chain: math first, then the learned model
    pub fn new(config: &AppConfig) -> Self {
        Self::with_strategies(vec![
            Box::new(MathStrategy),
            Box::new(LearnedModelStrategy::new(ModelStore::new(&config.model_file))),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn AnswerStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn predict(&self, text: &str) -> Answer {
        for stage in &self.strategies {
            if let StageOutcome::Answered(answer) = stage.attempt(text) {
                tracing::debug!("'{}' answered by the {} stage", text, stage.name());
                return answer;
            }
        }
        Answer::Unavailable
    }
}
