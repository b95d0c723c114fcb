// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Subcommands map one-to-one onto the exposed operations:
//
//   train    → retrain(example?)
//   append   → append_and_persist(example)
//   predict  → predict(text)
//   eval     → evaluate_if_math(text)
//   show     → load_corpus_as_text()
//   reset    → delete the model (and optionally the corpus)
//   pull     → download the model if absent
//   history  → chat history of one user
//   greet    → greeting for an Accept-Language value
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::config::AppConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrain the local model, optionally adding one example first
    Train(TrainArgs),

    /// Add one example to the corpus without retraining
    Append(ExampleArgs),

    /// Answer a message with the math pre-filter and the local model
    Predict(PredictArgs),

    /// Evaluate a math expression
    Eval(EvalArgs),

    /// Print the raw training corpus
    Show,

    /// Delete the local model file
    Reset(ResetArgs),

    /// Download the model from the bucket when no local copy exists
    Pull,

    /// Print the stored chat history of a user
    History(HistoryArgs),

    /// Print the page greeting for an Accept-Language header
    Greet(GreetArgs),
}

/// File locations. Global so they can follow any subcommand.
#[derive(Args, Debug, Clone)]
pub struct StorageArgs {
    /// JSONL training corpus
    #[arg(long, global = true, default_value = "data/training_data.jsonl")]
    pub data_file: PathBuf,

    /// Serialized model file
    #[arg(long, global = true, default_value = "models/model.json")]
    pub model_file: PathBuf,

    /// Directory used as the remote model bucket
    #[arg(long, global = true, default_value = "bucket/model-bucket")]
    pub bucket_dir: PathBuf,

    /// JSONL chat history
    #[arg(long, global = true, default_value = "data/chat_logs.jsonl")]
    pub chat_log_file: PathBuf,
}

/// Boundary between Layer 1 and Layer 2:
/// the application layer never sees clap types.
impl From<StorageArgs> for AppConfig {
    fn from(a: StorageArgs) -> Self {
        AppConfig {
            data_file:     a.data_file,
            model_file:    a.model_file,
            bucket_dir:    a.bucket_dir,
            chat_log_file: a.chat_log_file,
        }
    }
}

#[derive(Args, Debug)]
pub struct TrainArgs {
    /// User input of the new example
    #[arg(long, requires = "output")]
    pub input: Option<String>,

    /// Accepted reply of the new example
    #[arg(long, requires = "input")]
    pub output: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExampleArgs {
    #[arg(long)]
    pub input: String,

    #[arg(long)]
    pub output: String,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// The message to answer
    pub text: String,
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression such as "sqrt(16) + 2^3"
    pub expr: String,
}

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Also delete the training corpus
    #[arg(long)]
    pub corpus: bool,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[arg(long)]
    pub user_id: String,
}

#[derive(Args, Debug)]
pub struct GreetArgs {
    /// Raw header value, e.g. "sw-KE,en;q=0.8"
    #[arg(long, default_value = "")]
    pub accept_language: String,
}
