// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to a
// use case from Layer 2. Printing happens here and nowhere else.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use commands::{Commands, StorageArgs, TrainArgs};

use crate::application::chat_use_case::greeting_for;
use crate::application::config::AppConfig;
use crate::application::predict_use_case::PredictUseCase;
use crate::application::train_use_case::TrainUseCase;
use crate::data::math::{evaluate, looks_like_math};
use crate::domain::traits::ChatLog;
use crate::domain::training_example::TrainingExample;
use crate::infra::chat_log::JsonlChatLog;
use crate::infra::object_store::LocalBucket;

#[derive(Parser, Debug)]
#[command(
    name = "fanky-lokal",
    version,
    about = "Local fallback model and math pre-filter for the FankyGPT assistant."
)]
pub struct Cli {
    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config: AppConfig = self.storage.into();
        let trainer = TrainUseCase::new(&config, Arc::new(LocalBucket::new(&config.bucket_dir)));

        match self.command {
            Commands::Train(args) => run_train(&trainer, args),
            Commands::Append(args) => {
                trainer.append_and_persist(&TrainingExample::new(args.input, args.output))?;
                println!("Example saved.");
                Ok(())
            }
            Commands::Predict(args) => {
                // same as server startup: fetch a model before the first prediction
                trainer.pull_model_if_absent();
                let answer = PredictUseCase::new(&config).predict(&args.text);
                tracing::info!("Answered from {}", answer.source());
                println!("{answer}");
                Ok(())
            }
            Commands::Eval(args) => {
                if !looks_like_math(&args.expr) {
                    bail!("'{}' is not a math expression", args.expr);
                }
                println!("Math Result: {}", evaluate(&args.expr)?);
                Ok(())
            }
            Commands::Show => {
                print!("{}", trainer.load_corpus_as_text()?);
                Ok(())
            }
            Commands::Reset(args) => {
                if trainer.reset_model()? {
                    println!("Model deleted.");
                } else {
                    println!("No model to delete.");
                }
                if args.corpus {
                    trainer.clear_corpus()?;
                    println!("Corpus deleted.");
                }
                Ok(())
            }
            Commands::Pull => {
                if trainer.pull_model_if_absent() {
                    println!("Model ready at '{}'.", trainer.model_path().display());
                    Ok(())
                } else {
                    bail!("No model available locally or in the bucket")
                }
            }
            Commands::History(args) => {
                let log = JsonlChatLog::new(&config.chat_log_file);
                for turn in log.fetch(&args.user_id)? {
                    println!("user: {}\nbot:  {}\n", turn.user, turn.bot);
                }
                Ok(())
            }
            Commands::Greet(args) => {
                println!("{}", greeting_for(&args.accept_language));
                Ok(())
            }
        }
    }
}

fn run_train(trainer: &TrainUseCase, args: TrainArgs) -> Result<()> {
    let example = match (args.input, args.output) {
        (Some(input), Some(output)) => Some(TrainingExample::new(input, output)),
        _ => None,
    };

    tracing::info!("Retraining model '{}'", trainer.model_path().display());
    let report = trainer
        .retrain(example.as_ref())
        .context("Training failed")?;

    println!(
        "Training complete: {} examples, {} classes, {} terms.",
        report.examples, report.classes, report.vocabulary
    );
    Ok(())
}
