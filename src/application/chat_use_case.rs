// ============================================================
// Layer 2 — Chat Use Case
// ============================================================
// One chat turn through the hosted LLM:
//
//   Step 1: pick a system prompt from the language hint,
//           or from the detected language without one
//   Step 2: ask the LLM                       (LlmClient)
//   Step 3: store the turn for the user       (ChatLog)
//   Step 4: train the local fallback on it    (TrainUseCase)
//
// Only step 2 can fail the turn. Logging and training problems
// are warned about and the reply is still returned.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::train_use_case::TrainUseCase;
use crate::data::language::detect_language;
use crate::domain::chat::ChatTurn;
use crate::domain::traits::{ChatLog, LlmClient};
use crate::domain::training_example::TrainingExample;

const PROMPT_DEFAULT: &str = "You are FankyGPT, an intelligent assistant. Reply in the user's language.";
const PROMPT_SWAHILI: &str = "You are FankyGPT, an intelligent assistant named FankyGPT. Reply in Swahili.";
const PROMPT_ENGLISH: &str = "You are FankyGPT, an intelligent assistant. Reply in English.";

const GREETING: &str = "Hello! I'm FankyGPT. Ask me anything.";
const GREETING_SWAHILI: &str = "Hello! I'm FankyGPT. Ask me anything. (Swahili supported)";
const GREETING_INDONESIAN: &str = "Hello! I'm FankyGPT. Ask me anything. (Indonesian supported)";

/// System prompt for a language code such as "sw", "en-US" or "id"
pub fn choose_system_prompt(lang_code: &str) -> &'static str {
    let lc = lang_code.trim().to_lowercase();
    if lc.starts_with("sw") {
        PROMPT_SWAHILI
    } else if lc.starts_with("en") {
        PROMPT_ENGLISH
    } else {
        // includes "id"/"in" (Indonesian) and unknown codes
        PROMPT_DEFAULT
    }
}

/// Page greeting for an Accept-Language header value
pub fn greeting_for(accept_language: &str) -> &'static str {
    let first = accept_language.split(',').next().unwrap_or("").trim();
    let lang: String = first.chars().take(2).collect::<String>().to_lowercase();
    match lang.as_str() {
        "sw" => GREETING_SWAHILI,
        "id" => GREETING_INDONESIAN,
        _ => GREETING,
    }
}

pub struct ChatUseCase<L, C> {
    llm:     L,
    log:     C,
    trainer: Arc<TrainUseCase>,
}

impl<L: LlmClient, C: ChatLog> ChatUseCase<L, C> {
    pub fn new(llm: L, log: C, trainer: Arc<TrainUseCase>) -> Self {
        Self { llm, log, trainer }
    }

    /// Run one turn and return the trimmed LLM reply
    pub fn reply(&self, input: &str, user_id: Option<&str>, lang_hint: Option<&str>) -> Result<String> {
        let lang   = lang_hint.unwrap_or_else(|| detect_language(input));
        let system = choose_system_prompt(lang);

        let reply = self
            .llm
            .complete(system, input)
            .context("Failed to contact the language model")?
            .trim()
            .to_string();

        if let Some(uid) = user_id {
            if let Err(e) = self.log.append(input, &reply, Some(uid)) {
                tracing::warn!("Failed to save chat: {e:#}");
            }
        }

        // auto-train: a failed retrain never fails the turn
        if let Err(e) = self.trainer.retrain(Some(&TrainingExample::new(input, reply.as_str()))) {
            tracing::warn!("Auto-train failed: {e}");
        }

        Ok(reply)
    }

    /// Conversation history of `user_id`; empty on any failure
    pub fn history(&self, user_id: &str) -> Vec<ChatTurn> {
        self.log.fetch(user_id).unwrap_or_else(|e| {
            tracing::warn!("Failed to fetch chat history: {e:#}");
            Vec::new()
        })
    }
}
