//! ChatHandler - pass-through coaching chat.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{AIProvider, CompletionRequest, Message, MessageRole};

/// Default system prompt for the coaching assistant.
pub const COACH_SYSTEM_PROMPT: &str = "You are a helpful gym and dietary coaching assistant. \
Provide safe, concise, goal-oriented guidance for fitness and nutrition.

Key guidelines:
- Focus on evidence-based recommendations
- Keep responses practical and actionable
- Avoid medical claims or diagnoses
- Suggest consulting healthcare professionals for medical conditions
- Prioritize safety in all exercise recommendations
- Be encouraging and supportive

You help with:
- Workout programming and exercise selection
- Basic nutrition and meal planning
- Form cues and exercise technique
- Recovery and injury prevention
- Goal setting and motivation

Always prioritize safety and proper form over intensity.";

/// Sampling settings for each chat call.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            system_prompt: COACH_SYSTEM_PROMPT.to_string(),
            max_tokens: 1000,
            temperature: 0.7,
        }
    }
}

/// A chat turn: the new user text plus everything said so far.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub user_input: String,
    pub history: Vec<Message>,
}

/// Token counts for one chat call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUsage {
    pub tokens_in: u32,
    pub tokens_out: u32,
}

/// Result of a chat turn.
#[derive(Debug, Clone)]
pub struct ChatResult {
    pub response: String,
    /// Input history followed by the user and assistant messages of this turn.
    pub history: Vec<Message>,
    pub usage: ChatUsage,
}

/// Forwards one chat turn to the configured provider.
pub struct ChatHandler {
    provider: Arc<dyn AIProvider>,
    settings: ChatSettings,
}

impl ChatHandler {
    pub fn new(provider: Arc<dyn AIProvider>, settings: ChatSettings) -> Self {
        Self { provider, settings }
    }

    pub async fn send(&self, cmd: ChatCommand) -> Result<ChatResult, DomainError> {
        if cmd.user_input.trim().is_empty() {
            return Err(DomainError::validation(
                "user_input",
                "User input cannot be empty",
            ));
        }

        let has_system = cmd.history.iter().any(|m| m.role == MessageRole::System);
        let mut request = CompletionRequest::new()
            .with_max_tokens(self.settings.max_tokens)
            .with_temperature(self.settings.temperature);
        if !has_system {
            request = request.with_message(Message::system(self.settings.system_prompt.clone()));
        }
        let request = request
            .with_messages(cmd.history.iter().cloned())
            .with_message(Message::user(cmd.user_input.clone()));

        let completion = self.provider.complete(request).await.map_err(|e| {
            error!(provider = %self.provider.provider_info().name, error = %e, "chat completion failed");
            DomainError::new(ErrorCode::AIProviderError, format!("Chat service error: {}", e))
        })?;

        debug!(
            model = %completion.model,
            tokens_in = completion.usage.prompt_tokens,
            tokens_out = completion.usage.completion_tokens,
            "chat completion"
        );

        let mut history = cmd.history;
        history.push(Message::user(cmd.user_input));
        history.push(Message::assistant(completion.content.clone()));

        Ok(ChatResult {
            response: completion.content,
            history,
            usage: ChatUsage {
                tokens_in: completion.usage.prompt_tokens,
                tokens_out: completion.usage.completion_tokens,
            },
        })
    }
}
