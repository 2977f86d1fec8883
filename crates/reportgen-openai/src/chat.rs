//! Chat completions: the text-generation step of both pipelines.

use reportgen_http::check_status;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::{MAX_BODY_BYTES, OpenAiClient};
use crate::error::OpenAiError;

/// Anything that turns a system + user prompt into generated text.
pub trait ContentGenerator {
    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, OpenAiError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ContentGenerator for OpenAiClient {
    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, OpenAiError> {
        let model = self.config.text_model.as_str();
        let request = ChatRequest {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        info!(model, prompt_len = user_prompt.len(), "requesting chat completion");

        let mut response = self
            .agent
            .post(self.config.endpoint("/chat/completions"))
            .header("Authorization", self.config.bearer())
            .send_json(&request)?;
        check_status(&mut response, MAX_BODY_BYTES)?;

        let parsed: ChatResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| OpenAiError::ResponseParse(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenAiError::ResponseParse("no choices in response".to_string()))?
            .message
            .content
            .ok_or_else(|| OpenAiError::ResponseParse("choice has no text content".to_string()))?;

        info!(model, text_len = text.len(), "chat completion received");

        Ok(text)
    }
}
