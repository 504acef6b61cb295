//! OpenAI chat adapter.
//!
//! Sends the instructional preamble, a bounded window of conversation
//! history, and the user's prompt to the chat completions endpoint.

use std::time::Duration as StdDuration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, WireMessage};
use crate::error::ProviderError;
use crate::types::{ChatMessage, ProviderKind, ProviderStatus};
use crate::ChatProvider;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4.1-mini";
const MAX_OUTPUT_TOKENS: u32 = 500;
/// Most recent turns forwarded with each request, to bound payload size.
const HISTORY_WINDOW: usize = 10;
const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(30);

#[derive(Debug)]
pub struct OpenAiClient {
    http: Client,
    api_key: Option<String>,
    system_prompt: String,
}

impl OpenAiClient {
    #[must_use]
    pub fn new(api_key: Option<String>, system_prompt: impl Into<String>) -> Self {
        let http = Client::builder()
            .user_agent("CulturalWonders/1.0")
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .build()
            .expect("failed to build reqwest client");

        Self {
            http,
            api_key,
            system_prompt: system_prompt.into(),
        }
    }

    fn build_messages(&self, prompt: &str, history: &[ChatMessage]) -> Vec<WireMessage> {
        let recent = &history[history.len().saturating_sub(HISTORY_WINDOW)..];

        let mut messages = Vec::with_capacity(recent.len() + 2);
        messages.push(WireMessage {
            role: "system",
            content: self.system_prompt.clone(),
        });
        for turn in recent {
            messages.push(WireMessage {
                role: turn.role.wire_name(),
                content: turn.content.clone(),
            });
        }
        messages.push(WireMessage {
            role: "user",
            content: prompt.to_string(),
        });
        messages
    }
}

#[async_trait]
impl ChatProvider for OpenAiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn status(&self) -> ProviderStatus {
        ProviderStatus {
            kind: ProviderKind::OpenAi,
            available: self.api_key.is_some(),
        }
    }

    #[instrument(name = "openai_client.complete", skip(self, prompt, history))]
    async fn complete(
        &self,
        prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, ProviderError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ProviderError::NotConfigured {
                provider: ProviderKind::OpenAi,
            });
        };

        let request = ChatCompletionRequest {
            model: MODEL,
            messages: self.build_messages(prompt, history),
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let response = self
            .http
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|error| ProviderError::upstream(ProviderKind::OpenAi, error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::upstream(
                ProviderKind::OpenAi,
                format!("HTTP {status}"),
            ));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|error| {
            ProviderError::upstream(ProviderKind::OpenAi, format!("unreadable response: {error}"))
        })?;

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return Err(ProviderError::upstream(
                ProviderKind::OpenAi,
                "blank completion",
            ));
        }

        debug!(target: "heritage_providers", chars = text.len(), "completion received");
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    fn history_of(len: usize) -> Vec<ChatMessage> {
        (0..len)
            .map(|i| {
                if i % 2 == 0 {
                    ChatMessage::user(format!("question {i}"))
                } else {
                    ChatMessage::assistant(format!("answer {i}"))
                }
            })
            .collect()
    }

    #[test]
    fn status_tracks_credential_presence() {
        let configured = OpenAiClient::new(Some("sk-test".to_string()), "guide");
        assert!(configured.status().available);

        let unconfigured = OpenAiClient::new(None, "guide");
        assert!(!unconfigured.status().available);
    }

    #[tokio::test]
    async fn unconfigured_client_fails_without_network() {
        let client = OpenAiClient::new(None, "guide");
        let result = client.complete("hello", &[]).await;
        assert!(matches!(
            result,
            Err(ProviderError::NotConfigured {
                provider: ProviderKind::OpenAi
            })
        ));
    }

    #[test]
    fn messages_start_with_system_and_end_with_prompt() {
        let client = OpenAiClient::new(Some("sk-test".to_string()), "be helpful");
        let messages = client.build_messages("what is holi?", &history_of(3));

        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, "be helpful");
        assert_eq!(messages.last().map(|m| m.role), Some("user"));
        assert_eq!(
            messages.last().map(|m| m.content.as_str()),
            Some("what is holi?")
        );
        assert_eq!(messages.len(), 5);
    }

    #[test]
    fn history_is_truncated_to_most_recent_window() {
        let client = OpenAiClient::new(Some("sk-test".to_string()), "guide");
        let messages = client.build_messages("latest", &history_of(25));

        // system + 10 retained turns + prompt
        assert_eq!(messages.len(), 12);
        // the retained window is the tail of the history
        assert_eq!(messages[1].content, "question 15");
    }
}
