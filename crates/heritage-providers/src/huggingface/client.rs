//! Hugging Face hosted-inference adapter.
//!
//! Formats the exchange as a `Human:`/`Assistant:` transcript for a
//! conversational model and extracts the reply after the final
//! `Assistant:` marker.

use std::time::Duration as StdDuration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::types::{InferenceParameters, InferenceRequest, InferenceResponse};
use crate::error::ProviderError;
use crate::types::{ChatMessage, ProviderKind, ProviderStatus, Role};
use crate::ChatProvider;

const INFERENCE_API_BASE: &str = "https://api-inference.huggingface.co/models";
const MODEL: &str = "microsoft/DialoGPT-medium";
const MAX_LENGTH: u32 = 200;
const TEMPERATURE: f32 = 0.7;
const PAD_TOKEN_ID: u32 = 50256;
/// Conversational models degrade with long context; keep the window short.
const HISTORY_WINDOW: usize = 5;
const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(30);

#[derive(Debug)]
pub struct HuggingFaceClient {
    http: Client,
    api_key: Option<String>,
    system_prompt: String,
}

impl HuggingFaceClient {
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

    fn build_transcript(&self, prompt: &str, history: &[ChatMessage]) -> String {
        let recent = &history[history.len().saturating_sub(HISTORY_WINDOW)..];

        let mut lines = Vec::with_capacity(recent.len() + 2);
        for turn in recent {
            let speaker = match turn.role {
                Role::User => "Human",
                Role::Assistant => "Assistant",
            };
            lines.push(format!("{speaker}: {}", turn.content));
        }
        lines.push(format!("Human: {prompt}"));
        lines.push("Assistant:".to_string());

        format!("{}\n\n{}", self.system_prompt, lines.join("\n"))
    }
}

#[async_trait]
impl ChatProvider for HuggingFaceClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::HuggingFace
    }

    fn status(&self) -> ProviderStatus {
        ProviderStatus {
            kind: ProviderKind::HuggingFace,
            available: self.api_key.is_some(),
        }
    }

    #[instrument(name = "hf_client.complete", skip(self, prompt, history))]
    async fn complete(
        &self,
        prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, ProviderError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ProviderError::NotConfigured {
                provider: ProviderKind::HuggingFace,
            });
        };

        let request = InferenceRequest {
            inputs: self.build_transcript(prompt, history),
            parameters: InferenceParameters {
                max_length: MAX_LENGTH,
                temperature: TEMPERATURE,
                do_sample: true,
                pad_token_id: PAD_TOKEN_ID,
            },
        };

        let url = format!("{INFERENCE_API_BASE}/{MODEL}");
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|error| {
                ProviderError::upstream(ProviderKind::HuggingFace, error.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::upstream(
                ProviderKind::HuggingFace,
                format!("HTTP {status}"),
            ));
        }

        let body: InferenceResponse = response.json().await.map_err(|error| {
            ProviderError::upstream(
                ProviderKind::HuggingFace,
                format!("unreadable response: {error}"),
            )
        })?;

        let generated = body.into_generated_text().ok_or_else(|| {
            ProviderError::upstream(ProviderKind::HuggingFace, "no generated text in response")
        })?;

        // The model echoes the transcript; keep only what follows the
        // final Assistant marker.
        let reply = generated
            .rsplit("Assistant:")
            .next()
            .unwrap_or(generated.as_str())
            .trim();
        if reply.is_empty() {
            return Err(ProviderError::upstream(
                ProviderKind::HuggingFace,
                "blank completion",
            ));
        }

        debug!(target: "heritage_providers", chars = reply.len(), "completion received");
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    #[test]
    fn status_tracks_credential_presence() {
        let configured = HuggingFaceClient::new(Some("hf_test".to_string()), "guide");
        assert!(configured.status().available);

        let unconfigured = HuggingFaceClient::new(None, "guide");
        assert!(!unconfigured.status().available);
    }

    #[tokio::test]
    async fn unconfigured_client_fails_without_network() {
        let client = HuggingFaceClient::new(None, "guide");
        let result = client.complete("hello", &[]).await;
        assert!(matches!(
            result,
            Err(ProviderError::NotConfigured {
                provider: ProviderKind::HuggingFace
            })
        ));
    }

    #[test]
    fn transcript_carries_preamble_history_and_prompt() {
        let client = HuggingFaceClient::new(Some("hf_test".to_string()), "be a guide");
        let history = vec![
            ChatMessage::user("what is bihu?"),
            ChatMessage::assistant("a harvest festival of Assam"),
        ];

        let transcript = client.build_transcript("when is it held?", &history);
        assert_eq!(
            transcript,
            "be a guide\n\nHuman: what is bihu?\nAssistant: a harvest festival of Assam\nHuman: when is it held?\nAssistant:"
        );
    }

    #[test]
    fn transcript_keeps_only_recent_turns() {
        let client = HuggingFaceClient::new(Some("hf_test".to_string()), "guide");
        let history: Vec<ChatMessage> = (0..9)
            .map(|i| ChatMessage::user(format!("turn {i}")))
            .collect();

        let transcript = client.build_transcript("latest", &history);
        assert!(!transcript.contains("turn 3"));
        assert!(transcript.contains("turn 4"));
        assert!(transcript.contains("turn 8"));
    }
}
