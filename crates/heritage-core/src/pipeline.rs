//! Ordered fallback resolution for free-text questions.
//!
//! Stage order is fixed: curated dataset, geographic index, then each
//! provider in turn, then a static guidance message. Free local sources
//! always run to completion before any paid network call, and every
//! provider failure is absorbed here rather than surfaced to callers.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use heritage_providers::{
    ChatMessage, ChatProvider, HuggingFaceClient, OpenAiClient, ProviderCredentials, ProviderKind,
    ProviderStatus,
};

use crate::prompts;
use crate::services::{knowledge, regions};

/// Returned when no stage could produce an answer. Configuration
/// guidance rather than an error: the pipeline always answers.
pub const FALLBACK_GUIDANCE: &str = "AI providers are not configured, and no curated answer matched your question.\n\nAdd an API key to the environment and restart:\n\n  OPENAI_API_KEY=sk-...\n  (or HUGGINGFACE_API_KEY=hf_...)\n\nMeanwhile, try asking:\n\"Tell me about Kathakali\" or \"Famous monuments of India\"";

/// The stage at which a query terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Dataset,
    Region,
    Provider(ProviderKind),
    Fallback,
}

impl Stage {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dataset => "dataset",
            Self::Region => "region",
            Self::Provider(ProviderKind::OpenAi) => "provider:openai",
            Self::Provider(ProviderKind::HuggingFace) => "provider:huggingface",
            Self::Fallback => "fallback",
        }
    }
}

/// One resolved exchange: the answer text and where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub answer: String,
    pub stage: Stage,
}

/// One entry in the bounded resolution log.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionEntry {
    pub stage: Stage,
    pub latency_ms: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Per-provider availability plus the provider that would answer first.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub providers: Vec<ProviderStatus>,
    pub primary: Option<ProviderKind>,
}

pub struct Resolver {
    providers: Vec<Arc<dyn ChatProvider>>,
    resolution_log: Mutex<Vec<ResolutionEntry>>,
}

impl Resolver {
    /// Build the default provider chain from injected credentials:
    /// OpenAI first, Hugging Face second.
    #[must_use]
    pub fn new(credentials: ProviderCredentials) -> Self {
        let providers: Vec<Arc<dyn ChatProvider>> = vec![
            Arc::new(OpenAiClient::new(
                credentials.openai_api_key,
                prompts::GUIDE_PREAMBLE,
            )),
            Arc::new(HuggingFaceClient::new(
                credentials.huggingface_api_key,
                prompts::GUIDE_PREAMBLE,
            )),
        ];
        Self::with_providers(providers)
    }

    /// Build a resolver over an explicit provider chain, tried in order.
    #[must_use]
    pub fn with_providers(providers: Vec<Arc<dyn ChatProvider>>) -> Self {
        Self {
            providers,
            resolution_log: Mutex::new(Vec::new()),
        }
    }

    /// Resolve a message to an answer string.
    pub async fn answer(&self, message: &str, history: &[ChatMessage]) -> String {
        self.resolve(message, history).await.answer
    }

    /// Resolve a message, reporting the terminal stage alongside the
    /// answer. Never fails and never returns an empty answer.
    pub async fn resolve(&self, message: &str, history: &[ChatMessage]) -> Resolution {
        let started = Instant::now();
        let resolution = self.resolve_inner(message, history).await;
        self.record(resolution.stage, started.elapsed().as_millis() as u64)
            .await;
        resolution
    }

    async fn resolve_inner(&self, message: &str, history: &[ChatMessage]) -> Resolution {
        if let Some(fact) = knowledge::find_fact(message) {
            debug!(
                target: "heritage_core",
                question = fact.question,
                "answered from curated dataset"
            );
            return Resolution {
                answer: fact.answer.to_string(),
                stage: Stage::Dataset,
            };
        }

        if let Some(region) = regions::match_region(message) {
            debug!(target: "heritage_core", region = region.name, "answered from geographic index");
            return Resolution {
                answer: format!(
                    "Here's some information about {}:\n{}",
                    region.name, region.intro
                ),
                stage: Stage::Region,
            };
        }

        for provider in &self.providers {
            let status = provider.status();
            if !status.available {
                debug!(
                    target: "heritage_core",
                    provider = %status.kind,
                    "skipping unconfigured provider"
                );
                continue;
            }

            info!(target: "heritage_core", provider = %status.kind, "forwarding query to provider");
            match provider.complete(message, history).await {
                Ok(text) => {
                    return Resolution {
                        answer: text,
                        stage: Stage::Provider(status.kind),
                    };
                }
                Err(error) => {
                    warn!(
                        target: "heritage_core",
                        provider = %status.kind,
                        error = %error,
                        "provider failed, falling through"
                    );
                }
            }
        }

        Resolution {
            answer: FALLBACK_GUIDANCE.to_string(),
            stage: Stage::Fallback,
        }
    }

    async fn record(&self, stage: Stage, latency_ms: u64) {
        let mut guard = self.resolution_log.lock().await;
        guard.push(ResolutionEntry {
            stage,
            latency_ms,
            timestamp: OffsetDateTime::now_utc(),
        });
        const MAX_ENTRIES: usize = 200;
        if guard.len() > MAX_ENTRIES {
            let overflow = guard.len() - MAX_ENTRIES;
            guard.drain(0..overflow);
        }
    }

    /// Most recent resolution outcomes, oldest first.
    pub async fn telemetry_snapshot(&self) -> Vec<ResolutionEntry> {
        self.resolution_log.lock().await.clone()
    }

    /// Availability of each provider in chain order, plus the first
    /// available one. Derived fresh on every call.
    #[must_use]
    pub fn service_status(&self) -> ServiceStatus {
        let providers: Vec<ProviderStatus> = self
            .providers
            .iter()
            .map(|provider| provider.status())
            .collect();
        let primary = providers
            .iter()
            .find(|status| status.available)
            .map(|status| status.kind);
        ServiceStatus { providers, primary }
    }

    /// Quiz assistance: hint at the answer without revealing it.
    pub async fn quiz_hint(&self, question: &str, options: &[String]) -> String {
        self.answer(&prompts::quiz_hint(question, options), &[]).await
    }

    /// A short cultural story about a topic.
    pub async fn cultural_story(&self, topic: &str, context: &str) -> String {
        self.answer(&prompts::cultural_story(topic, context), &[]).await
    }

    /// A day-wise travel plan for a state.
    pub async fn travel_itinerary(&self, state: &str, duration_days: u32) -> String {
        self.answer(&prompts::travel_itinerary(state, duration_days), &[])
            .await
    }

    /// A tradition described as it was two centuries ago.
    pub async fn historical_perspective(&self, tradition: &str, context: &str) -> String {
        self.answer(&prompts::historical_perspective(tradition, context), &[])
            .await
    }

    /// Free-text cultural search suggestions.
    pub async fn cultural_search(&self, query: &str) -> String {
        self.answer(&prompts::cultural_search(query), &[]).await
    }
}
