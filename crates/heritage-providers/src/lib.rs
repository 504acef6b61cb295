//! Adapters for external AI text-generation providers.
//!
//! Each provider speaks its own wire protocol but exposes the same
//! completion contract through [`ChatProvider`], so the resolution
//! pipeline can walk an ordered list of them without caring which
//! service ultimately answers.

pub mod credentials;
pub mod error;
pub mod huggingface;
pub mod openai;
pub mod types;

use async_trait::async_trait;

pub use credentials::ProviderCredentials;
pub use error::ProviderError;
pub use huggingface::HuggingFaceClient;
pub use openai::OpenAiClient;
pub use types::{ChatMessage, ProviderKind, ProviderStatus, Role};

/// Uniform completion contract implemented by every provider adapter.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Whether a usable credential is present. Derived from configuration
    /// on every call rather than cached.
    fn status(&self) -> ProviderStatus;

    /// Produce generated text for `prompt`, forwarding a bounded window of
    /// `history` ahead of it. Never hangs: the underlying HTTP client
    /// enforces a request timeout and reports it as an upstream failure.
    async fn complete(
        &self,
        prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, ProviderError>;
}
