use thiserror::Error;

use crate::types::ProviderKind;

/// Failure modes shared by all provider adapters.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No usable credential is configured for this provider.
    #[error("{} is not configured (no API key present)", .provider.name())]
    NotConfigured { provider: ProviderKind },

    /// The provider's HTTP call failed: transport error, timeout,
    /// non-success status, or an unusable response body.
    #[error("{} request failed: {message}", .provider.name())]
    Upstream {
        provider: ProviderKind,
        message: String,
    },
}

impl ProviderError {
    pub(crate) fn upstream(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn provider(&self) -> ProviderKind {
        match self {
            Self::NotConfigured { provider } | Self::Upstream { provider, .. } => *provider,
        }
    }
}
