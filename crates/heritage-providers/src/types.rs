use serde::{Deserialize, Serialize};

/// Identifies one external text-generation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    OpenAi,
    HuggingFace,
}

impl ProviderKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::HuggingFace => "Hugging Face",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI chat completions",
            Self::HuggingFace => "Hugging Face hosted inference",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One turn of a conversation. History is owned by the caller for the
/// duration of an exchange; adapters read it and truncate to their own
/// window before sending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub(crate) fn wire_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// Snapshot of whether a provider holds a usable credential.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProviderStatus {
    pub kind: ProviderKind,
    pub available: bool,
}
