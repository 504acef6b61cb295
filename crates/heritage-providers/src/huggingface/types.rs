use serde::{Deserialize, Serialize};

/// Request body for the hosted inference endpoint.
#[derive(Debug, Serialize)]
pub struct InferenceRequest {
    pub inputs: String,
    pub parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
pub struct InferenceParameters {
    pub max_length: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub pad_token_id: u32,
}

/// The inference API answers with either a bare generation object or a
/// one-element batch, depending on the model wrapper.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InferenceResponse {
    Batch(Vec<Generation>),
    Single(Generation),
}

#[derive(Debug, Deserialize)]
pub struct Generation {
    #[serde(default)]
    pub generated_text: Option<String>,
}

impl InferenceResponse {
    #[must_use]
    pub fn into_generated_text(self) -> Option<String> {
        match self {
            Self::Single(generation) => generation.generated_text,
            Self::Batch(generations) => generations
                .into_iter()
                .find_map(|generation| generation.generated_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_response_yields_first_generation() {
        let raw = r#"[{"generated_text": "Assistant: hello"}]"#;
        let parsed: InferenceResponse = serde_json::from_str(raw).expect("valid batch body");
        assert_eq!(
            parsed.into_generated_text().as_deref(),
            Some("Assistant: hello")
        );
    }

    #[test]
    fn single_object_response_is_accepted() {
        let raw = r#"{"generated_text": "Assistant: hi"}"#;
        let parsed: InferenceResponse = serde_json::from_str(raw).expect("valid single body");
        assert_eq!(parsed.into_generated_text().as_deref(), Some("Assistant: hi"));
    }

    #[test]
    fn missing_text_yields_none() {
        let raw = r#"[{"score": 0.2}]"#;
        let parsed: InferenceResponse = serde_json::from_str(raw).expect("valid body");
        assert!(parsed.into_generated_text().is_none());
    }
}
