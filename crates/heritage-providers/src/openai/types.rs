use serde::{Deserialize, Serialize};

/// Request body for the chat completions endpoint.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: &'static str,
    pub messages: Vec<WireMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_first_choice() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Namaste!"}}
            ]
        }"#;
        let parsed: ChatCompletionResponse =
            serde_json::from_str(raw).expect("valid response body");
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Namaste!")
        );
    }

    #[test]
    fn missing_content_is_none() {
        let raw = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let parsed: ChatCompletionResponse =
            serde_json::from_str(raw).expect("valid response body");
        assert!(parsed.choices[0].message.content.is_none());
    }
}
