//! Typed request/response schema for the `/chat/completions` endpoint.
use serde::{Deserialize, Serialize};

pub const MODEL: &str = "openai/gpt-4o-mini";
pub const SYSTEM_PROMPT: &str =
    "You are a witty roast generator. Keep responses short, funny, and creative. Always include emojis.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage { role: Role::User, content: content.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl ChatCompletionRequest {
    /// Fixed generation parameters for a roast, with `prompt` as the user turn.
    pub fn roast(prompt: String) -> Self {
        ChatCompletionRequest {
            model: MODEL.to_string(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            max_tokens: 100,
            temperature: 0.9,
            top_p: 1.0,
            frequency_penalty: 0.5,
            presence_penalty: 0.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if the provider sent one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roast_request_serializes_expected_shape() {
        let req = ChatCompletionRequest::roast("roast Sam".to_string());
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["model"], "openai/gpt-4o-mini");
        assert_eq!(v["messages"][0], json!({"role": "system", "content": SYSTEM_PROMPT}));
        assert_eq!(v["messages"][1], json!({"role": "user", "content": "roast Sam"}));
        assert_eq!(v["max_tokens"], 100);
        assert_eq!(v["temperature"], 0.9);
        assert_eq!(v["top_p"], 1.0);
        assert_eq!(v["frequency_penalty"], 0.5);
        assert_eq!(v["presence_penalty"], 0.5);
    }

    #[test]
    fn first_content_handles_missing_parts() {
        let full: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"hi"}},{"message":{"content":"no"}}]}"#)
                .unwrap();
        assert_eq!(full.first_content(), Some("hi"));

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(empty.first_content(), None);

        let absent: ChatCompletionResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(absent.first_content(), None);

        let null_content: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(null_content.first_content(), None);
    }
}
