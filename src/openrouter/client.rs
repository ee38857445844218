//! Thin HTTP client for OpenRouter chat completions.
//!
//! - `generate` resolves the prompt for a category, posts it to
//!   `/chat/completions`, and returns the trimmed first choice.
//! - Any upstream failure degrades to a canned roast; only a missing API key
//!   is reported as an error.
use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::{AppError, AppResult, UpstreamError};
use crate::openrouter::fallback::fallback_roast;
use crate::openrouter::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::prompt::resolve_prompt;

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const REFERER: &str = "http://localhost:3000";
const TITLE: &str = "AI Roast Generator";

/// Outcome of a generation: either the provider answered, or we fell back.
#[derive(Debug)]
pub enum Generation {
    Live(String),
    Fallback { text: String, reason: UpstreamError },
}

impl Generation {
    pub fn text(&self) -> &str {
        match self {
            Generation::Live(text) => text,
            Generation::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Generation::Live(text) => text,
            Generation::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Generation::Fallback { .. })
    }
}

#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(base_url: String, api_key: Option<String>, timeout: Duration) -> AppResult<Self> {
        let base = base_url.trim_end_matches('/').to_string();
        let client = Client::builder().timeout(timeout).build()?;
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Ok(CompletionClient { client, base_url: base, api_key })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Produce a roast for `name` in the tone of `category`.
    ///
    /// Fails only when no API key is configured. Every upstream problem is
    /// logged and answered with the category's fallback roast.
    pub async fn generate(&self, name: &str, category: &str) -> AppResult<Generation> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;
        let request = ChatCompletionRequest::roast(resolve_prompt(category, name));

        match self.complete(api_key, &request).await {
            Ok(text) => Ok(Generation::Live(text)),
            Err(reason) => {
                tracing::error!("Error calling OpenRouter API: {}", reason);
                Ok(Generation::Fallback { text: fallback_roast(category, name), reason })
            }
        }
    }

    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<String, UpstreamError> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!("Sending chat completion to {}", url);

        let response = self.client.post(&url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", REFERER)
            .header("X-Title", TITLE)
            .json(request)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(UpstreamError::Status { status: status.as_u16(), body });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(UpstreamError::Decode)?;
        let content = completion.first_content().ok_or(UpstreamError::EmptyChoices)?;
        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(url: String, key: Option<&str>) -> CompletionClient {
        CompletionClient::new(url, key.map(String::from), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn success_returns_trimmed_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_header("http-referer", "http://localhost:3000")
            .match_header("x-title", "AI Roast Generator")
            .match_body(Matcher::PartialJson(json!({
                "model": "openai/gpt-4o-mini",
                "max_tokens": 100,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":" Nice roast! 🔥 "}}]}"#)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(server.url(), Some("test-key"));
        let generation = client.generate("Sam", "light").await.unwrap();

        assert!(!generation.is_fallback());
        assert_eq!(generation.text(), "Nice roast! 🔥");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn user_message_carries_resolved_template() {
        let mut server = mockito::Server::new_async().await;
        let expected = resolve_prompt("extra_spicy", "Sam");
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::PartialJson(json!({
                "messages": [
                    {"role": "system", "content": crate::openrouter::types::SYSTEM_PROMPT},
                    {"role": "user", "content": expected},
                ]
            })))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create_async()
            .await;

        let client = client_for(server.url(), Some("k"));
        let generation = client.generate("Sam", "extra_spicy").await.unwrap();
        assert_eq!(generation.text(), "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upstream_500_falls_back_by_category() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = client_for(server.url(), Some("test-key"));
        let generation = client.generate("Sam", "light").await.unwrap();

        assert_eq!(
            generation.text(),
            "Hey Sam, you're like a human participation trophy - everyone gets one! 🏆"
        );
        match generation {
            Generation::Fallback { reason: UpstreamError::Status { status, body }, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status fallback, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_200_success_codes_also_fall_back() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(201)
            .with_body(r#"{"choices":[{"message":{"content":"ignored"}}]}"#)
            .create_async()
            .await;

        let client = client_for(server.url(), Some("k"));
        let generation = client.generate("Sam", "medium").await.unwrap();
        assert!(generation.is_fallback());
        assert_eq!(generation.text(), "Sam, you're so unique, just like everyone else! ✨");
    }

    #[tokio::test]
    async fn malformed_body_falls_back() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = client_for(server.url(), Some("k"));
        let generation = client.generate("Sam", "extra_spicy").await.unwrap();
        assert!(matches!(generation, Generation::Fallback { reason: UpstreamError::Decode(_), .. }));
        assert_eq!(generation.text(), "Sam, I'd roast you harder, but my mom said not to burn trash! 🔥");
    }

    #[tokio::test]
    async fn empty_choices_fall_back_to_medium_for_unknown_category() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = client_for(server.url(), Some("k"));
        let generation = client.generate("Sam", "unknown_tag").await.unwrap();
        assert!(matches!(generation, Generation::Fallback { reason: UpstreamError::EmptyChoices, .. }));
        assert_eq!(generation.text(), "Sam, you're so unique, just like everyone else! ✨");
    }

    #[tokio::test]
    async fn unreachable_provider_falls_back() {
        let client = client_for("http://127.0.0.1:1".to_string(), Some("k"));
        let generation = client.generate("Sam", "light").await.unwrap();
        assert!(matches!(generation, Generation::Fallback { reason: UpstreamError::Transport(_), .. }));
    }

    #[tokio::test]
    async fn silent_provider_times_out_into_fallback() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold connections without ever answering.
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            loop {
                let (socket, _) = listener.accept().await.unwrap();
                held.push(socket);
            }
        });

        let client = CompletionClient::new(format!("http://{}", addr), Some("k".to_string()), Duration::from_secs(1))
            .unwrap();
        let started = std::time::Instant::now();
        let generation = client.generate("Sam", "light").await.unwrap();
        let elapsed = started.elapsed();

        assert!(elapsed < Duration::from_secs(3), "took {:?}", elapsed);
        match &generation {
            Generation::Fallback { reason: UpstreamError::Transport(e), .. } => assert!(e.is_timeout()),
            other => panic!("expected timeout fallback, got {:?}", other),
        }
        assert_eq!(
            generation.text(),
            "Hey Sam, you're like a human participation trophy - everyone gets one! 🏆"
        );
        server.abort();
    }

    #[tokio::test]
    async fn missing_key_fails_without_calling_provider() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/chat/completions").expect(0).create_async().await;

        let client = client_for(server.url(), None);
        assert!(!client.has_api_key());
        let err = client.generate("Sam", "light").await.unwrap_err();
        assert!(matches!(err, AppError::MissingApiKey));

        let blank = client_for(server.url(), Some("   "));
        assert!(matches!(blank.generate("Sam", "light").await, Err(AppError::MissingApiKey)));
        mock.assert_async().await;
    }
}
