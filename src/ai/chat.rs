use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::instrument;

use crate::ai::common::{build_user_chat_body, request_chat_content, GROQ_CHAT_URL};
use crate::ai::config::AiConfig;

pub const ADVICE_TEMPERATURE: f32 = 0.7;
pub const ADVICE_MAX_TOKENS: u32 = 512;

/// Something that turns a prompt into generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// OpenAI-compatible chat completion client.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    url: String,
    temperature: f32,
    max_tokens: u32,
}

impl ChatClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>, url: Option<&str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: model.into(),
            url: url.unwrap_or(GROQ_CHAT_URL).to_string(),
            temperature: ADVICE_TEMPERATURE,
            max_tokens: ADVICE_MAX_TOKENS,
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.chat_model.clone(),
            config.chat_url.as_deref(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for ChatClient {
    #[instrument(level = "trace", skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GROQ_API_KEY is not configured"))?;
        let body = build_user_chat_body(&self.model, prompt, self.temperature, self.max_tokens);
        let content = request_chat_content(&self.http, api_key, &body, &self.url).await?;
        if content.is_empty() {
            return Err(anyhow!("completion returned no text"));
        }
        Ok(content)
    }
}
