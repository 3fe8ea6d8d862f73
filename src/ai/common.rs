use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace, warn};

pub const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const GROQ_STT_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Chat completion body carrying a single user message.
pub fn build_user_chat_body(
    model: &str,
    prompt: &str,
    temperature: f32,
    max_tokens: u32,
) -> Value {
    serde_json::json!({
        "model": model,
        "messages": [
            { "role": "user", "content": prompt },
        ],
        "temperature": temperature,
        "max_tokens": max_tokens,
        "n": 1,
    })
}

/// Attach the bearer token, send, and turn non-success statuses into errors.
pub async fn send_api_request(
    api_key: &str,
    builder: reqwest::RequestBuilder,
) -> Result<reqwest::Response> {
    let resp = builder.bearer_auth(api_key).send().await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "completion API error");
        return Err(anyhow!("API error {status}: {err_text}"));
    }

    Ok(resp)
}

/// Extract the trimmed content of the first choice from a chat response body.
pub fn parse_chat_content(raw: &str) -> Result<String> {
    let chat: ChatResponse = serde_json::from_str(raw)?;
    let content = chat
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("missing chat choice"))?
        .message
        .content
        .unwrap_or_default()
        .trim()
        .to_string();
    Ok(content)
}

/// POST a chat completion body and return the first choice's content.
pub async fn request_chat_content(
    client: &reqwest::Client,
    api_key: &str,
    body: &Value,
    url: &str,
) -> Result<String> {
    debug!(url, "sending chat completion request");

    let builder = client.post(url).json(body);
    let resp = send_api_request(api_key, builder).await?;

    let raw = resp.text().await?;
    let snippet: String = raw.chars().take(200).collect();
    debug!(snippet = %snippet, "chat response body");
    trace!(raw = %raw, "chat response");
    parse_chat_content(&raw)
}
