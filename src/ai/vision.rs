use std::time::Duration;

use anyhow::Result;
use base64::Engine as _;
use serde::Serialize;
use tracing::{instrument, warn};

use crate::ai::common::{request_chat_content, GROQ_CHAT_URL};
use crate::ai::prompts::{VISION_SYSTEM_PROMPT, VISION_USER_PROMPT};

pub const VISION_SOURCE: &str = "llama-vision";
const VISION_TIMEOUT: Duration = Duration::from_secs(20);
const VISION_MAX_TOKENS: u32 = 512;
const VISION_TEMPERATURE: f32 = 0.3;

/// Result of describing a photo of an affected area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageAnalysis {
    /// The model's description, ready to be used as symptom text.
    Described { source: String, query: String },
    Failed { error: String },
}

impl ImageAnalysis {
    /// The description, when the model produced one.
    pub fn query(&self) -> Option<&str> {
        match self {
            ImageAnalysis::Described { query, .. } => Some(query),
            ImageAnalysis::Failed { .. } => None,
        }
    }
}

#[instrument(level = "trace", skip(api_key, bytes))]
pub async fn describe_image(
    api_key: &str,
    model: &str,
    bytes: &[u8],
    url: Option<&str>,
) -> Result<String> {
    let url = url.unwrap_or(GROQ_CHAT_URL);
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    let data_url = format!("data:image/jpeg;base64,{}", encoded);
    let body = serde_json::json!({
        "model": model,
        "messages": [
            { "role": "system", "content": VISION_SYSTEM_PROMPT },
            {
                "role": "user",
                "content": [
                    { "type": "text", "text": VISION_USER_PROMPT },
                    { "type": "image_url", "image_url": { "url": data_url } },
                ],
            }
        ],
        "max_tokens": VISION_MAX_TOKENS,
        "temperature": VISION_TEMPERATURE,
    });

    let client = reqwest::Client::builder().timeout(VISION_TIMEOUT).build()?;
    request_chat_content(&client, api_key, &body, url).await
}

/// Describe a photo, folding any failure into [`ImageAnalysis::Failed`].
pub async fn analyze_image(
    api_key: Option<&str>,
    model: &str,
    bytes: &[u8],
    url: Option<&str>,
) -> ImageAnalysis {
    let Some(api_key) = api_key else {
        return ImageAnalysis::Failed {
            error: "GROQ_API_KEY is not configured".to_string(),
        };
    };
    match describe_image(api_key, model, bytes, url).await {
        Ok(query) => ImageAnalysis::Described {
            source: VISION_SOURCE.to_string(),
            query,
        },
        Err(err) => {
            warn!(error = %err, "vision request failed");
            ImageAnalysis::Failed {
                error: format!("{err:#}"),
            }
        }
    }
}
