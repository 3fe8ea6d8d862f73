use std::env;

pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_STT_MODEL: &str = "whisper-large-v3";
pub const DEFAULT_VISION_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// Credentials and model choices for the hosted inference API.
///
/// A missing key is not fatal here: requests made without one fail and the
/// failure is reported through the normal error path.
#[derive(Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub chat_model: String,
    pub stt_model: String,
    pub vision_model: String,
    pub chat_url: Option<String>,
    pub stt_url: Option<String>,
}

impl AiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GROQ_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            chat_model: env::var("GROQ_CHAT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            stt_model: env::var("GROQ_STT_MODEL").unwrap_or_else(|_| DEFAULT_STT_MODEL.to_string()),
            vision_model: env::var("GROQ_VISION_MODEL")
                .unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string()),
            chat_url: env::var("GROQ_CHAT_URL").ok(),
            stt_url: env::var("GROQ_STT_URL").ok(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
