use anyhow::Result;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, instrument, trace};

use crate::ai::common::{send_api_request, GROQ_STT_URL};

#[derive(Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

#[instrument(level = "trace", skip(api_key, bytes))]
async fn transcribe_audio_inner(
    api_key: &str,
    model: &str,
    bytes: &[u8],
    url: &str,
) -> Result<String> {
    let part = Part::bytes(bytes.to_vec()).file_name("recording.wav");
    let form = Form::new()
        .part("file", part)
        .text("model", model.to_string());

    debug!(model, url, size = bytes.len(), "sending transcription request");

    let client = reqwest::Client::new();
    let builder = client.post(url).multipart(form);
    let resp = send_api_request(api_key, builder).await?;

    let raw = resp.text().await?;
    let snippet: String = raw.chars().take(200).collect();
    debug!(snippet = %snippet, "transcription response body");
    let data: TranscriptionResponse = serde_json::from_str(&raw)?;
    trace!(transcription = %data.text, "transcription successful");
    Ok(data.text)
}

/// Transcribe a recorded clip with a Whisper model.
///
/// Returns the `text` field of the response, which may be empty when nothing
/// was recognized.
#[instrument(level = "trace", skip(api_key, bytes))]
pub async fn transcribe_audio(
    api_key: &str,
    model: &str,
    bytes: &[u8],
    url: Option<&str>,
) -> Result<String> {
    let url = url.unwrap_or(GROQ_STT_URL);
    transcribe_audio_inner(api_key, model, bytes, url).await
}
