use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::advice::{AdviceGenerator, AdviceResponse};
use crate::ai::chat::ChatClient;
use crate::ai::config::AiConfig;
use crate::ai::stt::transcribe_audio;
use crate::ai::vision::{analyze_image, ImageAnalysis};
use crate::config::Config;
use crate::grounding::{GroundingSource, GroundingStore, UnknownSourceError};

/// What came of a recorded voice message.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceOutcome {
    Advised {
        transcript: String,
        advice: AdviceResponse,
    },
    /// The transcription succeeded but contained no words.
    NothingRecognized,
    TranscriptionFailed { error: String },
}

/// Front door for typed, spoken and photographed symptoms.
pub struct HealthAssistant {
    ai: AiConfig,
    generator: AdviceGenerator<ChatClient>,
}

impl HealthAssistant {
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(GroundingStore::new(config.data_dir.clone()));
        Self::with_store(config.ai.clone(), store)
    }

    pub fn with_store(ai: AiConfig, store: Arc<GroundingStore>) -> Self {
        let generator = AdviceGenerator::new(store, ChatClient::from_config(&ai));
        Self { ai, generator }
    }

    pub fn generator(&self) -> &AdviceGenerator<ChatClient> {
        &self.generator
    }

    pub async fn advise_text(
        &self,
        symptoms: &str,
        dataset: &str,
    ) -> Result<AdviceResponse, UnknownSourceError> {
        self.generator.generate(symptoms, dataset).await
    }

    /// Transcribe `audio` and, when it contains speech, advise on it.
    #[instrument(level = "debug", skip(self, audio), fields(size = audio.len()))]
    pub async fn advise_voice(
        &self,
        audio: &[u8],
        dataset: &str,
    ) -> Result<VoiceOutcome, UnknownSourceError> {
        let source: GroundingSource = dataset.parse()?;

        let Some(api_key) = self.ai.api_key.as_deref() else {
            return Ok(VoiceOutcome::TranscriptionFailed {
                error: "GROQ_API_KEY is not configured".to_string(),
            });
        };

        let transcript = match transcribe_audio(
            api_key,
            &self.ai.stt_model,
            audio,
            self.ai.stt_url.as_deref(),
        )
        .await
        {
            Ok(text) => text.trim().to_string(),
            Err(err) => {
                warn!(error = %err, "transcription failed");
                return Ok(VoiceOutcome::TranscriptionFailed {
                    error: format!("{err:#}"),
                });
            }
        };

        if transcript.is_empty() {
            info!("transcription contained no speech");
            return Ok(VoiceOutcome::NothingRecognized);
        }

        let advice = self.generator.generate_for(&transcript, source).await;
        Ok(VoiceOutcome::Advised { transcript, advice })
    }

    /// Describe a photo of the affected area.
    pub async fn analyze_image(&self, image: &[u8]) -> ImageAnalysis {
        let url = self.ai.chat_url.as_deref();
        analyze_image(self.ai.api_key.as_deref(), &self.ai.vision_model, image, url).await
    }
}
