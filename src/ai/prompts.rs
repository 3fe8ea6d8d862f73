//! Prompt text sent to the hosted models.
//!
//! Centralizing these strings makes it easy to tweak how symptoms and photos
//! are interpreted without digging through multiple modules.

use std::fmt;

/// Persona and rules placed at the top of every advice prompt.
pub const ADVICE_PREAMBLE: &str = "You are a careful health assistant supporting patients in rural and remote areas where clinics and pharmacies may be far away.\n\
Follow these rules:\n\
- Suggest the most likely condition cautiously (for example \"this may be...\").\n\
- Give safe home-care steps and over-the-counter options where appropriate.\n\
- Never give a definitive diagnosis.\n\
- End with a reminder to seek care from a qualified health professional.";

/// System prompt for describing a photo of an affected area.
pub const VISION_SYSTEM_PROMPT: &str = "You are a helpful medical assistant. Analyze visual input and provide an objective medical description of what you see. Do not speculate.";

/// Instruction sent alongside the photo itself.
pub const VISION_USER_PROMPT: &str = "Please analyze this medical image and describe any visible abnormalities, conditions, symptoms, or visual cues relevant for medical diagnosis. Keep the response factual and concise.";

/// The complete instruction text for one advice request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvicePrompt(String);

impl AdvicePrompt {
    /// Preamble, then the reference cases (when any), then the patient's words.
    pub fn build(examples: &str, patient_input: &str) -> Self {
        let mut text = String::from(ADVICE_PREAMBLE);
        if !examples.trim().is_empty() {
            text.push_str("\n\nHere are some similar reference cases:\n\n");
            text.push_str(examples);
        }
        text.push_str("\n\nPatient: \"");
        text.push_str(patient_input);
        text.push_str("\"\nAdvice:");
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AdvicePrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
