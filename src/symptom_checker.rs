//! Keyword heuristic that works without network access.

pub const FLU_HINT: &str =
    "Possible condition: Flu or COVID-19. Please consult a healthcare professional.";
pub const HEADACHE_HINT: &str = "Possible condition: Migraine or tension headache.";
pub const UNKNOWN_HINT: &str =
    "Unable to determine condition. Please provide more details or consult a doctor.";

/// A coarse hint derived from keywords in the symptom description.
pub fn quick_assessment(symptoms: &str) -> &'static str {
    let symptoms = symptoms.to_lowercase();
    if symptoms.contains("fever") && symptoms.contains("cough") {
        FLU_HINT
    } else if symptoms.contains("headache") {
        HEADACHE_HINT
    } else {
        UNKNOWN_HINT
    }
}
