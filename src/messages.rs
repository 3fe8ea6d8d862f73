//! User-facing text.
//!
//! Keep all strings shown to patients in this module so they stay in one place
//! and are easy to update or translate.

/// Prefix marking advice text that reports a failure instead of advice.
pub const WARNING_MARKER: &str = "⚠️";

pub const EMPTY_INPUT: &str = "Please describe your symptoms.";
pub const NOTHING_TRANSCRIBED: &str = "No speech was recognized in the recording.";
pub const OFFLINE_HINT_HEADER: &str = "Offline hint:";

pub fn advice_failed(error: &anyhow::Error) -> String {
    format!("{WARNING_MARKER} Error: {error:#}")
}

pub fn transcription_failed(error: &str) -> String {
    format!("{WARNING_MARKER} Transcription failed: {error}")
}

pub fn image_failed(error: &str) -> String {
    format!("{WARNING_MARKER} Image analysis failed: {error}")
}

pub fn transcript_line(text: &str) -> String {
    format!("You said: {text}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn failure_text_starts_with_marker_and_keeps_context() {
        let err = anyhow!("connection refused").context("chat request failed");
        let text = advice_failed(&err);
        assert!(text.starts_with(WARNING_MARKER));
        assert!(text.contains("chat request failed: connection refused"));
    }
}
