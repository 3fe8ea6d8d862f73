#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use healthbot::ai::config::AiConfig;
use healthbot::{GroundingSource, GroundingStore, HealthAssistant};
use tempfile::TempDir;

pub const USMLE_CSV: &str = "\
question,answer_words,options,correct_answer
fever and headache,rest and fluids,\"{'A': 'Rest', 'B': 'Surgery'}\",A
chest pain,seek er,,
,orphan answer,,
missing answer,,,
persistent dry cough,honey and warm fluids,not a mapping,B
";

pub const AFRI_CSV: &str = "\
question_clean,answer_rationale,extra
I have a cough and fever,Could be malaria or flu; get tested.,x
child with diarrhoea,Give oral rehydration salts.,y
no rationale here,,z
";

pub fn write_dataset(dir: &Path, source: GroundingSource, contents: &str) {
    std::fs::write(dir.join(source.file_name()), contents).unwrap();
}

/// A temporary data directory holding both datasets.
pub fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), GroundingSource::Usmle, USMLE_CSV);
    write_dataset(dir.path(), GroundingSource::Afri, AFRI_CSV);
    dir
}

pub fn store(dir: &TempDir) -> Arc<GroundingStore> {
    Arc::new(GroundingStore::new(dir.path()))
}

pub fn ai_config(api_key: Option<&str>, base_url: &str) -> AiConfig {
    AiConfig {
        api_key: api_key.map(str::to_string),
        chat_model: "test-chat".to_string(),
        stt_model: "test-stt".to_string(),
        vision_model: "test-vision".to_string(),
        chat_url: Some(format!("{base_url}/openai/v1/chat/completions")),
        stt_url: Some(format!("{base_url}/openai/v1/audio/transcriptions")),
    }
}

pub fn chat_body(content: &str) -> String {
    serde_json::json!({ "choices": [ { "message": { "content": content } } ] }).to_string()
}

pub fn assistant(dir: &TempDir, api_key: Option<&str>, base_url: &str) -> HealthAssistant {
    HealthAssistant::with_store(ai_config(api_key, base_url), store(dir))
}
