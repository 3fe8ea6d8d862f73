use healthbot::ai::config::{AiConfig, DEFAULT_CHAT_MODEL, DEFAULT_STT_MODEL, DEFAULT_VISION_MODEL};
use healthbot::Config;
use serial_test::serial;

const VARS: [&str; 8] = [
    "GROQ_API_KEY",
    "GROQ_CHAT_MODEL",
    "GROQ_STT_MODEL",
    "GROQ_VISION_MODEL",
    "GROQ_CHAT_URL",
    "GROQ_STT_URL",
    "GROUNDING_DATA_DIR",
    "GROUNDING_DATASET",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn ai_config_from_env_missing_key() {
    clear_env();
    let cfg = AiConfig::from_env();
    assert!(cfg.api_key.is_none());
    assert!(!cfg.has_api_key());
}

#[test]
#[serial]
fn ai_config_blank_key_counts_as_missing() {
    clear_env();
    std::env::set_var("GROQ_API_KEY", "  ");
    assert!(AiConfig::from_env().api_key.is_none());
    clear_env();
}

#[test]
#[serial]
fn ai_config_from_env_defaults() {
    clear_env();
    std::env::set_var("GROQ_API_KEY", "k");
    let cfg = AiConfig::from_env();
    assert_eq!(cfg.api_key.as_deref(), Some("k"));
    assert_eq!(cfg.chat_model, DEFAULT_CHAT_MODEL);
    assert_eq!(cfg.stt_model, DEFAULT_STT_MODEL);
    assert_eq!(cfg.vision_model, DEFAULT_VISION_MODEL);
    assert!(cfg.chat_url.is_none());
    assert!(cfg.stt_url.is_none());
    clear_env();
}

#[test]
#[serial]
fn ai_config_from_env_custom_models() {
    clear_env();
    std::env::set_var("GROQ_CHAT_MODEL", "c");
    std::env::set_var("GROQ_STT_MODEL", "s");
    std::env::set_var("GROQ_VISION_MODEL", "v");
    std::env::set_var("GROQ_CHAT_URL", "http://localhost/chat");
    let cfg = AiConfig::from_env();
    assert_eq!(cfg.chat_model, "c");
    assert_eq!(cfg.stt_model, "s");
    assert_eq!(cfg.vision_model, "v");
    assert_eq!(cfg.chat_url.as_deref(), Some("http://localhost/chat"));
    clear_env();
}

#[test]
#[serial]
fn config_from_env_defaults() {
    clear_env();
    let cfg = Config::from_env();
    assert_eq!(cfg.data_dir, std::path::PathBuf::from("data"));
    assert_eq!(cfg.dataset, "usmle");
}

#[test]
#[serial]
fn config_from_env_overrides() {
    clear_env();
    std::env::set_var("GROUNDING_DATA_DIR", "/srv/grounding");
    std::env::set_var("GROUNDING_DATASET", "afri");
    std::env::set_var("GROQ_API_KEY", "k");
    let cfg = Config::from_env();
    assert_eq!(cfg.data_dir, std::path::PathBuf::from("/srv/grounding"));
    assert_eq!(cfg.dataset, "afri");
    assert_eq!(cfg.ai.api_key.as_deref(), Some("k"));
    clear_env();
}
