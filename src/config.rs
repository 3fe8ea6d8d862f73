use std::env;
use std::path::PathBuf;

use crate::ai::config::AiConfig;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_DATASET: &str = "usmle";

#[derive(Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Dataset name as given; validated when advice is requested.
    pub dataset: String,
    pub ai: AiConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let data_dir = env::var("GROUNDING_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        let dataset = env::var("GROUNDING_DATASET").unwrap_or_else(|_| DEFAULT_DATASET.to_string());
        let ai = AiConfig::from_env();
        Self {
            data_dir,
            dataset,
            ai,
        }
    }
}
