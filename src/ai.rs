pub mod chat;
pub mod common;
pub mod config;
pub mod prompts;
pub mod stt;
pub mod vision;
