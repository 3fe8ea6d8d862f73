use std::io::Read;

use anyhow::{bail, Context, Result};
use dotenvy::dotenv;

pub mod advice;
pub mod ai;
pub mod assistant;
pub mod config;
pub mod grounding;
pub mod messages;
pub mod retrieval;
pub mod symptom_checker;

pub use advice::{AdviceGenerator, AdviceResponse, AdviceStatus, NearbyPlace};
pub use assistant::{HealthAssistant, VoiceOutcome};
pub use config::Config;
pub use grounding::{
    GroundingError, GroundingRecord, GroundingSource, GroundingStore, GroundingTable,
    UnknownSourceError,
};
pub use retrieval::{rank, retrieve, RankedExample};
pub use symptom_checker::quick_assessment;

// ──────────────────────────────────────────────────────────────
// Console entry point
// ──────────────────────────────────────────────────────────────

/// What the console was asked to analyze.
#[derive(Debug, PartialEq, Eq)]
pub enum Intake {
    Text(String),
    Audio(String),
    Image(String),
}

/// Read the intake from command-line arguments.
///
/// `--audio <file>` and `--image <file>` select a media file; anything else
/// is treated as symptom text. `None` means no text was given and it should
/// be read from standard input.
pub fn parse_intake(args: &[String]) -> Result<Option<Intake>> {
    match args {
        [] => Ok(None),
        [flag, path] if flag == "--audio" => Ok(Some(Intake::Audio(path.clone()))),
        [flag, path] if flag == "--image" => Ok(Some(Intake::Image(path.clone()))),
        [flag, ..] if flag == "--audio" || flag == "--image" => {
            bail!("{flag} expects exactly one file path")
        }
        words => Ok(Some(Intake::Text(words.join(" ")))),
    }
}

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting health assistant...");

    let config = Config::from_env();
    if !config.ai.has_api_key() {
        tracing::warn!("GROQ_API_KEY is not set; model requests will fail");
    }
    tracing::info!(
        data_dir = %config.data_dir.display(),
        dataset = %config.dataset,
        "configuration loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let intake = match parse_intake(&args)? {
        Some(intake) => intake,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read symptoms from stdin")?;
            Intake::Text(text)
        }
    };

    let assistant = HealthAssistant::new(&config);

    match intake {
        Intake::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                println!("{}", messages::EMPTY_INPUT);
                return Ok(());
            }
            let advice = assistant.advise_text(text, &config.dataset).await?;
            print_advice(&advice, text);
        }
        Intake::Audio(path) => {
            let audio = std::fs::read(&path).with_context(|| format!("failed to read {path}"))?;
            match assistant.advise_voice(&audio, &config.dataset).await? {
                VoiceOutcome::Advised { transcript, advice } => {
                    println!("{}", messages::transcript_line(&transcript));
                    print_advice(&advice, &transcript);
                }
                VoiceOutcome::NothingRecognized => println!("{}", messages::NOTHING_TRANSCRIBED),
                VoiceOutcome::TranscriptionFailed { error } => {
                    println!("{}", messages::transcription_failed(&error))
                }
            }
        }
        Intake::Image(path) => {
            let image = std::fs::read(&path).with_context(|| format!("failed to read {path}"))?;
            match assistant.analyze_image(&image).await {
                ai::vision::ImageAnalysis::Described { query, .. } => println!("{query}"),
                ai::vision::ImageAnalysis::Failed { error } => {
                    println!("{}", messages::image_failed(&error))
                }
            }
        }
    }

    Ok(())
}

fn print_advice(advice: &AdviceResponse, symptoms: &str) {
    println!("{}", advice.text);
    if advice.is_fallback() {
        println!(
            "\n{} {}",
            messages::OFFLINE_HINT_HEADER,
            quick_assessment(symptoms)
        );
    }
}
