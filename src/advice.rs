//! Grounded advice generation.
//!
//! A request loads the grounding table for the chosen dataset, picks the
//! closest reference cases, wraps them and the patient's words in
//! [`AdvicePrompt`], and asks the completion client for advice. Only an
//! unrecognized dataset name is reported as an error; every other failure
//! comes back as warning text with [`AdviceStatus::Fallback`].

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::ai::chat::CompletionClient;
use crate::ai::prompts::AdvicePrompt;
use crate::grounding::{GroundingSource, GroundingStore, UnknownSourceError};
use crate::messages;
use crate::retrieval::{self, DEFAULT_EXAMPLES};

/// A nearby pharmacy or clinic. Populated by place lookups, never by
/// [`AdviceGenerator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceStatus {
    Generated,
    /// The text reports an error instead of advice.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceResponse {
    pub text: String,
    pub places: Vec<NearbyPlace>,
    pub status: AdviceStatus,
}

impl AdviceResponse {
    fn generated(text: String) -> Self {
        Self {
            text,
            places: Vec::new(),
            status: AdviceStatus::Generated,
        }
    }

    fn fallback(error: &anyhow::Error) -> Self {
        Self {
            text: messages::advice_failed(error),
            places: Vec::new(),
            status: AdviceStatus::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.status == AdviceStatus::Fallback
    }

    pub fn into_parts(self) -> (String, Vec<NearbyPlace>) {
        (self.text, self.places)
    }
}

pub struct AdviceGenerator<C> {
    store: Arc<GroundingStore>,
    client: C,
    examples: usize,
}

impl<C: CompletionClient> AdviceGenerator<C> {
    pub fn new(store: Arc<GroundingStore>, client: C) -> Self {
        Self {
            store,
            client,
            examples: DEFAULT_EXAMPLES,
        }
    }

    /// Number of reference cases placed in each prompt.
    pub fn with_examples(mut self, examples: usize) -> Self {
        self.examples = examples;
        self
    }

    pub fn store(&self) -> &GroundingStore {
        &self.store
    }

    /// Advice for `user_input`, grounded on the dataset named `dataset`.
    #[instrument(level = "debug", skip(self, user_input))]
    pub async fn generate(
        &self,
        user_input: &str,
        dataset: &str,
    ) -> Result<AdviceResponse, UnknownSourceError> {
        let source: GroundingSource = dataset.parse()?;
        Ok(self.generate_for(user_input, source).await)
    }

    pub async fn generate_for(&self, user_input: &str, source: GroundingSource) -> AdviceResponse {
        match self.try_generate(user_input, source).await {
            Ok(text) => {
                info!(%source, chars = text.len(), "advice generated");
                AdviceResponse::generated(text)
            }
            Err(err) => {
                let detail = format!("{err:#}");
                warn!(%source, error = %detail, "advice generation failed");
                AdviceResponse::fallback(&err)
            }
        }
    }

    async fn try_generate(&self, user_input: &str, source: GroundingSource) -> Result<String> {
        let table = self
            .store
            .snapshot(source)
            .context("failed to load grounding dataset")?;
        let examples = retrieval::retrieve(&table, user_input, self.examples);
        let prompt = AdvicePrompt::build(&examples, user_input);
        debug!(prompt_chars = prompt.as_str().len(), "advice prompt assembled");

        let text = self
            .client
            .complete(prompt.as_str())
            .await
            .context("advice request failed")?;
        Ok(text.trim().to_string())
    }
}
