//! Few-shot example selection by string similarity.

pub mod similarity;

use tracing::{debug, instrument};

use crate::grounding::{GroundingRecord, GroundingTable};

pub use similarity::ratio;

/// How many examples go into an advice prompt when the caller does not say.
pub const DEFAULT_EXAMPLES: usize = 3;

/// A record scored against a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedExample<'t> {
    pub record: &'t GroundingRecord,
    pub score: f64,
}

impl RankedExample<'_> {
    pub fn format(&self) -> String {
        format!(
            "Example Symptom: {}\nAdvice Given: {}",
            self.record.question, self.record.answer_words
        )
    }
}

/// Score every record against `query` and keep the best `n`.
///
/// Comparison is case-insensitive. Records with equal scores keep their table
/// order.
#[instrument(level = "debug", skip(table), fields(source = %table.source(), rows = table.len()))]
pub fn rank<'t>(table: &'t GroundingTable, query: &str, n: usize) -> Vec<RankedExample<'t>> {
    let query = query.to_lowercase();
    let mut ranked: Vec<RankedExample<'t>> = table
        .records()
        .iter()
        .map(|record| RankedExample {
            record,
            score: ratio(&query, &record.question.to_lowercase()),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(n);

    debug!(
        selected = ranked.len(),
        top_score = ?ranked.first().map(|r| r.score),
        "ranked grounding examples"
    );
    ranked
}

/// The best `n` examples for `query`, formatted for a prompt and separated
/// by blank lines. Empty when the table is empty.
pub fn retrieve(table: &GroundingTable, query: &str, n: usize) -> String {
    rank(table, query, n)
        .iter()
        .map(RankedExample::format)
        .collect::<Vec<_>>()
        .join("\n\n")
}
