use std::fmt;
use std::str::FromStr;

use super::error::UnknownSourceError;

/// The reference datasets a prompt can be grounded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroundingSource {
    /// USMLE-style multiple choice questions with worded answers.
    #[default]
    Usmle,
    /// AfriMed-QA questions with free-text rationales.
    Afri,
}

impl GroundingSource {
    pub const ALL: [GroundingSource; 2] = [GroundingSource::Usmle, GroundingSource::Afri];

    pub fn name(self) -> &'static str {
        match self {
            GroundingSource::Usmle => "usmle",
            GroundingSource::Afri => "afri",
        }
    }

    /// File name of the dataset inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            GroundingSource::Usmle => "usmle_grounding.csv",
            GroundingSource::Afri => "afrimedqa_grounding.csv",
        }
    }

    /// Header names holding the question and the reference answer.
    pub(crate) fn text_columns(self) -> (&'static str, &'static str) {
        match self {
            GroundingSource::Usmle => ("question", "answer_words"),
            GroundingSource::Afri => ("question_clean", "answer_rationale"),
        }
    }
}

impl FromStr for GroundingSource {
    type Err = UnknownSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "usmle" => Ok(GroundingSource::Usmle),
            "afri" => Ok(GroundingSource::Afri),
            other => Err(UnknownSourceError(other.to_string())),
        }
    }
}

impl fmt::Display for GroundingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
