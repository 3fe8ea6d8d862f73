use super::options::AnswerOptions;
use super::source::GroundingSource;

/// One reference case from a grounding dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingRecord {
    pub question: String,
    pub answer_words: String,
    pub options: AnswerOptions,
    pub correct_answer: Option<String>,
}

impl GroundingRecord {
    /// Builds a record without multiple choice structure.
    pub fn new(question: impl Into<String>, answer_words: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer_words: answer_words.into(),
            options: AnswerOptions::NotApplicable,
            correct_answer: None,
        }
    }

    /// Text of the option named by `correct_answer`, when both are present.
    pub fn correct_option_text(&self) -> Option<&str> {
        self.correct_answer
            .as_deref()
            .and_then(|label| self.options.get(label.trim()))
    }
}

/// The loaded rows of a single grounding source, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingTable {
    source: GroundingSource,
    records: Vec<GroundingRecord>,
}

impl GroundingTable {
    pub fn new(source: GroundingSource, records: Vec<GroundingRecord>) -> Self {
        Self { source, records }
    }

    pub fn source(&self) -> GroundingSource {
        self.source
    }

    pub fn records(&self) -> &[GroundingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_option_resolves_label() {
        let record = GroundingRecord {
            question: "q".into(),
            answer_words: "a".into(),
            options: AnswerOptions::from_cell(Some("{'A': 'Rest', 'B': 'Surgery'}")),
            correct_answer: Some(" B ".into()),
        };
        assert_eq!(record.correct_option_text(), Some("Surgery"));
    }

    #[test]
    fn correct_option_absent_without_options() {
        let mut record = GroundingRecord::new("q", "a");
        record.correct_answer = Some("A".into());
        assert_eq!(record.correct_option_text(), None);
    }
}
