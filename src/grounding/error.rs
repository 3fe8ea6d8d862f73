use std::path::PathBuf;

/// Raised when a dataset name is not one of the recognized grounding sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grounding source '{0}' (expected 'usmle' or 'afri')")]
pub struct UnknownSourceError(pub String);

#[derive(Debug, thiserror::Error)]
pub enum GroundingError {
    #[error(transparent)]
    UnknownSource(#[from] UnknownSourceError),

    #[error("failed to read grounding dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed grounding dataset {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("grounding dataset {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },
}

/// Why an options cell could not be read as a label → text mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsParseError {
    #[error("expected '{expected}' at offset {offset}")]
    Expected { expected: char, offset: usize },

    #[error("unterminated string starting at offset {0}")]
    UnterminatedString(usize),

    #[error("unsupported value at offset {0}")]
    UnsupportedValue(usize),

    #[error("trailing characters after mapping at offset {0}")]
    TrailingInput(usize),
}
