//! Grounding datasets: loading reference Q&A tables from disk.
//!
//! [`GroundingStore::load`] always re-reads the CSV file. [`GroundingStore::snapshot`]
//! keeps one immutable table per source until it is invalidated.

pub mod error;
pub mod options;
pub mod record;
pub mod source;

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, instrument, warn};

pub use error::{GroundingError, OptionsParseError, UnknownSourceError};
pub use options::{parse_options, AnswerOptions};
pub use record::{GroundingRecord, GroundingTable};
pub use source::GroundingSource;

pub struct GroundingStore {
    data_dir: PathBuf,
    cache: RwLock<HashMap<GroundingSource, Arc<GroundingTable>>>,
}

impl GroundingStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, source: GroundingSource) -> PathBuf {
        self.data_dir.join(source.file_name())
    }

    /// Load the table named `source_name` from disk.
    ///
    /// Fails with [`GroundingError::UnknownSource`] before touching the file
    /// system when the name is not recognized.
    pub fn load(&self, source_name: &str) -> Result<GroundingTable, GroundingError> {
        let source: GroundingSource = source_name.parse()?;
        self.load_source(source)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn load_source(&self, source: GroundingSource) -> Result<GroundingTable, GroundingError> {
        let path = self.path_for(source);
        read_table(source, &path)
    }

    /// Shared, cached copy of a source's table. Loaded on first use.
    pub fn snapshot(&self, source: GroundingSource) -> Result<Arc<GroundingTable>, GroundingError> {
        if let Some(table) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&source)
        {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(self.load_source(source)?);
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(cache.entry(source).or_insert(table)))
    }

    /// Drop the cached table for `source`. Returns whether one was cached.
    pub fn invalidate(&self, source: GroundingSource) -> bool {
        let removed = self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&source)
            .is_some();
        debug!(%source, removed, "grounding cache invalidated");
        removed
    }

    pub fn invalidate_all(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

fn cell<'r>(row: &'r csv::StringRecord, idx: Option<usize>) -> Option<&'r str> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn read_table(source: GroundingSource, path: &Path) -> Result<GroundingTable, GroundingError> {
    let file = File::open(path).map_err(|source| GroundingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source| GroundingError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(normalize_header)
        .collect();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let (question_col, answer_col) = source.text_columns();
    let question_idx = column(question_col).ok_or_else(|| GroundingError::MissingColumn {
        path: path.to_path_buf(),
        column: question_col,
    })?;
    let answer_idx = column(answer_col).ok_or_else(|| GroundingError::MissingColumn {
        path: path.to_path_buf(),
        column: answer_col,
    })?;
    let (options_idx, correct_idx) = match source {
        GroundingSource::Usmle => (column("options"), column("correct_answer")),
        GroundingSource::Afri => (None, None),
    };

    let mut records = Vec::new();
    let mut dropped = 0usize;
    let mut malformed = 0usize;
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        let (Some(question), Some(answer)) = (
            cell(&row, Some(question_idx)),
            cell(&row, Some(answer_idx)),
        ) else {
            dropped += 1;
            continue;
        };

        let options = match source {
            GroundingSource::Usmle => AnswerOptions::from_cell(cell(&row, options_idx)),
            GroundingSource::Afri => AnswerOptions::NotApplicable,
        };
        if let AnswerOptions::Malformed { error, .. } = &options {
            malformed += 1;
            warn!(%source, %error, "options cell is not a mapping; using empty options");
        }

        records.push(GroundingRecord {
            question: question.to_string(),
            answer_words: answer.to_string(),
            options,
            correct_answer: cell(&row, correct_idx).map(str::to_string),
        });
    }

    debug!(
        %source,
        path = %path.display(),
        rows = records.len(),
        dropped,
        malformed,
        "grounding table loaded"
    );
    Ok(GroundingTable::new(source, records))
}
