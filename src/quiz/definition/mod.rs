use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub mod item;
mod quoting;

pub use item::{QuizItem, RawQuizItem};
pub use quoting::FormatError;


#[derive(Debug, Error)]
pub enum LoadError {
    #[error("can't open file: {} {}", .path.display(), .source)]
    CannotOpen { path: PathBuf, source: io::Error },
    #[error("{} is not a valid CSV file: {}", .name, .source)]
    InvalidFormat { name: String, source: FormatError },
    #[error("not a valid question-answer at line {}: {:?}", .index, .fields)]
    InvalidRow { index: usize, fields: Vec<String> },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizDefinition {
    items: Vec<QuizItem>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition, LoadError> {
        let file = File::open(source).map_err(|e| LoadError::CannotOpen {
            path: source.to_path_buf(),
            source: e,
        })?;
        QuizDefinition::from_reader(file, &source.display().to_string())
    }

    /// Parses `question,answer` records with no header row. The whole source is
    /// read before any record is validated, so a malformed file is always
    /// reported as such even if an earlier row has the wrong shape.
    pub fn from_reader<R: Read>(mut reader: R, name: &str) -> Result<QuizDefinition, LoadError> {
        let invalid_format = |e: FormatError| LoadError::InvalidFormat {
            name: name.to_owned(),
            source: e,
        };

        let mut source = Vec::new();
        reader
            .read_to_end(&mut source)
            .map_err(|e| invalid_format(e.into()))?;
        quoting::check_quoting(&source).map_err(invalid_format)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source.as_slice());
        let records = csv_reader
            .records()
            .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()
            .map_err(|e| invalid_format(e.into()))?;

        let mut items = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.len() != 2 {
                return Err(LoadError::InvalidRow {
                    index,
                    fields: record.iter().map(|f| f.to_owned()).collect(),
                });
            }
            let raw_item: RawQuizItem = record
                .deserialize(None)
                .map_err(|e| invalid_format(e.into()))?;
            items.push(raw_item.into());
        }

        debug!("Loaded {} quiz items from {}", items.len(), name);
        Ok(QuizDefinition { items })
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }

    pub fn get_items(&self) -> &Vec<QuizItem> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
