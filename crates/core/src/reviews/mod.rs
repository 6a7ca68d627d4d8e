//! Flat-file review source.
//!
//! Each non-blank line reads `<Name>.<sentence>.<sentence>...`: the first period separates
//! the restaurant name from its body and every further period ends a sentence. Lines that
//! share a name accumulate into one record in read order.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::review::ReviewRecord;
use crate::errors::ReviewStoreError;

pub const DEFAULT_REVIEWS_FILE: &str = "restaurantes.txt";

pub trait ReviewSource: Send + Sync {
    fn fetch(&self, restaurant_name: &str) -> Result<Vec<String>, ReviewStoreError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewStore {
    records: Vec<ReviewRecord>,
    index: BTreeMap<String, usize>,
}

impl ReviewStore {
    pub fn load(path: &Path) -> Result<Self, ReviewStoreError> {
        let raw = fs::read_to_string(path)
            .map_err(|error| ReviewStoreError::source_unavailable(path, error))?;
        let store = Self::parse(&raw);
        debug!(
            event_name = "rating.reviews.loaded",
            path = %path.display(),
            restaurants = store.len(),
            "review source parsed"
        );
        Ok(store)
    }

    pub fn parse(raw: &str) -> Self {
        let mut store = Self::default();
        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((name, body)) = line.split_once('.') else {
                continue;
            };

            let sentences = body.split('.').map(str::trim).filter(|sentence| !sentence.is_empty());
            store.record_mut(name.trim()).sentences.extend(sentences.map(str::to_string));
        }
        store
    }

    pub fn record(&self, restaurant_name: &str) -> Option<&ReviewRecord> {
        self.index.get(restaurant_name.trim()).map(|position| &self.records[*position])
    }

    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record_mut(&mut self, name: &str) -> &mut ReviewRecord {
        let position = match self.index.get(name) {
            Some(position) => *position,
            None => {
                self.records.push(ReviewRecord::new(name));
                let position = self.records.len() - 1;
                self.index.insert(name.to_string(), position);
                position
            }
        };
        &mut self.records[position]
    }
}

impl ReviewSource for ReviewStore {
    fn fetch(&self, restaurant_name: &str) -> Result<Vec<String>, ReviewStoreError> {
        self.record(restaurant_name)
            .filter(|record| !record.is_empty())
            .map(|record| record.sentences.clone())
            .ok_or_else(|| ReviewStoreError::NotFound { name: restaurant_name.trim().to_string() })
    }
}

/// Re-reads the file on every fetch so edits are visible to the next query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReviewSource {
    path: PathBuf,
}

impl FileReviewSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileReviewSource {
    fn default() -> Self {
        Self::new(DEFAULT_REVIEWS_FILE)
    }
}

impl ReviewSource for FileReviewSource {
    fn fetch(&self, restaurant_name: &str) -> Result<Vec<String>, ReviewStoreError> {
        ReviewStore::load(&self.path)?.fetch(restaurant_name)
    }
}
