use serde::{Deserialize, Serialize};

/// All sentences accumulated for one restaurant name across the review source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub restaurant_name: String,
    pub sentences: Vec<String>,
}

impl ReviewRecord {
    pub fn new(restaurant_name: impl Into<String>) -> Self {
        Self { restaurant_name: restaurant_name.into(), sentences: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
