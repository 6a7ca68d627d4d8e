use serde::{Deserialize, Serialize};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;
pub const NEUTRAL_SCORE: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePair {
    pub food: u8,
    pub service: u8,
}

impl Default for ScorePair {
    fn default() -> Self {
        Self { food: NEUTRAL_SCORE, service: NEUTRAL_SCORE }
    }
}

/// Parallel food and service sequences, one entry per review.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewScores {
    pub food: Vec<u8>,
    pub service: Vec<u8>,
}

impl ReviewScores {
    pub fn push(&mut self, pair: ScorePair) {
        self.food.push(pair.food);
        self.service.push(pair.service);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverallScore {
    pub restaurant_name: String,
    pub value: f64,
}

impl OverallScore {
    pub fn display_value(&self) -> String {
        format!("{:.3}", self.value)
    }
}
