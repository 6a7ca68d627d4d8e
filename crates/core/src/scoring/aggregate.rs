use tracing::warn;

use crate::domain::rating::{OverallScore, MAX_SCORE};

#[derive(Clone, Copy, Debug, Default)]
pub struct RatingAggregator;

impl RatingAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Never fails: empty or mismatched sequences degrade to `0.0`, which callers cannot
    /// tell apart from a genuine zero.
    pub fn score(&self, restaurant_name: &str, food: &[u8], service: &[u8]) -> OverallScore {
        if food.is_empty() || service.is_empty() || food.len() != service.len() {
            warn!(
                event_name = "rating.aggregate.degraded",
                restaurant_name,
                food_len = food.len(),
                service_len = service.len(),
                "score sequences empty or mismatched; reporting zero"
            );
        }

        OverallScore {
            restaurant_name: restaurant_name.to_string(),
            value: overall_rating(food, service),
        }
    }
}

/// Weighted geometric mean on a 0..=10 scale: food counts twice as much as service.
pub fn overall_rating(food: &[u8], service: &[u8]) -> f64 {
    if food.is_empty() || service.is_empty() || food.len() != service.len() {
        return 0.0;
    }

    let pairs = food.len() as f64;
    let max_pair = f64::from(MAX_SCORE).powi(3).sqrt();
    let total: f64 = food
        .iter()
        .zip(service)
        .map(|(food, service)| {
            let food = f64::from(*food);
            (food * food * f64::from(*service)).sqrt()
        })
        .sum();

    round_to_thousandths(total * (1.0 / (pairs * max_pair)) * 10.0)
}

fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
