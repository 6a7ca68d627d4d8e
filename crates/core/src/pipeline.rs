use serde::Serialize;
use tracing::{debug, info};

use crate::domain::rating::{OverallScore, ReviewScores};
use crate::errors::RatingError;
use crate::reviews::{FileReviewSource, ReviewSource};
use crate::router::QueryRouter;
use crate::scoring::{RatingAggregator, ReviewScorer};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RatingReport {
    pub restaurant_name: String,
    pub reviews: Vec<String>,
    pub scores: ReviewScores,
    pub overall: OverallScore,
}

impl RatingReport {
    pub fn summary(&self) -> String {
        format!(
            "A avaliação média do {} é {}.",
            self.restaurant_name,
            self.overall.display_value()
        )
    }
}

/// Runs one query start to finish: router, review source, scorer, aggregator.
#[derive(Clone, Debug)]
pub struct RatingPipeline<S = FileReviewSource> {
    source: S,
    router: QueryRouter,
    scorer: ReviewScorer,
    aggregator: RatingAggregator,
}

impl RatingPipeline<FileReviewSource> {
    pub fn from_file(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileReviewSource::new(path))
    }
}

impl<S> RatingPipeline<S>
where
    S: ReviewSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            router: QueryRouter::new(),
            scorer: ReviewScorer::new(),
            aggregator: RatingAggregator::new(),
        }
    }

    pub fn evaluate(&self, query: &str) -> Result<RatingReport, RatingError> {
        info!(event_name = "rating.query.received", query, "rating query received");
        let restaurant_name = self
            .router
            .extract_restaurant_name(query)
            .ok_or_else(|| RatingError::AmbiguousQuery { query: query.to_string() })?;
        self.rate(&restaurant_name)
    }

    pub fn rate(&self, restaurant_name: &str) -> Result<RatingReport, RatingError> {
        let reviews = self.source.fetch(restaurant_name)?;
        debug!(
            event_name = "rating.reviews.fetched",
            restaurant_name,
            review_count = reviews.len(),
            "reviews fetched"
        );

        let scores = self.scorer.analyze(&reviews);
        let overall = self.aggregator.score(restaurant_name, &scores.food, &scores.service);
        info!(
            event_name = "rating.scores.computed",
            restaurant_name,
            food = ?scores.food,
            service = ?scores.service,
            overall = overall.value,
            "overall rating computed"
        );

        Ok(RatingReport { restaurant_name: restaurant_name.to_string(), reviews, scores, overall })
    }
}
