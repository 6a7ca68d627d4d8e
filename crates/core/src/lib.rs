pub mod config;
pub mod domain;
pub mod errors;
pub mod pipeline;
pub mod reviews;
pub mod router;
pub mod scoring;

pub use domain::rating::{OverallScore, ReviewScores, ScorePair};
pub use domain::review::ReviewRecord;
pub use errors::{RatingError, ReviewStoreError};
pub use pipeline::{RatingPipeline, RatingReport};
pub use reviews::{FileReviewSource, ReviewSource, ReviewStore};
pub use router::QueryRouter;
pub use scoring::{overall_rating, RatingAggregator, ReviewScorer};
