pub mod aggregate;
pub mod lexicon;

pub use aggregate::{overall_rating, RatingAggregator};
pub use lexicon::{ReviewScorer, FOOD_KEYWORDS, SENTIMENT_LEXICON, SERVICE_KEYWORDS};
