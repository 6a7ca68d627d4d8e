//! Agent capability layer - the callable surface a conversational framework binds to.
//!
//! The rating core stays deterministic and framework-free. This crate exposes it as tools:
//! - `fetch_restaurant_data` - review sentences for one restaurant, or an error payload
//! - `calculate_overall_score` - the aggregation formula over food/service scores
//!
//! # Key Types
//!
//! - `Tool` / `ToolRegistry` - name-based dispatch over JSON values (see `tools` module)
//! - `AgentRuntime` - replays the fetch, analyze, and score hand-off and records a transcript
//!
//! # Principle
//!
//! A conversation never decides the rating. The printed result is always computed by
//! `dinescore_core::RatingPipeline`; transcripts are for observation only.

pub mod runtime;
pub mod tools;

pub use runtime::{AgentRuntime, ConversationStep, ConversationTranscript};
pub use tools::{
    CalculateOverallScoreTool, FetchRestaurantDataTool, Tool, ToolRegistry,
    CALCULATE_OVERALL_SCORE, FETCH_RESTAURANT_DATA,
};
