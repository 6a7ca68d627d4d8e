use std::sync::Arc;

use dinescore_agent::{AgentRuntime, ToolRegistry};
use dinescore_core::config::AppConfig;
use dinescore_core::reviews::FileReviewSource;
use dinescore_core::router::QueryRouter;
use dinescore_core::RatingPipeline;
use tracing::{info, warn};

use crate::commands::CommandResult;

pub const QUERY_FAILURE_EXIT_CODE: u8 = 1;

#[derive(Clone, Debug, Default)]
pub struct RateOptions {
    pub query: String,
    pub json: bool,
    pub via_tools: bool,
}

pub fn run(options: &RateOptions, config: &AppConfig) -> CommandResult {
    if options.via_tools {
        replay_conversation(options, config);
    }

    let pipeline = RatingPipeline::from_file(&config.reviews.path);
    match pipeline.evaluate(&options.query) {
        Ok(report) if options.json => CommandResult::success("rate", report.summary()),
        Ok(report) => CommandResult::plain(0, report.summary()),
        Err(error) if options.json => CommandResult::failure(
            "rate",
            error.error_class(),
            error.user_message(),
            QUERY_FAILURE_EXIT_CODE,
        ),
        Err(error) => {
            info!(event_name = "rating.query.failed", error = %error, "rating query failed");
            CommandResult::plain(QUERY_FAILURE_EXIT_CODE, error.user_message())
        }
    }
}

/// Runs the tool hand-off for observation; its outcome never changes the printed result.
fn replay_conversation(options: &RateOptions, config: &AppConfig) {
    let Some(restaurant_name) = QueryRouter::new().extract_restaurant_name(&options.query) else {
        return;
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            warn!(
                event_name = "agent.runtime.init_failed",
                error = %error,
                "failed to initialize async runtime; skipping tool replay"
            );
            return;
        }
    };

    let source = Arc::new(FileReviewSource::new(&config.reviews.path));
    let agent = AgentRuntime::new(ToolRegistry::with_rating_tools(source));
    match runtime.block_on(agent.run(&restaurant_name)) {
        Ok(transcript) => {
            let rendered = serde_json::to_string(&transcript)
                .unwrap_or_else(|error| format!("<unserializable transcript: {error}>"));
            info!(
                event_name = "agent.conversation.transcript",
                restaurant_name = %restaurant_name,
                transcript = %rendered,
                "tool replay finished"
            );
        }
        Err(error) => {
            warn!(
                event_name = "agent.conversation.failed",
                restaurant_name = %restaurant_name,
                error = %error,
                "tool replay failed"
            );
        }
    }
}
