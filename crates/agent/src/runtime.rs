use anyhow::{anyhow, Context, Result};
use dinescore_core::scoring::ReviewScorer;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::tools::{ToolRegistry, CALCULATE_OVERALL_SCORE, FETCH_RESTAURANT_DATA};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConversationStep {
    pub agent: &'static str,
    pub message: String,
    pub output: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConversationTranscript {
    pub restaurant_name: String,
    pub steps: Vec<ConversationStep>,
}

impl ConversationTranscript {
    /// Value reported by the score step, if the conversation got that far.
    pub fn overall_score(&self) -> Option<f64> {
        self.steps
            .iter()
            .find(|step| step.agent == "score_agent")
            .and_then(|step| step.output.get(&self.restaurant_name))
            .and_then(Value::as_f64)
    }
}

/// Replays the data-fetch, review-analysis, and score hand-off through the tool registry.
/// The transcript is observational only; the authoritative rating comes from the pipeline.
pub struct AgentRuntime {
    tools: ToolRegistry,
    scorer: ReviewScorer,
}

impl AgentRuntime {
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools, scorer: ReviewScorer::new() }
    }

    pub async fn run(&self, restaurant_name: &str) -> Result<ConversationTranscript> {
        let mut transcript = ConversationTranscript {
            restaurant_name: restaurant_name.to_string(),
            ..ConversationTranscript::default()
        };

        let fetched = self
            .tools
            .call(FETCH_RESTAURANT_DATA, json!({ "restaurant_name": restaurant_name }))
            .await?;
        transcript.steps.push(ConversationStep {
            agent: "data_fetch_agent",
            message: format!(
                "Por favor, obtenha as avaliações do restaurante {restaurant_name} chamando a função fetch_restaurant_data."
            ),
            output: fetched.clone(),
        });
        if fetched.get("error").is_some() {
            info!(
                event_name = "agent.conversation.halted",
                restaurant_name,
                "data fetch returned an error payload"
            );
            return Ok(transcript);
        }

        let reviews: Vec<String> = serde_json::from_value(
            fetched
                .get(restaurant_name)
                .cloned()
                .ok_or_else(|| anyhow!("fetch output is missing key `{restaurant_name}`"))?,
        )
        .context("fetch output is not a list of sentences")?;
        let scores = self.scorer.analyze(&reviews);
        transcript.steps.push(ConversationStep {
            agent: "review_analysis_agent",
            message: format!("Analise as seguintes avaliações do {restaurant_name}: {fetched}"),
            output: json!({
                "food_scores": scores.food,
                "customer_service_scores": scores.service,
            }),
        });

        let scored = self
            .tools
            .call(
                CALCULATE_OVERALL_SCORE,
                json!({
                    "restaurant_name": restaurant_name,
                    "food_scores": scores.food,
                    "customer_service_scores": scores.service,
                }),
            )
            .await?;
        transcript.steps.push(ConversationStep {
            agent: "score_agent",
            message: format!(
                "Calcule a pontuação geral do {restaurant_name} com base nas pontuações de comida e serviço."
            ),
            output: scored,
        });

        info!(
            event_name = "agent.conversation.completed",
            restaurant_name,
            steps = transcript.steps.len(),
            "agent conversation replayed"
        );
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dinescore_core::reviews::ReviewStore;
    use serde_json::json;

    use super::AgentRuntime;
    use crate::tools::ToolRegistry;

    fn runtime() -> AgentRuntime {
        AgentRuntime::new(ToolRegistry::with_rating_tools(Arc::new(ReviewStore::parse(
            "Bistro Azul.O prato estava incrível, o garçom foi incrível.\n",
        ))))
    }

    #[tokio::test]
    async fn replays_three_step_hand_off() {
        let transcript = runtime().run("Bistro Azul").await.expect("conversation should run");

        let agents = transcript.steps.iter().map(|step| step.agent).collect::<Vec<_>>();
        assert_eq!(agents, vec!["data_fetch_agent", "review_analysis_agent", "score_agent"]);
        assert_eq!(
            transcript.steps[1].output,
            json!({ "food_scores": [5], "customer_service_scores": [5] })
        );
        assert_eq!(transcript.overall_score(), Some(10.0));
    }

    #[tokio::test]
    async fn fetch_error_ends_conversation_early() {
        let transcript = runtime().run("Casa Nova").await.expect("conversation should run");

        assert_eq!(transcript.steps.len(), 1);
        assert_eq!(
            transcript.steps[0].output,
            json!({ "error": "Restaurante Casa Nova não encontrado." })
        );
        assert_eq!(transcript.overall_score(), None);
    }
}
