use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use dinescore_core::domain::rating::{MAX_SCORE, MIN_SCORE};
use dinescore_core::reviews::ReviewSource;
use dinescore_core::scoring::RatingAggregator;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

pub const FETCH_RESTAURANT_DATA: &str = "fetch_restaurant_data";
pub const CALCULATE_OVERALL_SCORE: &str = "calculate_overall_score";

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn execute(&self, input: Value) -> Result<Value>;
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Registry holding both rating tools over the given review source.
    pub fn with_rating_tools(source: Arc<dyn ReviewSource>) -> Self {
        let mut registry = Self::default();
        registry.register(FetchRestaurantDataTool::new(source));
        registry.register(CalculateOverallScoreTool::new());
        registry
    }

    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub async fn call(&self, name: &str, input: Value) -> Result<Value> {
        let tool = self.tools.get(name).ok_or_else(|| anyhow!("unknown tool `{name}`"))?;
        debug!(event_name = "agent.tool.invoked", tool = name, "invoking tool");
        tool.execute(input).await
    }

    pub fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        let mut descriptions =
            self.tools.values().map(|tool| (tool.name(), tool.description())).collect::<Vec<_>>();
        descriptions.sort();
        descriptions
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct FetchInput {
    restaurant_name: String,
}

#[derive(Debug, Deserialize)]
struct ScoreInput {
    restaurant_name: String,
    food_scores: Vec<u8>,
    customer_service_scores: Vec<u8>,
}

/// Returns `{name: [sentences]}` on success and `{"error": message}` when the lookup fails.
pub struct FetchRestaurantDataTool {
    source: Arc<dyn ReviewSource>,
}

impl FetchRestaurantDataTool {
    pub fn new(source: Arc<dyn ReviewSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Tool for FetchRestaurantDataTool {
    fn name(&self) -> &'static str {
        FETCH_RESTAURANT_DATA
    }

    fn description(&self) -> &'static str {
        "Obtém as avaliações de um restaurante específico."
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let input: FetchInput =
            serde_json::from_value(input).context("invalid fetch_restaurant_data input")?;

        let output = match self.source.fetch(&input.restaurant_name) {
            Ok(sentences) => keyed(input.restaurant_name, json!(sentences)),
            Err(error) => json!({ "error": error.user_message() }),
        };
        Ok(output)
    }
}

#[derive(Default)]
pub struct CalculateOverallScoreTool {
    aggregator: RatingAggregator,
}

impl CalculateOverallScoreTool {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Tool for CalculateOverallScoreTool {
    fn name(&self) -> &'static str {
        CALCULATE_OVERALL_SCORE
    }

    fn description(&self) -> &'static str {
        "Calcula a pontuação geral de um restaurante."
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let input: ScoreInput =
            serde_json::from_value(input).context("invalid calculate_overall_score input")?;
        ensure_in_range("food_scores", &input.food_scores)?;
        ensure_in_range("customer_service_scores", &input.customer_service_scores)?;

        let score = self.aggregator.score(
            &input.restaurant_name,
            &input.food_scores,
            &input.customer_service_scores,
        );
        Ok(keyed(score.restaurant_name, json!(score.value)))
    }
}

fn ensure_in_range(field: &str, scores: &[u8]) -> Result<()> {
    match scores.iter().find(|score| !(MIN_SCORE..=MAX_SCORE).contains(*score)) {
        Some(score) => {
            Err(anyhow!("{field} value {score} is outside {MIN_SCORE}..={MAX_SCORE}"))
        }
        None => Ok(()),
    }
}

fn keyed(key: String, value: Value) -> Value {
    let mut object = Map::new();
    object.insert(key, value);
    Value::Object(object)
}
