//! Trait abstraction for the recommendation client to enable mocking in tests

use super::client::{NutritionPlan, SubmissionError};
use async_trait::async_trait;
use serde_json::Value;

/// Submission adapter for the nutrition plan form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendClientTrait: Send + Sync {
    /// Send the form payload once and return the plan it produced.
    ///
    /// No retry, backoff or timeout is applied.
    async fn submit(&self, payload: &Value) -> Result<NutritionPlan, SubmissionError>;
}
