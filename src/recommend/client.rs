//! HTTP client for the nutrition recommendation endpoint
//!
//! One submission is one `POST` with the form answers as a JSON body. The response must
//! carry the plan text at `output.mealPlan`; anything else is treated as an invalid reply.

use super::traits::RecommendClientTrait;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default recommendation endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/recommend";

/// Nutrition plan returned by the recommendation endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionPlan {
    pub meal_plan: String,
    pub received_at: DateTime<Utc>,
}

/// Errors surfaced to the user when a submission fails
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Non-success status or a body without `output.mealPlan`
    #[error("Invalid response from server")]
    InvalidResponse { detail: String },

    /// The request never produced a readable response
    #[error("Failed to get recommendations")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Deserialize)]
struct RecommendResponse {
    output: Option<PlanOutput>,
}

#[derive(Debug, Deserialize)]
struct PlanOutput {
    #[serde(rename = "mealPlan")]
    meal_plan: Option<String>,
}

/// Client for the recommendation endpoint
pub struct RecommendClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RecommendClient {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl RecommendClientTrait for RecommendClient {
    async fn submit(&self, payload: &Value) -> Result<NutritionPlan, SubmissionError> {
        info!("Submitting intake to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Recommendation request failed: {e}");
                SubmissionError::Transport(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Recommendation endpoint returned {status}");
            return Err(SubmissionError::InvalidResponse {
                detail: format!("unexpected status {status}"),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read recommendation response: {e}");
            SubmissionError::Transport(Box::new(e))
        })?;

        parse_plan(&body)
    }
}

/// Extract the plan text from a response body
fn parse_plan(body: &[u8]) -> Result<NutritionPlan, SubmissionError> {
    let parsed: RecommendResponse =
        serde_json::from_slice(body).map_err(|e| SubmissionError::InvalidResponse {
            detail: format!("malformed body: {e}"),
        })?;

    let meal_plan = parsed
        .output
        .and_then(|o| o.meal_plan)
        .filter(|plan| !plan.trim().is_empty())
        .ok_or_else(|| SubmissionError::InvalidResponse {
            detail: "missing output.mealPlan".to_string(),
        })?;

    debug!("Received nutrition plan ({} bytes)", meal_plan.len());

    Ok(NutritionPlan {
        meal_plan,
        received_at: Utc::now(),
    })
}
