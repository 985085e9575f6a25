//! Recommendation client module for submitting intake forms

mod client;
mod traits;

pub use client::{NutritionPlan, RecommendClient, SubmissionError, DEFAULT_ENDPOINT};
pub use traits::RecommendClientTrait;

#[cfg(test)]
pub use traits::MockRecommendClientTrait;
