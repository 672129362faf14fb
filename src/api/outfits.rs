//! Recommendation Endpoint

use serde::Serialize;

use crate::models::RecommendResponse;

#[derive(Serialize)]
struct RecommendBody<'a> {
    event: &'a str,
    weather: &'a str,
}

/// Request outfit candidates for an event/weather combination
pub async fn recommend(event: &str, weather: &str) -> Result<RecommendResponse, String> {
    super::post_for("recommend", &RecommendBody { event, weather }).await
}
