use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Ranked page of matches for a seeker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    #[serde(rename = "seekerId")]
    pub seeker_id: String,
    #[serde(rename = "engineVersion")]
    pub engine_version: String,
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "nextOffset")]
    pub next_offset: Option<usize>,
}

/// Error document written when a request cannot be served
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
