//! Roommate Matcher - deterministic, explainable compatibility scoring
//!
//! This library scores a candidate against a seeker with a fixed,
//! versioned weighting scheme and explains the result with its top reasons
//! and any conflicts. A thin ranking layer filters, sorts and pages the
//! results over a caller-supplied candidate pool.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

use crate::config::MatchingSettings;

// Re-export commonly used types
pub use crate::core::{
    build_engine, haversine_distance, EngineError, EngineVersion, Matcher, MatchingEngine,
    MatchingEngineV1, PageRequest, RankedMatches, RankingOptions,
};
pub use error::AppError;
pub use models::{
    ConflictWarning, FindMatchesRequest, FindMatchesResponse, MatchExplanation, MatchProfile,
    MatchReason, MatchResult,
};

/// Validate a request and rank its candidates with the configured engine
pub fn rank_request(
    settings: &MatchingSettings,
    request: FindMatchesRequest,
) -> Result<FindMatchesResponse, AppError> {
    let request = request.validated()?;
    let matcher = Matcher::from_settings(settings)?;

    let page = PageRequest {
        limit: request.limit,
        offset: request.offset,
        min_score: request.min_score,
    };
    let ranked = matcher.find_matches(&request.seeker, &request.candidates, page);

    Ok(FindMatchesResponse {
        seeker_id: request.seeker.user_id,
        engine_version: matcher.engine().version().to_string(),
        matches: ranked.matches,
        total_candidates: ranked.total_candidates,
        total_results: ranked.total_results,
        next_offset: ranked.next_offset,
    })
}
