use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::domain::MatchProfile;

/// Errors raised while validating an incoming request
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Validation failed: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Request to rank a pool of candidates against a seeker
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(nested)]
    pub seeker: MatchProfile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<MatchProfile>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
    #[validate(range(max = 100))]
    #[serde(alias = "min_score", rename = "minScore", default)]
    pub min_score: Option<u32>,
}

impl FindMatchesRequest {
    /// Validate the request and every profile it carries
    pub fn validated(self) -> Result<Self, RequestError> {
        self.validate()?;
        Ok(self)
    }
}
