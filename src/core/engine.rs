use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::MatchingSettings;
use crate::core::scoring::MatchingEngineV1;
use crate::models::{MatchProfile, MatchResult};

/// Errors raised when selecting a scoring engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown matching engine version: {0}")]
    UnknownVersion(String),
}

/// Versioned scoring algorithm
///
/// Weights, distance bands and compatibility tables are constants of a
/// version. Changing any of them means a new version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineVersion {
    V1,
}

impl EngineVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineVersion::V1 => "v1",
        }
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineVersion {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" => Ok(EngineVersion::V1),
            other => Err(EngineError::UnknownVersion(other.to_string())),
        }
    }
}

/// Scores one candidate against a seeker
///
/// Implementations are pure: the same pair of profiles always produces the
/// same result, with no I/O and no shared mutable state, so one engine can be
/// shared freely across threads.
pub trait MatchingEngine: Send + Sync {
    fn version(&self) -> EngineVersion;

    fn calculate_match(&self, seeker: &MatchProfile, candidate: &MatchProfile) -> MatchResult;
}

/// Build the engine named by the matching settings
pub fn build_engine(settings: &MatchingSettings) -> Result<Box<dyn MatchingEngine>, EngineError> {
    let version: EngineVersion = settings.version.parse()?;

    let engine: Box<dyn MatchingEngine> = match version {
        EngineVersion::V1 => Box::new(MatchingEngineV1::new(settings.max_distance_km)),
    };

    tracing::debug!(
        version = %engine.version(),
        max_distance_km = settings.max_distance_km,
        "matching engine built"
    );

    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!("v1".parse::<EngineVersion>(), Ok(EngineVersion::V1));
        assert_eq!(" V1 ".parse::<EngineVersion>(), Ok(EngineVersion::V1));
        assert_eq!(
            "v2".parse::<EngineVersion>(),
            Err(EngineError::UnknownVersion("v2".to_string()))
        );
    }

    #[test]
    fn test_version_round_trips_through_display() {
        let version = EngineVersion::V1;
        assert_eq!(version.to_string().parse::<EngineVersion>(), Ok(version));
    }

    #[test]
    fn test_build_engine_from_settings() {
        let settings = MatchingSettings::default();
        let engine = build_engine(&settings).unwrap();
        assert_eq!(engine.version(), EngineVersion::V1);
    }

    #[test]
    fn test_build_engine_rejects_unknown_version() {
        let settings = MatchingSettings {
            version: "v9".to_string(),
            ..MatchingSettings::default()
        };
        assert!(matches!(build_engine(&settings), Err(EngineError::UnknownVersion(_))));
    }
}
