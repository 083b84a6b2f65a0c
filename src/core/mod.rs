// Core algorithm exports
pub mod compatibility;
pub mod distance;
pub mod engine;
pub mod matcher;
pub mod scoring;

pub use compatibility::{CompatibilityTable, CLEANLINESS_COMPATIBILITY, SLEEP_COMPATIBILITY};
pub use distance::{haversine_distance, profile_distance, round_km};
pub use engine::{build_engine, EngineError, EngineVersion, MatchingEngine};
pub use matcher::{Matcher, PageRequest, RankedMatches, RankingOptions};
pub use scoring::MatchingEngineV1;
