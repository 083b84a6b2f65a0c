// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CleanlinessLevel, ConflictWarning, GuestFrequency, MatchExplanation, MatchProfile, MatchReason,
    MatchResult, ReasonPoints, SleepSchedule,
};
pub use requests::{FindMatchesRequest, RequestError};
pub use responses::{ErrorResponse, FindMatchesResponse};
