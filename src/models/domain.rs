use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// How tidy a user keeps shared space, from strictest to most relaxed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanlinessLevel {
    VeryClean,
    Clean,
    Moderate,
    Relaxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepSchedule {
    EarlyBird,
    Normal,
    NightOwl,
}

/// How often a user has guests over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestFrequency {
    Never,
    Rarely,
    Sometimes,
    Often,
}

impl GuestFrequency {
    /// Position on the never..often scale
    pub fn level(self) -> i32 {
        match self {
            GuestFrequency::Never => 0,
            GuestFrequency::Rarely => 1,
            GuestFrequency::Sometimes => 2,
            GuestFrequency::Often => 3,
        }
    }
}

/// Snapshot of everything the engine needs to know about one user
///
/// Built by the caller from profile, preferences and reputation records.
/// Profiles are validated before they reach the engine; the engine itself
/// assumes well-formed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_profile_ranges"))]
pub struct MatchProfile {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    pub age: u8,
    #[serde(default)]
    pub city: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(rename = "lookingForShortTerm", default)]
    pub looking_for_short_term: bool,
    #[serde(rename = "lookingForLongTerm", default)]
    pub looking_for_long_term: bool,
    #[serde(rename = "moveInEarliest", default)]
    pub move_in_earliest: Option<NaiveDate>,
    #[serde(rename = "moveInLatest", default)]
    pub move_in_latest: Option<NaiveDate>,

    #[validate(range(min = 1))]
    #[serde(rename = "budgetMin")]
    pub budget_min: u32,
    #[validate(range(min = 1))]
    #[serde(rename = "budgetMax")]
    pub budget_max: u32,
    #[serde(rename = "cleanlinessLevel")]
    pub cleanliness_level: CleanlinessLevel,
    #[serde(rename = "sleepSchedule")]
    pub sleep_schedule: SleepSchedule,
    #[serde(rename = "smokingOk", default)]
    pub smoking_ok: bool,
    #[serde(rename = "drinkingOk", default = "default_true")]
    pub drinking_ok: bool,
    #[serde(rename = "petsOk", default)]
    pub pets_ok: bool,
    #[serde(rename = "guestFrequency")]
    pub guest_frequency: GuestFrequency,
    #[serde(rename = "isStudent", default)]
    pub is_student: bool,
    #[serde(rename = "isWorking", default)]
    pub is_working: bool,

    #[validate(range(max = 100))]
    #[serde(rename = "reputationScore", default = "default_reputation")]
    pub reputation_score: u8,
}

fn default_true() -> bool { true }

/// Users without a reputation record start at full reputation
fn default_reputation() -> u8 { 100 }

fn validate_profile_ranges(profile: &MatchProfile) -> Result<(), ValidationError> {
    if profile.budget_max < profile.budget_min {
        let mut err = ValidationError::new("budget_range");
        err.message = Some("budgetMax must be greater than or equal to budgetMin".into());
        return Err(err);
    }

    if let (Some(earliest), Some(latest)) = (profile.move_in_earliest, profile.move_in_latest) {
        if latest < earliest {
            let mut err = ValidationError::new("move_in_window");
            err.message = Some("moveInLatest must not be before moveInEarliest".into());
            return Err(err);
        }
    }

    Ok(())
}

/// Positive signal surfaced to explain a high score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    BudgetMatch,
    LocationClose,
    CleanlinessMatch,
    SleepScheduleMatch,
    LifestyleMatch,
    AvailabilityMatch,
    WorkStatusMatch,
}

/// Negative signal warning about a potential incompatibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictWarning {
    BudgetMismatch,
    LocationFar,
    CleanlinessConflict,
    SleepConflict,
    SmokingConflict,
    PetsConflict,
    GuestFrequencyConflict,
}

/// A triggered reason together with the points its component contributed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonPoints {
    pub reason: MatchReason,
    pub points: u32,
}

/// Why a candidate scored the way it did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchExplanation {
    pub score: u32,
    #[serde(rename = "topReasons")]
    pub top_reasons: Vec<ReasonPoints>,
    pub conflicts: Vec<ConflictWarning>,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    /// Shared budget window as `(min, max)`, `(0, 0)` when the ranges are disjoint
    #[serde(rename = "budgetOverlap")]
    pub budget_overlap: (u32, u32),
}

impl MatchExplanation {
    pub fn has_reason(&self, reason: MatchReason) -> bool {
        self.top_reasons.iter().any(|r| r.reason == reason)
    }

    pub fn reason_points(&self, reason: MatchReason) -> Option<u32> {
        self.top_reasons
            .iter()
            .find(|r| r.reason == reason)
            .map(|r| r.points)
    }

    pub fn has_conflict(&self, conflict: ConflictWarning) -> bool {
        self.conflicts.contains(&conflict)
    }
}

/// Score of one candidate against a seeker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub score: u32,
    pub explanation: MatchExplanation,
}
