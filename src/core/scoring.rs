use crate::core::compatibility::{CLEANLINESS_COMPATIBILITY, SLEEP_COMPATIBILITY};
use crate::core::distance::{profile_distance, round_km};
use crate::core::engine::{EngineVersion, MatchingEngine};
use crate::models::{ConflictWarning, MatchExplanation, MatchProfile, MatchReason, MatchResult, ReasonPoints};

pub const WEIGHT_BUDGET: u32 = 20;
pub const WEIGHT_LOCATION: u32 = 25;
pub const WEIGHT_CLEANLINESS: u32 = 15;
pub const WEIGHT_SLEEP: u32 = 10;
pub const WEIGHT_LIFESTYLE: u32 = 15;
pub const WEIGHT_AVAILABILITY: u32 = 10;
pub const WEIGHT_REPUTATION: u32 = 5;

/// Distance bands in kilometers
pub const DISTANCE_EXCELLENT_KM: f64 = 5.0;
pub const DISTANCE_GOOD_KM: f64 = 15.0;
pub const DISTANCE_ACCEPTABLE_KM: f64 = 30.0;
pub const DISTANCE_FAR_KM: f64 = 50.0;

pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Points for each lifestyle sub-check
const LIFESTYLE_EXACT_POINTS: u32 = 5;
const GUEST_ADJACENT_POINTS: u32 = 3;

const MAX_TOP_REASONS: usize = 3;

/// Weighted-heuristic compatibility scorer, algorithm version 1
///
/// Scoring formula (0-100):
/// ```text
/// budget overlap        20
/// location proximity    25
/// cleanliness           15
/// sleep schedule        10
/// lifestyle             15   (smoking 5, pets 5, guests 5)
/// availability          10
/// reputation             5
/// ```
///
/// Every fractional intermediate is truncated toward zero when it becomes
/// points, so the total is an exact sum of integer components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingEngineV1 {
    max_distance_km: f64,
}

impl MatchingEngineV1 {
    /// `max_distance_km` is recorded but the distance bands stay fixed.
    pub fn new(max_distance_km: f64) -> Self {
        Self { max_distance_km }
    }

    pub fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }
}

impl Default for MatchingEngineV1 {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE_KM)
    }
}

impl MatchingEngine for MatchingEngineV1 {
    fn version(&self) -> EngineVersion {
        EngineVersion::V1
    }

    fn calculate_match(&self, seeker: &MatchProfile, candidate: &MatchProfile) -> MatchResult {
        let mut score = 0;
        let mut reasons: Vec<ReasonPoints> = Vec::with_capacity(6);
        let mut conflicts: Vec<ConflictWarning> = Vec::new();

        // 1. Budget
        let (budget_points, budget_overlap) = score_budget(seeker, candidate);
        score += budget_points;
        if budget_points >= 15 {
            reasons.push(ReasonPoints { reason: MatchReason::BudgetMatch, points: budget_points });
        } else if budget_points < 10 {
            conflicts.push(ConflictWarning::BudgetMismatch);
        }

        // 2. Location
        let distance_km = profile_distance(seeker, candidate);
        let location_points = score_location(distance_km);
        score += location_points;
        if location_points >= 20 {
            reasons.push(ReasonPoints { reason: MatchReason::LocationClose, points: location_points });
        } else if distance_km > DISTANCE_ACCEPTABLE_KM {
            conflicts.push(ConflictWarning::LocationFar);
        }

        // 3. Cleanliness
        let cleanliness_points = score_cleanliness(seeker, candidate);
        score += cleanliness_points;
        if cleanliness_points >= 12 {
            reasons.push(ReasonPoints { reason: MatchReason::CleanlinessMatch, points: cleanliness_points });
        } else if cleanliness_points < 6 {
            conflicts.push(ConflictWarning::CleanlinessConflict);
        }

        // 4. Sleep schedule
        let sleep_points = score_sleep_schedule(seeker, candidate);
        score += sleep_points;
        if sleep_points >= 8 {
            reasons.push(ReasonPoints { reason: MatchReason::SleepScheduleMatch, points: sleep_points });
        } else if sleep_points < 4 {
            conflicts.push(ConflictWarning::SleepConflict);
        }

        // 5. Lifestyle
        let lifestyle = score_lifestyle(seeker, candidate);
        score += lifestyle.points;
        if lifestyle.points >= 12 {
            reasons.push(ReasonPoints { reason: MatchReason::LifestyleMatch, points: lifestyle.points });
        }
        conflicts.extend(lifestyle.conflicts);

        // 6. Availability
        let availability_points = score_availability(seeker, candidate);
        score += availability_points;
        if availability_points >= 8 {
            reasons.push(ReasonPoints { reason: MatchReason::AvailabilityMatch, points: availability_points });
        }

        // 7. Reputation
        score += score_reputation(candidate);

        // Stable sort keeps component order between equal points
        reasons.sort_by(|a, b| b.points.cmp(&a.points));
        reasons.truncate(MAX_TOP_REASONS);

        tracing::trace!(
            seeker = %seeker.user_id,
            candidate = %candidate.user_id,
            score,
            distance_km,
            conflicts = conflicts.len(),
            "scored candidate"
        );

        MatchResult {
            user_id: candidate.user_id.clone(),
            score,
            explanation: MatchExplanation {
                score,
                top_reasons: reasons,
                conflicts,
                distance_km: round_km(distance_km),
                budget_overlap,
            },
        }
    }
}

/// Truncate a non-negative fractional score to points, capped at its weight
#[inline]
fn to_points(value: f64, weight: u32) -> u32 {
    // `as` saturates at 0 for negatives and NaN
    (value.trunc() as u32).min(weight)
}

/// Budget overlap points and the shared `(min, max)` window
pub fn score_budget(seeker: &MatchProfile, candidate: &MatchProfile) -> (u32, (u32, u32)) {
    let overlap_min = seeker.budget_min.max(candidate.budget_min);
    let overlap_max = seeker.budget_max.min(candidate.budget_max);

    if overlap_max < overlap_min {
        return (0, (0, 0));
    }

    let overlap_range = f64::from(overlap_max - overlap_min);
    let seeker_range = f64::from(seeker.budget_max) - f64::from(seeker.budget_min);
    let candidate_range = f64::from(candidate.budget_max) - f64::from(candidate.budget_min);
    let avg_range = (seeker_range + candidate_range) / 2.0;

    let overlap_ratio = if avg_range == 0.0 {
        1.0
    } else {
        (overlap_range / avg_range).min(1.0)
    };

    let points = to_points(overlap_ratio * f64::from(WEIGHT_BUDGET), WEIGHT_BUDGET);
    (points, (overlap_min, overlap_max))
}

/// Location points for a distance, using the fixed v1 bands
pub fn score_location(distance_km: f64) -> u32 {
    let weight = f64::from(WEIGHT_LOCATION);

    let value = if distance_km <= DISTANCE_EXCELLENT_KM {
        weight
    } else if distance_km <= DISTANCE_GOOD_KM {
        let ratio = 1.0
            - ((distance_km - DISTANCE_EXCELLENT_KM) / (DISTANCE_GOOD_KM - DISTANCE_EXCELLENT_KM))
                * 0.2;
        weight * ratio
    } else if distance_km <= DISTANCE_ACCEPTABLE_KM {
        let ratio = 1.0
            - ((distance_km - DISTANCE_GOOD_KM) / (DISTANCE_ACCEPTABLE_KM - DISTANCE_GOOD_KM))
                * 0.4;
        weight * ratio * 0.8
    } else if distance_km <= DISTANCE_FAR_KM {
        let ratio = 1.0
            - ((distance_km - DISTANCE_ACCEPTABLE_KM) / (DISTANCE_FAR_KM - DISTANCE_ACCEPTABLE_KM));
        weight * ratio * 0.4
    } else {
        0.0
    };

    to_points(value, WEIGHT_LOCATION)
}

pub fn score_cleanliness(seeker: &MatchProfile, candidate: &MatchProfile) -> u32 {
    let coefficient = CLEANLINESS_COMPATIBILITY
        .coefficient(seeker.cleanliness_level, candidate.cleanliness_level);
    to_points(coefficient * f64::from(WEIGHT_CLEANLINESS), WEIGHT_CLEANLINESS)
}

pub fn score_sleep_schedule(seeker: &MatchProfile, candidate: &MatchProfile) -> u32 {
    let coefficient = SLEEP_COMPATIBILITY.coefficient(seeker.sleep_schedule, candidate.sleep_schedule);
    to_points(coefficient * f64::from(WEIGHT_SLEEP), WEIGHT_SLEEP)
}

/// Outcome of the three lifestyle sub-checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifestyleScore {
    pub points: u32,
    pub conflicts: Vec<ConflictWarning>,
}

pub fn score_lifestyle(seeker: &MatchProfile, candidate: &MatchProfile) -> LifestyleScore {
    let mut points = 0;
    let mut conflicts = Vec::new();

    if seeker.smoking_ok == candidate.smoking_ok {
        points += LIFESTYLE_EXACT_POINTS;
    } else if !seeker.smoking_ok && candidate.smoking_ok {
        conflicts.push(ConflictWarning::SmokingConflict);
    }

    if seeker.pets_ok == candidate.pets_ok {
        points += LIFESTYLE_EXACT_POINTS;
    } else if !seeker.pets_ok && candidate.pets_ok {
        conflicts.push(ConflictWarning::PetsConflict);
    }

    // A gap of exactly two levels earns nothing and raises nothing
    match (seeker.guest_frequency.level() - candidate.guest_frequency.level()).abs() {
        0 => points += LIFESTYLE_EXACT_POINTS,
        1 => points += GUEST_ADJACENT_POINTS,
        diff if diff >= 3 => conflicts.push(ConflictWarning::GuestFrequencyConflict),
        _ => {}
    }

    LifestyleScore {
        points: points.min(WEIGHT_LIFESTYLE),
        conflicts,
    }
}

/// Full points when the short/long-term interests intersect
///
/// Move-in date windows are not compared.
pub fn score_availability(seeker: &MatchProfile, candidate: &MatchProfile) -> u32 {
    let short = seeker.looking_for_short_term && candidate.looking_for_short_term;
    let long = seeker.looking_for_long_term && candidate.looking_for_long_term;

    if short || long {
        WEIGHT_AVAILABILITY
    } else {
        0
    }
}

/// Linear bonus from the candidate's reputation only
pub fn score_reputation(candidate: &MatchProfile) -> u32 {
    let value = (f64::from(candidate.reputation_score) / 100.0) * f64::from(WEIGHT_REPUTATION);
    to_points(value, WEIGHT_REPUTATION)
}
