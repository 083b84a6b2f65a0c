use std::cmp::Ordering;

use crate::config::MatchingSettings;
use crate::core::engine::{build_engine, EngineError, MatchingEngine};
use crate::core::scoring::MatchingEngineV1;
use crate::models::{MatchProfile, MatchResult};

/// Threshold and page-size policy applied around the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingOptions {
    pub min_score: u32,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            min_score: 30,
            default_limit: 20,
            max_limit: 100,
        }
    }
}

impl From<&MatchingSettings> for RankingOptions {
    fn from(settings: &MatchingSettings) -> Self {
        Self {
            min_score: settings.min_score_threshold,
            default_limit: settings.default_limit,
            max_limit: settings.max_limit,
        }
    }
}

/// Per-call overrides of the ranking options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: Option<usize>,
    pub offset: usize,
    pub min_score: Option<u32>,
}

/// One ranked page of results
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatches {
    pub matches: Vec<MatchResult>,
    /// Candidates handed in, before any filtering
    pub total_candidates: usize,
    /// Results that cleared the threshold, before pagination
    pub total_results: usize,
    pub next_offset: Option<usize>,
}

/// Ranks a candidate pool against a seeker
///
/// # Pipeline Stages
/// 1. Drop the seeker from its own candidate pool
/// 2. Score every candidate with the engine
/// 3. Keep results at or above the minimum score
/// 4. Sort by score (descending), then distance (ascending)
/// 5. Slice out the requested page
pub struct Matcher {
    engine: Box<dyn MatchingEngine>,
    options: RankingOptions,
}

impl Matcher {
    pub fn new(engine: Box<dyn MatchingEngine>, options: RankingOptions) -> Self {
        Self { engine, options }
    }

    /// Build the configured engine and ranking policy
    pub fn from_settings(settings: &MatchingSettings) -> Result<Self, EngineError> {
        Ok(Self::new(build_engine(settings)?, RankingOptions::from(settings)))
    }

    pub fn engine(&self) -> &dyn MatchingEngine {
        self.engine.as_ref()
    }

    pub fn options(&self) -> RankingOptions {
        self.options
    }

    /// Score and rank `candidates` for `seeker`
    ///
    /// Profiles are expected to be validated already.
    pub fn find_matches(
        &self,
        seeker: &MatchProfile,
        candidates: &[MatchProfile],
        page: PageRequest,
    ) -> RankedMatches {
        let total_candidates = candidates.len();
        let min_score = page.min_score.unwrap_or(self.options.min_score);
        let limit = page
            .limit
            .unwrap_or(self.options.default_limit)
            .min(self.options.max_limit);

        let mut results: Vec<MatchResult> = candidates
            .iter()
            .filter(|candidate| candidate.user_id != seeker.user_id)
            .map(|candidate| self.engine.calculate_match(seeker, candidate))
            .filter(|result| result.score >= min_score)
            .collect();

        // Stable: equal score and distance keep input order
        results.sort_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| {
                a.explanation
                    .distance_km
                    .partial_cmp(&b.explanation.distance_km)
                    .unwrap_or(Ordering::Equal)
            })
        });

        let total_results = results.len();
        let matches: Vec<MatchResult> = results
            .into_iter()
            .skip(page.offset)
            .take(limit)
            .collect();

        let consumed = page.offset.saturating_add(matches.len());
        let next_offset = (consumed < total_results).then_some(consumed);

        tracing::debug!(
            seeker = %seeker.user_id,
            engine = %self.engine.version(),
            total_candidates,
            total_results,
            returned = matches.len(),
            min_score,
            "ranked candidates"
        );

        RankedMatches {
            matches,
            total_candidates,
            total_results,
            next_offset,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Box::new(MatchingEngineV1::default()), RankingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CleanlinessLevel, GuestFrequency, SleepSchedule};

    fn create_candidate(id: &str, lat: f64, lon: f64, budget_min: u32, budget_max: u32) -> MatchProfile {
        MatchProfile {
            user_id: id.to_string(),
            age: 26,
            city: "San Francisco".to_string(),
            latitude: lat,
            longitude: lon,
            looking_for_short_term: false,
            looking_for_long_term: true,
            move_in_earliest: None,
            move_in_latest: None,
            budget_min,
            budget_max,
            cleanliness_level: CleanlinessLevel::Clean,
            sleep_schedule: SleepSchedule::Normal,
            smoking_ok: false,
            drinking_ok: true,
            pets_ok: false,
            guest_frequency: GuestFrequency::Sometimes,
            is_student: false,
            is_working: true,
            reputation_score: 100,
        }
    }

    fn seeker() -> MatchProfile {
        create_candidate("seeker", 37.7749, -122.4194, 1000, 1500)
    }

    #[test]
    fn test_seeker_excluded_from_own_pool() {
        let matcher = Matcher::default();
        let seeker = seeker();
        let candidates = vec![seeker.clone(), create_candidate("1", 37.7749, -122.4194, 1000, 1500)];

        let ranked = matcher.find_matches(&seeker, &candidates, PageRequest::default());

        assert_eq!(ranked.total_candidates, 2);
        assert_eq!(ranked.matches.len(), 1);
        assert_eq!(ranked.matches[0].user_id, "1");
    }

    #[test]
    fn test_matches_sorted_by_score_then_distance() {
        let matcher = Matcher::default();
        let seeker = seeker();
        let candidates = vec![
            create_candidate("partial_budget", 37.7749, -122.4194, 1200, 1800),
            create_candidate("farther", 37.79, -122.4194, 1000, 1500),
            create_candidate("closest", 37.7749, -122.4194, 1000, 1500),
        ];

        let ranked = matcher.find_matches(&seeker, &candidates, PageRequest::default());
        let ids: Vec<&str> = ranked.matches.iter().map(|m| m.user_id.as_str()).collect();

        assert_eq!(ids, vec!["closest", "farther", "partial_budget"]);
        for pair in ranked.matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_below_threshold_dropped() {
        let matcher = Matcher::default();
        let seeker = seeker();
        let mut poor = create_candidate("poor", 40.7128, -74.0060, 3000, 4000);
        poor.cleanliness_level = CleanlinessLevel::Relaxed;
        poor.sleep_schedule = SleepSchedule::NightOwl;
        poor.smoking_ok = true;
        poor.pets_ok = true;
        poor.looking_for_long_term = false;
        poor.looking_for_short_term = true;

        let ranked = matcher.find_matches(&seeker, &[poor], PageRequest::default());

        assert_eq!(ranked.total_candidates, 1);
        assert_eq!(ranked.total_results, 0);
        assert!(ranked.matches.is_empty());
        assert_eq!(ranked.next_offset, None);
    }

    #[test]
    fn test_min_score_override() {
        let matcher = Matcher::default();
        let seeker = seeker();
        let candidates = vec![
            create_candidate("full", 37.7749, -122.4194, 1000, 1500),
            create_candidate("partial_budget", 37.7749, -122.4194, 1200, 1800),
        ];

        let page = PageRequest {
            min_score: Some(100),
            ..PageRequest::default()
        };
        let ranked = matcher.find_matches(&seeker, &candidates, page);

        assert_eq!(ranked.total_results, 1);
        assert_eq!(ranked.matches[0].user_id, "full");
    }

    #[test]
    fn test_pagination() {
        let matcher = Matcher::default();
        let seeker = seeker();
        let candidates: Vec<MatchProfile> = (0..7)
            .map(|i| create_candidate(&i.to_string(), 37.7749 + i as f64 * 0.001, -122.4194, 1000, 1500))
            .collect();

        let first = matcher.find_matches(&seeker, &candidates, PageRequest { limit: Some(3), ..PageRequest::default() });
        assert_eq!(first.matches.len(), 3);
        assert_eq!(first.total_results, 7);
        assert_eq!(first.next_offset, Some(3));

        let last = matcher.find_matches(&seeker, &candidates, PageRequest { limit: Some(3), offset: 6, min_score: None });
        assert_eq!(last.matches.len(), 1);
        assert_eq!(last.next_offset, None);

        let beyond = matcher.find_matches(&seeker, &candidates, PageRequest { limit: Some(3), offset: 50, min_score: None });
        assert!(beyond.matches.is_empty());
        assert_eq!(beyond.next_offset, None);
    }

    #[test]
    fn test_limit_capped_at_max() {
        let options = RankingOptions {
            min_score: 0,
            default_limit: 2,
            max_limit: 4,
        };
        let matcher = Matcher::new(Box::new(MatchingEngineV1::default()), options);
        let seeker = seeker();
        let candidates: Vec<MatchProfile> = (0..10)
            .map(|i| create_candidate(&i.to_string(), 37.7749, -122.4194, 1000, 1500))
            .collect();

        assert_eq!(matcher.find_matches(&seeker, &candidates, PageRequest::default()).matches.len(), 2);

        let page = PageRequest { limit: Some(50), ..PageRequest::default() };
        assert_eq!(matcher.find_matches(&seeker, &candidates, page).matches.len(), 4);
    }
}
