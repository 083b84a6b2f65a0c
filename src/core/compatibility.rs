use crate::models::{CleanlinessLevel, SleepSchedule};

/// Symmetric pairwise compatibility coefficients between category values
///
/// A pair is looked up in both orderings; pairs that are not listed fall back
/// to `default`.
#[derive(Debug)]
pub struct CompatibilityTable<T: 'static> {
    entries: &'static [((T, T), f64)],
    default: f64,
}

impl<T: Copy + PartialEq> CompatibilityTable<T> {
    pub const fn new(entries: &'static [((T, T), f64)], default: f64) -> Self {
        Self { entries, default }
    }

    /// Coefficient in `0.0..=1.0` for the unordered pair `(a, b)`
    pub fn coefficient(&self, a: T, b: T) -> f64 {
        self.entries
            .iter()
            .find(|((x, y), _)| (*x == a && *y == b) || (*x == b && *y == a))
            .map(|(_, coefficient)| *coefficient)
            .unwrap_or(self.default)
    }
}

pub static CLEANLINESS_COMPATIBILITY: CompatibilityTable<CleanlinessLevel> = {
    use CleanlinessLevel::*;
    CompatibilityTable::new(
        &[
            ((VeryClean, VeryClean), 1.0),
            ((VeryClean, Clean), 0.8),
            ((VeryClean, Moderate), 0.4),
            ((VeryClean, Relaxed), 0.0),
            ((Clean, Clean), 1.0),
            ((Clean, Moderate), 0.7),
            ((Clean, Relaxed), 0.3),
            ((Moderate, Moderate), 1.0),
            ((Moderate, Relaxed), 0.7),
            ((Relaxed, Relaxed), 1.0),
        ],
        0.5,
    )
};

pub static SLEEP_COMPATIBILITY: CompatibilityTable<SleepSchedule> = {
    use SleepSchedule::*;
    CompatibilityTable::new(
        &[
            ((EarlyBird, EarlyBird), 1.0),
            ((EarlyBird, Normal), 0.7),
            ((EarlyBird, NightOwl), 0.2),
            ((Normal, Normal), 1.0),
            ((Normal, NightOwl), 0.7),
            ((NightOwl, NightOwl), 1.0),
        ],
        0.5,
    )
};
