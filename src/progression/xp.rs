//! Experience and leveling
//!
//! Level-up costs, cumulative thresholds, and the inverse lookup from
//! total XP back to a level.
//!
//! The cost curve has three bands:
//!
//! | Levels  | Cost to next level |
//! |---------|--------------------|
//! | 0..16   | `2L + 7`           |
//! | 16..31  | `5L - 38`          |
//! | 31..    | `9L - 158`         |
//!
//! Thresholds are the closed-form running sums of those costs. Every
//! threshold numerator is even, so halving is exact in integer arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::{ProgressionError, Result};

/// Progression tier, starting at 0
pub type Level = u32;

/// Cumulative experience points
pub type Experience = u64;

/// Total XP to reach the middle band (level 16)
const MID_BAND_THRESHOLD: u64 = 352;

/// Total XP to reach the steep band (level 31)
const HIGH_BAND_THRESHOLD: u64 = 1507;

/// XP needed to go from `level` to `level + 1`
pub fn level_up_cost(level: Level) -> u64 {
    let l = u64::from(level);
    match level {
        0..=15 => 2 * l + 7,
        16..=30 => 5 * l - 38,
        _ => 9 * l - 158,
    }
}

/// Total XP needed to reach `level` from zero
///
/// Exact for every level whose threshold fits in a `u64` (levels below
/// roughly two billion). Past that the result saturates at `u64::MAX`; use
/// [`checked_cumulative_threshold`] to tell the two apart.
pub fn cumulative_threshold(level: Level) -> Experience {
    checked_cumulative_threshold(level).unwrap_or(Experience::MAX)
}

/// Total XP needed to reach `level`, or `None` if it does not fit in a `u64`
pub fn checked_cumulative_threshold(level: Level) -> Option<Experience> {
    Experience::try_from(threshold_wide(u64::from(level))).ok()
}

/// Threshold in 128-bit arithmetic so lookups near `u64::MAX` can probe one
/// level past the representable range.
fn threshold_wide(level: u64) -> u128 {
    let l = u128::from(level);
    match level {
        0 => 0,
        1..=16 => l * l + 6 * l,
        17..=31 => (5 * l * l + 720 - 81 * l) / 2,
        _ => (9 * l * l + 4440 - 325 * l) / 2,
    }
}

/// Level reached with `experience` total XP
///
/// Solves the band's quadratic directly, then nudges the estimate against
/// the exact integer thresholds so float rounding can never leak through.
pub fn level_from_experience(experience: Experience) -> Level {
    let x = experience as f64;
    let estimate = if experience < MID_BAND_THRESHOLD {
        (x + 9.0).sqrt() - 3.0
    } else if experience < HIGH_BAND_THRESHOLD {
        (81.0 + (40.0 * x - 7839.0).sqrt()) / 10.0
    } else {
        (325.0 + (72.0 * x - 54215.0).sqrt()) / 18.0
    };

    let target = u128::from(experience);
    let mut level = estimate.max(0.0) as u64;
    while level > 0 && threshold_wide(level) > target {
        level -= 1;
    }
    while threshold_wide(level + 1) <= target {
        level += 1;
    }

    // u64::MAX XP is reached around level 2.02e9, well inside u32
    level as Level
}

/// Level and XP earned inside that level
pub fn level_and_progress(experience: Experience) -> (Level, u64) {
    let level = level_from_experience(experience);
    (level, experience - cumulative_threshold(level))
}

/// XP between the start of two levels
pub fn experience_between_levels(start: Level, end: Level) -> Result<u64> {
    if start > end {
        return Err(ProgressionError::InvalidRange { start, end });
    }
    let end_threshold =
        checked_cumulative_threshold(end).ok_or(ProgressionError::ExperienceOutOfRange)?;
    Ok(end_threshold - cumulative_threshold(start))
}

/// XP worth `percent` of the cost of `level`, rounded half away from zero
///
/// `percent` is expected in `[0, 1]` but not checked.
pub fn experience_at_percent(level: Level, percent: f64) -> u64 {
    (percent * level_up_cost(level) as f64).round() as u64
}

/// One row of a threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdEntry {
    pub level: Level,
    pub threshold: Experience,
}

/// Thresholds for levels `0..=up_to_level`, in order
pub fn threshold_table(up_to_level: Level) -> Vec<ThresholdEntry> {
    (0..=up_to_level)
        .map(|level| ThresholdEntry {
            level,
            threshold: cumulative_threshold(level),
        })
        .collect()
}
