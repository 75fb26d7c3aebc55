//! Progress snapshots
//!
//! A [`StatusSnapshot`] bundles everything a caller needs to show a single
//! experience total: level, position inside the level, and a rendered bar.

use serde::{Deserialize, Serialize};

use super::xp::{
    cumulative_threshold, level_and_progress, level_from_experience, level_up_cost, Experience,
    Level,
};
use crate::config::{BarStyle, DEFAULT_BAR_WIDTH};
use crate::error::Result;
use crate::render::bar::progress_ratio;

/// Progress for one experience total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Total XP earned
    pub experience: Experience,
    /// Current level
    pub level: Level,
    /// Total XP at which the current level began
    pub xp_at_level_start: Experience,
    /// XP earned since the current level began
    pub xp_in_level: u64,
    /// Cost of the current level
    pub xp_for_level_up: u64,
    /// XP still missing for the next level
    pub xp_needed: u64,
    /// `xp_in_level / xp_for_level_up`, in `[0, 1]`
    pub progress_ratio: f64,
    /// Rendered progress bar
    pub bar: String,
}

impl StatusSnapshot {
    /// Whole percent of the current level completed (floored)
    pub fn percent(&self) -> u8 {
        floored_percent(self.progress_ratio)
    }
}

/// Ratio in `[0, 1]` as a whole percent, rounded down
fn floored_percent(ratio: f64) -> u8 {
    (ratio * 100.0).floor() as u8
}

/// Snapshot with a default-styled bar `width` cells wide
pub fn status_snapshot(experience: Experience, width: usize) -> Result<StatusSnapshot> {
    status_snapshot_styled(experience, &BarStyle::with_width(width))
}

/// Snapshot with the default 20-cell bar
pub fn status(experience: Experience) -> Result<StatusSnapshot> {
    status_snapshot(experience, DEFAULT_BAR_WIDTH)
}

/// Snapshot with a bar drawn in `style`
pub fn status_snapshot_styled(experience: Experience, style: &BarStyle) -> Result<StatusSnapshot> {
    let level = level_from_experience(experience);
    let xp_at_level_start = cumulative_threshold(level);
    let xp_in_level = experience - xp_at_level_start;
    let xp_for_level_up = level_up_cost(level);
    let xp_needed = xp_for_level_up - xp_in_level;
    let progress_ratio = progress_ratio(xp_in_level, xp_for_level_up)?;
    let bar = style.render(xp_in_level, xp_for_level_up)?;

    Ok(StatusSnapshot {
        experience,
        level,
        xp_at_level_start,
        xp_in_level,
        xp_for_level_up,
        xp_needed,
        progress_ratio,
        bar,
    })
}

/// XP still missing for the next level
pub fn remaining_to_next_level(experience: Experience) -> u64 {
    let (level, xp_in_level) = level_and_progress(experience);
    level_up_cost(level) - xp_in_level
}

/// Whole percent of the current level completed, in `[0, 100]`
pub fn percent_complete_in_level(experience: Experience) -> Result<u8> {
    let (level, xp_in_level) = level_and_progress(experience);
    Ok(floored_percent(progress_ratio(xp_in_level, level_up_cost(level))?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_snapshot_mid_level() {
        let snapshot = status(1500).unwrap();
        assert_eq!(snapshot.experience, 1500);
        assert_eq!(snapshot.level, 30);
        assert_eq!(snapshot.xp_at_level_start, 1395);
        assert_eq!(snapshot.xp_in_level, 105);
        assert_eq!(snapshot.xp_for_level_up, 112);
        assert_eq!(snapshot.xp_needed, 7);
        assert_eq!(snapshot.progress_ratio, 0.9375);
        assert_eq!(snapshot.bar, "[###################-]");
        assert_eq!(snapshot.percent(), 93);
    }

    #[test]
    fn test_status_snapshot_at_zero() {
        let snapshot = status(0).unwrap();
        assert_eq!(snapshot.level, 0);
        assert_eq!(snapshot.xp_in_level, 0);
        assert_eq!(snapshot.xp_for_level_up, 7);
        assert_eq!(snapshot.xp_needed, 7);
        assert_eq!(snapshot.progress_ratio, 0.0);
        assert_eq!(snapshot.bar, format!("[{}]", "-".repeat(20)));
    }

    #[test]
    fn test_status_snapshot_fields_are_consistent() {
        for xp in (0..5_000).step_by(7) {
            let s = status_snapshot(xp, 12).unwrap();
            assert_eq!(s.xp_at_level_start + s.xp_in_level, xp);
            assert_eq!(s.xp_in_level + s.xp_needed, s.xp_for_level_up);
            assert!(s.xp_in_level < s.xp_for_level_up);
            assert!((0.0..1.0).contains(&s.progress_ratio));
            assert_eq!(s.bar.chars().count(), 14);
        }
    }

    #[test]
    fn test_status_snapshot_is_repeatable() {
        for xp in [0, 7, 351, 352, 1500, 1507, 99_999] {
            assert_eq!(status(xp).unwrap(), status(xp).unwrap());
        }
    }

    #[test]
    fn test_status_snapshot_styled() {
        let style = BarStyle { width: 8, filled: '*', empty: '.' };
        let snapshot = status_snapshot_styled(1500, &style).unwrap();
        assert_eq!(snapshot.bar, "[********]"); // 7.5 cells rounds up
    }

    #[test]
    fn test_status_snapshot_rejects_zero_width() {
        assert!(status_snapshot(100, 0).is_err());
    }

    #[test]
    fn test_remaining_to_next_level() {
        assert_eq!(remaining_to_next_level(0), 7);
        assert_eq!(remaining_to_next_level(1500), 7);
        assert_eq!(remaining_to_next_level(1507), 121);
    }

    #[test]
    fn test_remaining_at_u64_max() {
        let snapshot = status(u64::MAX).unwrap();
        assert_eq!(remaining_to_next_level(u64::MAX), 17_500_618_642);
        assert_eq!(remaining_to_next_level(u64::MAX), snapshot.xp_needed);
        assert_eq!(percent_complete_in_level(u64::MAX).unwrap(), snapshot.percent());
    }

    #[test]
    fn test_percent_complete_in_level() {
        assert_eq!(percent_complete_in_level(0).unwrap(), 0);
        assert_eq!(percent_complete_in_level(1500).unwrap(), 93);
        assert_eq!(percent_complete_in_level(1506).unwrap(), 99);
        assert_eq!(percent_complete_in_level(1507).unwrap(), 0);
    }

    #[test]
    fn test_snapshot_serializes_field_names() {
        let json = serde_json::to_value(status(1500).unwrap()).unwrap();
        assert_eq!(json["level"], 30);
        assert_eq!(json["xp_at_level_start"], 1395);
        assert_eq!(json["xp_needed"], 7);
        assert_eq!(json["progress_ratio"], 0.9375);
    }
}
