//! Replaying experience gains
//!
//! Applies a sequence of XP deltas to a starting total and records a
//! snapshot after every delta. Deltas are normally gains, but negative
//! ones are applied as given.

use serde::{Deserialize, Serialize};

use super::status::{status_snapshot, StatusSnapshot};
use super::xp::{level_from_experience, Experience, Level};
use crate::error::{ProgressionError, Result};

/// Result of replaying a sequence of gains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Total XP before the first gain
    pub initial_experience: Experience,
    /// Total XP after the last gain
    pub final_experience: Experience,
    /// One snapshot per gain, in order
    pub steps: Vec<StatusSnapshot>,
}

/// A step that moved the total into a higher level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    /// Index into [`Simulation::steps`]
    pub step: usize,
    pub from: Level,
    pub to: Level,
}

impl Simulation {
    /// Snapshot after the `index`-th gain
    pub fn step(&self, index: usize) -> Option<&StatusSnapshot> {
        self.steps.get(index)
    }

    /// Steps whose level is above the level before them
    pub fn level_ups(&self) -> Vec<LevelUp> {
        let mut previous = level_from_experience(self.initial_experience);
        let mut ups = Vec::new();
        for (step, snapshot) in self.steps.iter().enumerate() {
            if snapshot.level > previous {
                ups.push(LevelUp { step, from: previous, to: snapshot.level });
            }
            previous = snapshot.level;
        }
        ups
    }
}

/// Apply `gains` to `initial_experience` in order, snapshotting each total
///
/// Fails with [`ProgressionError::ExperienceOutOfRange`] if a running total
/// drops below zero or passes `u64::MAX`.
pub fn simulate_gains(
    initial_experience: Experience,
    gains: &[i64],
    width: usize,
) -> Result<Simulation> {
    let mut total = initial_experience;
    let mut level = level_from_experience(initial_experience);
    let mut steps = Vec::with_capacity(gains.len());

    for &gain in gains {
        total = total
            .checked_add_signed(gain)
            .ok_or(ProgressionError::ExperienceOutOfRange)?;
        let snapshot = status_snapshot(total, width)?;
        if snapshot.level > level {
            log::debug!("Level up: {} -> {} at {} XP", level, snapshot.level, total);
        } else if snapshot.level < level {
            log::debug!("Level down: {} -> {} at {} XP", level, snapshot.level, total);
        }
        level = snapshot.level;
        steps.push(snapshot);
    }

    Ok(Simulation {
        initial_experience,
        final_experience: total,
        steps,
    })
}
