//! Progression math
//!
//! Level costs, thresholds, snapshots, and gain replays.

pub mod xp;
pub mod status;
pub mod simulation;

pub use xp::{Level, Experience, ThresholdEntry};
pub use xp::{level_up_cost, cumulative_threshold, checked_cumulative_threshold};
pub use xp::{level_from_experience, level_and_progress};
pub use xp::{experience_between_levels, experience_at_percent, threshold_table};
pub use status::{StatusSnapshot, status, status_snapshot, status_snapshot_styled};
pub use status::{remaining_to_next_level, percent_complete_in_level};
pub use simulation::{Simulation, LevelUp, simulate_gains};
