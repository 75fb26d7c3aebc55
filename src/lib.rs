//! Xpcurve - level and experience progression
//!
//! Turns a cumulative experience total into a level, the progress made
//! inside that level, and a plain-text progress bar.

pub mod error;
pub mod config;
pub mod progression;
pub mod render;

// Re-export commonly used types
pub use error::{ProgressionError, Result};
pub use config::{BarStyle, DEFAULT_BAR_WIDTH};
pub use progression::*;
pub use render::{render_bar, progress_ratio, format_snapshot, format_snapshot_styled, display_snapshot, write_snapshot};
