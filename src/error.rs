//! Error types for progression queries

use thiserror::Error;

use crate::progression::Level;

/// Everything that can go wrong while computing or rendering progress
#[derive(Debug, Error)]
pub enum ProgressionError {
    #[error("invalid level range: start level {start} is above end level {end}")]
    InvalidRange { start: Level, end: Level },

    #[error("progress total is zero")]
    ZeroTotal,

    #[error("progress bar width must be at least 1")]
    ZeroWidth,

    #[error("experience total left the range 0..=u64::MAX")]
    ExperienceOutOfRange,

    #[error("invalid bar style: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProgressionError>;
