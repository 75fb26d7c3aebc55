//! Text output
//!
//! Progress bars and the multi-line progress report.

pub mod bar;
pub mod text;

pub use bar::{render_bar, render_styled, progress_ratio, filled_cells};
pub use text::{format_snapshot, format_snapshot_styled, display_snapshot, write_snapshot};
