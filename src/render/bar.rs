//! ASCII progress bars

use crate::config::BarStyle;
use crate::error::{ProgressionError, Result};

/// Fraction of `total` covered by `current`, capped at 1.0
pub fn progress_ratio(current: u64, total: u64) -> Result<f64> {
    if total == 0 {
        return Err(ProgressionError::ZeroTotal);
    }
    Ok((current as f64 / total as f64).min(1.0))
}

/// Number of filled cells for `ratio` in a bar `width` cells wide
///
/// Rounds half away from zero.
pub fn filled_cells(ratio: f64, width: usize) -> usize {
    ((ratio * width as f64).round() as usize).min(width)
}

/// Bracketed `#`/`-` bar `width` cells wide, e.g. `[#####-----]`
pub fn render_bar(current: u64, total: u64, width: usize) -> Result<String> {
    render_styled(current, total, &BarStyle::with_width(width))
}

/// Bracketed bar drawn with the markers of `style`
pub fn render_styled(current: u64, total: u64, style: &BarStyle) -> Result<String> {
    if style.width == 0 {
        return Err(ProgressionError::ZeroWidth);
    }
    let ratio = progress_ratio(current, total)?;
    let filled = filled_cells(ratio, style.width);

    let mut bar = String::with_capacity(style.width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(style.filled).take(filled));
    bar.extend(std::iter::repeat(style.empty).take(style.width - filled));
    bar.push(']');
    Ok(bar)
}
