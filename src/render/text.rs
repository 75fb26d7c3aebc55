//! Plain-text progress reports

use std::fmt;
use std::io::{self, Write};

use crate::config::BarStyle;
use crate::error::Result;
use crate::progression::{status_snapshot, status_snapshot_styled, Experience, StatusSnapshot};

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total XP:        {}", self.experience)?;
        writeln!(f, "Level:           {}", self.level)?;
        writeln!(f, "Level start XP:  {}", self.xp_at_level_start)?;
        writeln!(f, "Level progress:  {} / {}", self.xp_in_level, self.xp_for_level_up)?;
        writeln!(f, "XP to next:      {}", self.xp_needed)?;
        write!(f, "{} {}%", self.bar, self.percent())
    }
}

/// Report for `experience` with a bar `width` cells wide
pub fn format_snapshot(experience: Experience, width: usize) -> Result<String> {
    Ok(status_snapshot(experience, width)?.to_string())
}

/// Report for `experience` with a bar drawn in `style`
pub fn format_snapshot_styled(experience: Experience, style: &BarStyle) -> Result<String> {
    Ok(status_snapshot_styled(experience, style)?.to_string())
}

/// Write the report for `experience` to `out`, followed by a newline
pub fn write_snapshot<W: Write>(out: &mut W, experience: Experience, width: usize) -> Result<()> {
    let report = format_snapshot(experience, width)?;
    log::trace!("Writing progress report for {} XP", experience);

    writeln!(out, "{}", report)?;
    out.flush()?;
    Ok(())
}

/// Print the report for `experience` to stdout
pub fn display_snapshot(experience: Experience, width: usize) -> Result<()> {
    write_snapshot(&mut io::stdout().lock(), experience, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_snapshot() {
        let report = format_snapshot(1500, 20).unwrap();
        let expected = "\
Total XP:        1500
Level:           30
Level start XP:  1395
Level progress:  105 / 112
XP to next:      7
[###################-] 93%";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_format_snapshot_is_deterministic() {
        assert_eq!(format_snapshot(777, 10).unwrap(), format_snapshot(777, 10).unwrap());
    }

    #[test]
    fn test_format_snapshot_styled() {
        let style = BarStyle { width: 4, filled: '=', empty: ' ' };
        let report = format_snapshot_styled(0, &style).unwrap();
        assert!(report.ends_with("[    ] 0%"));
    }

    #[test]
    fn test_write_snapshot() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut out: Vec<u8> = Vec::new();
        write_snapshot(&mut out, 1500, 20).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, format!("{}\n", format_snapshot(1500, 20).unwrap()));
        assert!(written.ends_with("[###################-] 93%\n"));
    }

    #[test]
    fn test_write_snapshot_writes_nothing_on_error() {
        let mut out: Vec<u8> = Vec::new();
        assert!(write_snapshot(&mut out, 1500, 0).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_format_propagates_errors() {
        assert!(format_snapshot(10, 0).is_err());
    }
}
