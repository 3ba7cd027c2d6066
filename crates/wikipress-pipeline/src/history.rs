//! Revision history lookups used to derive page weights.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::path::Path;
use std::process::Command;
use wikipress_core::Result;

/// Smallest weight, given to the newest notes
pub const MIN_WEIGHT: i64 = 1;
/// Largest weight, given to the oldest notes
pub const MAX_WEIGHT: i64 = 3_000_000;

/// Source of last-modification dates for notes
pub trait RevisionHistory {
    /// Date of the last commit touching `path`, if the file has any history.
    fn last_commit_date(&self, path: &Path) -> Result<Option<DateTime<FixedOffset>>>;
}

/// Reads commit dates with `git log`
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHistory;

impl RevisionHistory for GitHistory {
    fn last_commit_date(&self, path: &Path) -> Result<Option<DateTime<FixedOffset>>> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let output = match Command::new("git")
            .arg("log")
            .arg("-1")
            .arg("--format=%cI")
            .arg("--")
            .arg(path.file_name().unwrap_or(path.as_os_str()))
            .current_dir(dir)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                log::debug!("git unavailable for {}: {}", path.display(), e);
                return Ok(None);
            }
        };

        if !output.status.success() {
            log::debug!(
                "git log failed for {}: {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.trim();
        if line.is_empty() {
            return Ok(None);
        }
        match DateTime::parse_from_rfc3339(line) {
            Ok(date) => Ok(Some(date)),
            Err(e) => {
                log::debug!("Unparseable commit date '{line}' for {}: {e}", path.display());
                Ok(None)
            }
        }
    }
}

/// Map a date onto `[MIN_WEIGHT, MAX_WEIGHT]`, newer dates getting smaller weights.
///
/// The scale runs linearly from 2017-01-01 to the end of 2030; dates
/// outside it are clamped.
pub fn interpolate_weight(date: DateTime<FixedOffset>) -> i64 {
    let (Some(start), Some(end)) = (
        Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).single(),
        Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 59).single(),
    ) else {
        return MAX_WEIGHT;
    };

    let span = (end - start).num_seconds() as f64;
    let elapsed = (date.with_timezone(&Utc) - start).num_seconds() as f64;
    let fraction = (elapsed / span).clamp(0.0, 1.0);
    let forward = MIN_WEIGHT as f64 + fraction * (MAX_WEIGHT - MIN_WEIGHT) as f64;
    MAX_WEIGHT + MIN_WEIGHT - forward.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_weight_bounds() {
        assert_eq!(interpolate_weight(date("2017-01-01T00:00:00Z")), MAX_WEIGHT);
        assert_eq!(interpolate_weight(date("2030-12-31T23:59:59Z")), MIN_WEIGHT);
        assert_eq!(interpolate_weight(date("2001-01-01T00:00:00Z")), MAX_WEIGHT);
        assert_eq!(interpolate_weight(date("2040-06-01T12:00:00+02:00")), MIN_WEIGHT);
    }

    #[test]
    fn test_newer_is_lighter() {
        let older = interpolate_weight(date("2019-03-01T10:00:00+01:00"));
        let newer = interpolate_weight(date("2024-03-01T10:00:00+01:00"));
        assert!(newer < older);
        assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&older));
    }

    #[test]
    fn test_missing_file_has_no_history() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("untracked.md");
        std::fs::write(&path, "x").unwrap();
        assert_eq!(GitHistory.last_commit_date(&path).unwrap(), None);
    }
}
