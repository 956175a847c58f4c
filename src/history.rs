//! Result history kept as a CSV log, one row per finished test.

use crate::error::{Error, Result};
use crate::metrics::SessionResult;
use chrono::{DateTime, Local};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct HistoryRow {
    start_time: String,
    end_time: String,
    test_length: usize,
    punctuation: bool,
    wpm: f64,
    accuracy: f64,
}

impl From<&SessionResult> for HistoryRow {
    fn from(r: &SessionResult) -> Self {
        Self {
            start_time: r.start_time.to_rfc3339(),
            end_time: r.end_time.to_rfc3339(),
            test_length: r.test_length,
            punctuation: r.punctuation_enabled,
            wpm: r.wpm,
            accuracy: r.accuracy_percent,
        }
    }
}

impl TryFrom<HistoryRow> for SessionResult {
    type Error = Error;

    fn try_from(row: HistoryRow) -> Result<Self> {
        if !row.wpm.is_finite() || !row.accuracy.is_finite() {
            return Err(Error::History(format!(
                "non-finite score (wpm {}, accuracy {})",
                row.wpm, row.accuracy
            )));
        }
        Ok(SessionResult {
            test_length: row.test_length,
            punctuation_enabled: row.punctuation,
            start_time: parse_time(&row.start_time)?,
            end_time: parse_time(&row.end_time)?,
            wpm: row.wpm,
            accuracy_percent: row.accuracy,
        })
    }
}

fn parse_time(s: &str) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| Error::History(format!("invalid timestamp {s:?}: {e}")))
}

/// Append one result, writing the header first if the log is new
pub fn append_result(path: &Path, result: &SessionResult) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let needs_header = fs::metadata(path).map_or(true, |m| m.len() == 0);
    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer.serialize(HistoryRow::from(result))?;
    writer.flush()?;

    debug!(path = %path.display(), "appended result to history");
    Ok(())
}

/// All results in the log; a missing log is an empty history
pub fn read_results(path: &Path) -> Result<Vec<SessionResult>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_results_from(fs::File::open(path)?)
}

pub fn read_results_from<R: Read>(reader: R) -> Result<Vec<SessionResult>> {
    let mut reader = ReaderBuilder::new().from_reader(reader);
    reader
        .deserialize::<HistoryRow>()
        .map(|row| SessionResult::try_from(row?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone};
    use tempfile::tempdir;

    fn result(minute: u32, wpm: f64) -> SessionResult {
        let start = Local.with_ymd_and_hms(2025, 8, 28, 10, minute, 0).unwrap();
        SessionResult {
            test_length: 25,
            punctuation_enabled: true,
            start_time: start,
            end_time: start + Duration::milliseconds(41_250),
            wpm,
            accuracy_percent: 96.0,
        }
    }

    #[test]
    fn test_append_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("history.csv");

        append_result(&path, &result(1, 61.5)).unwrap();
        append_result(&path, &result(2, 64.25)).unwrap();

        let loaded = read_results(&path).unwrap();
        assert_eq!(loaded, vec![result(1, 61.5), result(2, 64.25)]);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("start_time").count(), 1);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let dir = tempdir().unwrap();
        assert!(read_results(&dir.path().join("none.csv")).unwrap().is_empty());
    }

    #[test]
    fn test_bad_timestamp() {
        let data = "start_time,end_time,test_length,punctuation,wpm,accuracy\n\
                    yesterday,2025-08-28T10:00:00+00:00,10,false,50.0,100.0\n";
        assert_matches!(read_results_from(data.as_bytes()), Err(Error::History(_)));
    }

    #[test]
    fn test_bad_number() {
        let data = "start_time,end_time,test_length,punctuation,wpm,accuracy\n\
                    2025-08-28T10:00:00+00:00,2025-08-28T10:01:00+00:00,ten,false,50.0,100.0\n";
        assert_matches!(read_results_from(data.as_bytes()), Err(Error::Csv(_)));
    }

    #[test]
    fn test_non_finite_scores_are_rejected() {
        for (wpm, accuracy) in [("NaN", "100.0"), ("inf", "100.0"), ("50.0", "-inf")] {
            let data = format!(
                "start_time,end_time,test_length,punctuation,wpm,accuracy\n\
                 2025-08-28T10:00:00+00:00,2025-08-28T10:01:00+00:00,10,false,{wpm},{accuracy}\n"
            );
            assert_matches!(
                read_results_from(data.as_bytes()),
                Err(Error::History(msg)) if msg.contains("non-finite")
            );
        }
    }
}
