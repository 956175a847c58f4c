use crate::metrics::SessionResult;
use crate::util::mean;
use chrono::{Duration, NaiveDate};
use itertools::Itertools;
use std::collections::HashSet;

/// Anything that keeps finished results around
pub trait ResultStore {
    fn record(&mut self, result: &SessionResult) -> crate::error::Result<()>;
    fn results(&self) -> crate::error::Result<Vec<SessionResult>>;
}

/// In-process store, mostly for hosts without persistence and for tests
#[derive(Debug, Default, Clone)]
pub struct MemoryResultStore {
    results: Vec<SessionResult>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryResultStore {
    fn record(&mut self, result: &SessionResult) -> crate::error::Result<()> {
        self.results.push(result.clone());
        Ok(())
    }

    fn results(&self) -> crate::error::Result<Vec<SessionResult>> {
        Ok(self.results.clone())
    }
}

/// Fastest result for each (test length, punctuation) pairing, fastest first
pub fn personal_bests(results: &[SessionResult]) -> Vec<SessionResult> {
    results
        .iter()
        .into_group_map_by(|r| (r.test_length, r.punctuation_enabled))
        .into_values()
        .filter_map(|group| group.into_iter().max_by(|a, b| a.wpm.total_cmp(&b.wpm)))
        .sorted_by(|a, b| {
            b.wpm
                .total_cmp(&a.wpm)
                .then(a.test_length.cmp(&b.test_length))
                .then(a.punctuation_enabled.cmp(&b.punctuation_enabled))
        })
        .cloned()
        .collect()
}

/// Consecutive days with at least one session, counted back from today.
///
/// A run that ended yesterday still counts, since today is not over yet.
pub fn typing_streak<I>(session_days: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: HashSet<NaiveDate> = session_days.into_iter().collect();
    let yesterday = today - Duration::days(1);

    let mut day = if days.contains(&today) {
        today
    } else if days.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// Streak over stored results, using each result's local start date
pub fn result_streak(results: &[SessionResult], today: NaiveDate) -> u32 {
    typing_streak(results.iter().map(|r| r.start_time.date_naive()), today)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub sessions: usize,
    pub average_wpm: f64,
    pub average_accuracy: f64,
    pub best_wpm: f64,
}

/// Headline numbers over a set of results; None when there are none
pub fn summarize(results: &[SessionResult]) -> Option<Summary> {
    let wpms: Vec<f64> = results.iter().map(|r| r.wpm).collect();
    let accuracies: Vec<f64> = results.iter().map(|r| r.accuracy_percent).collect();

    Some(Summary {
        sessions: results.len(),
        average_wpm: mean(&wpms)?,
        average_accuracy: mean(&accuracies)?,
        best_wpm: wpms.iter().copied().fold(f64::MIN, f64::max),
    })
}
