//! Speed and accuracy derived from a typing session.
//!
//! Everything here reads a session without changing it. While a session is
//! still in progress, elapsed time runs against the session's clock; once it
//! has finished, the recorded end time is used and the numbers stay put.

use crate::clock::Clock;
use crate::session::TypingSession;
use crate::word::WordUnit;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Characters per "word" in the WPM convention
pub const CHARS_PER_WORD: f64 = 5.0;

/// Seconds since the first keystroke, 0 before it
pub fn elapsed_seconds<C: Clock>(session: &TypingSession<C>) -> f64 {
    match session.started_at() {
        None => 0.0,
        Some(start) => {
            let end = session.ended_at().unwrap_or_else(|| session.clock().now());
            (end - start).num_milliseconds() as f64 / 1000.0
        }
    }
}

pub fn correct_word_count<C: Clock>(session: &TypingSession<C>) -> usize {
    session.words().iter().filter(|w| w.is_correct()).count()
}

/// Share of words typed exactly right, 0 to 100
pub fn accuracy_percent<C: Clock>(session: &TypingSession<C>) -> f64 {
    // A session always holds at least one word.
    100.0 * correct_word_count(session) as f64 / session.words().len() as f64
}

/// Characters in correctly typed words; mistyped words earn nothing
pub fn correct_char_count(words: &[WordUnit]) -> usize {
    words
        .iter()
        .filter(|w| w.is_correct())
        .map(WordUnit::len)
        .sum()
}

pub fn wpm<C: Clock>(session: &TypingSession<C>) -> f64 {
    wpm_from(correct_char_count(session.words()), elapsed_seconds(session))
}

/// (correct chars / 5) / minutes, or 0 when no time has passed
pub fn wpm_from(correct_chars: usize, elapsed_seconds: f64) -> f64 {
    let minutes = elapsed_seconds / 60.0;
    if minutes == 0.0 {
        return 0.0;
    }
    (correct_chars as f64 / CHARS_PER_WORD) / minutes
}

/// Point-in-time snapshot, handy for live display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub elapsed_seconds: f64,
    pub correct_words: usize,
    pub accuracy_percent: f64,
    pub wpm: f64,
}

impl Metrics {
    pub fn of<C: Clock>(session: &TypingSession<C>) -> Self {
        let elapsed = elapsed_seconds(session);
        Self {
            elapsed_seconds: elapsed,
            correct_words: correct_word_count(session),
            accuracy_percent: accuracy_percent(session),
            wpm: wpm_from(correct_char_count(session.words()), elapsed),
        }
    }
}

/// Record of a finished attempt, handed off to whoever stores history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub test_length: usize,
    pub punctuation_enabled: bool,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub wpm: f64,
    pub accuracy_percent: f64,
}

impl SessionResult {
    /// The result of a finished session; None while it is still running
    pub fn from_session<C: Clock>(session: &TypingSession<C>) -> Option<Self> {
        if session.has_finished() {
            Some(Self::capture(session))
        } else {
            None
        }
    }

    pub(crate) fn capture<C: Clock>(session: &TypingSession<C>) -> Self {
        let (Some(start_time), Some(end_time)) = (session.started_at(), session.ended_at())
        else {
            panic!("result captured from a session that has not finished");
        };
        let metrics = Metrics::of(session);
        let config = session.config();

        Self {
            test_length: config.test_length,
            punctuation_enabled: config.punctuation,
            start_time,
            end_time,
            wpm: metrics.wpm,
            accuracy_percent: metrics.accuracy_percent,
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        (self.end_time - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}
