use crate::{
    clock::{Clock, SystemClock},
    error::Result,
    metrics::SessionResult,
    typing_policy::Keystroke,
    word::WordUnit,
    word_generator::{prompt_text, TextGenerator},
};
use chrono::{DateTime, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How a test is set up; supplied by the caller's preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub test_length: usize,
    pub punctuation: bool,
}

impl SessionConfig {
    pub fn new(test_length: usize, punctuation: bool) -> Self {
        Self {
            test_length,
            punctuation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TestState {
    NotStarted,
    InProgress,
    Finished,
}

/// A single typing attempt over a fixed sequence of words
#[derive(Debug)]
pub struct TypingSession<C: Clock = SystemClock> {
    generator: TextGenerator,
    config: SessionConfig,
    words: Vec<WordUnit>,
    current_index: usize,
    started_at: Option<DateTime<Local>>,
    ended_at: Option<DateTime<Local>>,
    state: TestState,
    clock: C,
}

impl TypingSession<SystemClock> {
    /// English word pools, wall-clock timing
    pub fn new<R: Rng>(config: SessionConfig, rng: &mut R) -> Result<Self> {
        Self::with_clock(TextGenerator::english()?, config, rng, SystemClock)
    }
}

impl<C: Clock> TypingSession<C> {
    pub fn with_clock<R: Rng>(
        generator: TextGenerator,
        config: SessionConfig,
        rng: &mut R,
        clock: C,
    ) -> Result<Self> {
        let words = generator.generate(config.test_length, config.punctuation, rng)?;
        debug!(
            test_length = config.test_length,
            punctuation = config.punctuation,
            "typing session configured"
        );

        Ok(Self {
            generator,
            config,
            words,
            current_index: 0,
            started_at: None,
            ended_at: None,
            state: TestState::NotStarted,
            clock,
        })
    }

    /// Throw away the current attempt and start over with fresh words.
    ///
    /// On error the session is left exactly as it was.
    pub fn reconfigure<R: Rng>(
        &mut self,
        word_count: usize,
        punctuation: bool,
        rng: &mut R,
    ) -> Result<()> {
        let words = self.generator.generate(word_count, punctuation, rng)?;

        self.config = SessionConfig::new(word_count, punctuation);
        self.words = words;
        self.current_index = 0;
        self.started_at = None;
        self.ended_at = None;
        self.state = TestState::NotStarted;

        debug!(word_count, punctuation, "typing session reconfigured");
        Ok(())
    }

    /// Feed one keystroke into the session.
    ///
    /// Returns the result exactly once: on the delimiter that closes the last
    /// word. Input after that is ignored.
    pub fn type_char(&mut self, c: char) -> Option<SessionResult> {
        if self.state == TestState::Finished {
            trace!(?c, "ignoring input after finish");
            return None;
        }

        assert!(
            self.current_index < self.words.len(),
            "current word index {} out of range for {} words",
            self.current_index,
            self.words.len()
        );

        let keystroke = Keystroke::from(c);
        if keystroke == Keystroke::Backspace && self.words[self.current_index].typed().is_empty()
        {
            return None;
        }

        if self.started_at.is_none() {
            self.started_at = Some(self.clock.now());
            self.state = TestState::InProgress;
            debug!("typing session started");
        }

        trace!(?keystroke, word = self.current_index, "keystroke");
        match keystroke {
            Keystroke::Delimiter => {
                self.current_index += 1;
                if self.current_index == self.words.len() {
                    return Some(self.finish());
                }
            }
            Keystroke::Backspace => self.words[self.current_index].remove_char(),
            Keystroke::Char(c) => self.words[self.current_index].append_char(c),
        }

        None
    }

    /// Convenience for feeding a whole string, one char at a time
    pub fn type_str(&mut self, s: &str) -> Option<SessionResult> {
        s.chars().fold(None, |result, c| result.or(self.type_char(c)))
    }

    fn finish(&mut self) -> SessionResult {
        self.ended_at = Some(self.clock.now());
        self.state = TestState::Finished;

        let result = SessionResult::capture(self);
        debug!(
            wpm = result.wpm,
            accuracy = result.accuracy_percent,
            "typing session finished"
        );
        result
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn words(&self) -> &[WordUnit] {
        &self.words
    }

    /// The word under the caret, or None once finished
    pub fn current_word(&self) -> Option<&WordUnit> {
        self.words.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> TestState {
        self.state
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Local>> {
        self.ended_at
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn has_finished(&self) -> bool {
        self.state == TestState::Finished
    }

    pub fn prompt(&self) -> String {
        prompt_text(&self.words)
    }
}
