/// How a single displayed letter of a word compares to what was typed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    /// Target letter the caret has not reached yet
    Untyped,
    /// Typed past the end of the target
    Extra,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Letter {
    pub char: char,
    pub outcome: Outcome,
}

/// One target word and what has been typed against it so far
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordUnit {
    target: String,
    typed: String,
    caret: usize,
}

impl WordUnit {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            typed: String::new(),
            caret: 0,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Length of the target in characters
    pub fn len(&self) -> usize {
        self.target.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    pub fn append_char(&mut self, c: char) {
        self.typed.push(c);
        self.caret += 1;
    }

    /// Drops the last typed character. Does nothing on an empty buffer.
    pub fn remove_char(&mut self) {
        if self.typed.pop().is_some() {
            self.caret -= 1;
        }
    }

    pub fn is_correct(&self) -> bool {
        self.typed == self.target
    }

    /// Letter-by-letter comparison, covering both the full target and any
    /// over-typed tail.
    pub fn letters(&self) -> Vec<Letter> {
        let mut target = self.target.chars();
        let mut typed = self.typed.chars();
        let mut letters = Vec::with_capacity(self.len().max(self.caret));

        loop {
            let letter = match (target.next(), typed.next()) {
                (Some(t), Some(c)) if t == c => Letter {
                    char: t,
                    outcome: Outcome::Correct,
                },
                (Some(t), Some(_)) => Letter {
                    char: t,
                    outcome: Outcome::Incorrect,
                },
                (Some(t), None) => Letter {
                    char: t,
                    outcome: Outcome::Untyped,
                },
                (None, Some(c)) => Letter {
                    char: c,
                    outcome: Outcome::Extra,
                },
                (None, None) => break,
            };
            letters.push(letter);
        }

        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(target: &str, input: &str) -> WordUnit {
        let mut word = WordUnit::new(target);
        input.chars().for_each(|c| word.append_char(c));
        word
    }

    #[test]
    fn test_new_word_is_untouched() {
        let word = WordUnit::new("cat");
        assert_eq!(word.target(), "cat");
        assert_eq!(word.typed(), "");
        assert_eq!(word.caret(), 0);
        assert_eq!(word.len(), 3);
        assert!(!word.is_correct());
    }

    #[test]
    fn test_exact_match_is_correct() {
        assert!(typed("cat", "cat").is_correct());
    }

    #[test]
    fn test_correctness_is_case_and_punctuation_sensitive() {
        assert!(!typed("Cat", "cat").is_correct());
        assert!(!typed("cat.", "cat").is_correct());
        assert!(typed("cat.", "cat.").is_correct());
    }

    #[test]
    fn test_over_typing_is_recorded() {
        let word = typed("cat", "catch");
        assert_eq!(word.typed(), "catch");
        assert_eq!(word.caret(), 5);
        assert!(!word.is_correct());
    }

    #[test]
    fn test_remove_char_moves_caret_back() {
        let mut word = typed("cat", "cax");
        word.remove_char();
        assert_eq!(word.typed(), "ca");
        assert_eq!(word.caret(), 2);

        word.append_char('t');
        assert!(word.is_correct());
    }

    #[test]
    fn test_remove_char_on_empty_buffer() {
        let mut word = WordUnit::new("dog");
        word.remove_char();
        word.remove_char();
        assert_eq!(word.typed(), "");
        assert_eq!(word.caret(), 0);
    }

    #[test]
    fn test_caret_counts_characters_not_bytes() {
        let word = typed("café", "café");
        assert_eq!(word.caret(), 4);
        assert_eq!(word.len(), 4);
        assert!(word.is_correct());
    }

    #[test]
    fn test_letters_mark_each_position() {
        let word = typed("cat", "cx");
        let outcomes: Vec<Outcome> = word.letters().iter().map(|l| l.outcome).collect();
        assert_eq!(
            outcomes,
            vec![Outcome::Correct, Outcome::Incorrect, Outcome::Untyped]
        );
    }

    #[test]
    fn test_letters_include_extra_tail() {
        let word = typed("at", "atom");
        let letters = word.letters();
        assert_eq!(letters.len(), 4);
        assert_eq!(
            letters[2],
            Letter {
                char: 'o',
                outcome: Outcome::Extra
            }
        );
        assert_eq!(letters[3].outcome, Outcome::Extra);
    }
}
