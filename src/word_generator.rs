use crate::{
    error::{Error, Result},
    language::{capitalize_first_letter, ends_with_terminal, Lexicon, WordClass},
    word::WordUnit,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

pub const MIN_SENTENCE_WORDS: usize = 4;
pub const MAX_SENTENCE_WORDS: usize = 10;

/// Chance that an interior word picks up a trailing mark
pub const PUNCTUATION_PROBABILITY: f64 = 0.2;

/// Builds the target words of a test from grammatical word pools
#[derive(Debug, Clone)]
pub struct TextGenerator {
    lexicon: Lexicon,
}

impl TextGenerator {
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        lexicon.validate()?;
        Ok(Self { lexicon })
    }

    pub fn english() -> Result<Self> {
        Self::new(Lexicon::english()?)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Generate exactly `word_count` words, sentence by sentence.
    ///
    /// Each sentence is 4 to 10 words long; the last one is cut short when the
    /// count runs out, and its last emitted word is treated as the sentence end.
    pub fn generate<R: Rng>(
        &self,
        word_count: usize,
        punctuation: bool,
        rng: &mut R,
    ) -> Result<Vec<WordUnit>> {
        if word_count == 0 {
            return Err(Error::InvalidConfig(
                "word count must be at least 1".to_string(),
            ));
        }

        let mut words = Vec::with_capacity(word_count);
        let mut sentences = 0;

        while words.len() < word_count {
            let sentence_len = rng.gen_range(MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS);
            let emitted = sentence_len.min(word_count - words.len());

            for position in 0..emitted {
                let closes_sentence = position + 1 == emitted;
                let text = self.emit_word(position, closes_sentence, punctuation, rng);
                words.push(WordUnit::new(text));
            }
            sentences += 1;
        }

        debug!(word_count, punctuation, sentences, "generated prompt");
        Ok(words)
    }

    fn emit_word<R: Rng>(
        &self,
        position: usize,
        closes_sentence: bool,
        punctuation: bool,
        rng: &mut R,
    ) -> String {
        let class = WordClass::for_position(position);
        let mut word = pick(self.lexicon.pool(class), rng).to_string();

        if !punctuation {
            return word;
        }

        if position == 0 {
            word = capitalize_first_letter(&word);
        }

        if closes_sentence {
            if !ends_with_terminal(&word) {
                word.push_str(pick(&self.lexicon.terminal_punctuation, rng));
            }
        } else if position > 0 && rng.gen_bool(PUNCTUATION_PROBABILITY) {
            word.push_str(pick(&self.lexicon.punctuation, rng));
        }

        word
    }
}

// Pools are validated as non-empty when the generator is built.
fn pick<'a, R: Rng>(pool: &'a [String], rng: &mut R) -> &'a str {
    pool.choose(rng).map(String::as_str).unwrap_or_default()
}

/// Join generated words back into the prompt as displayed
pub fn prompt_text(words: &[WordUnit]) -> String {
    words
        .iter()
        .map(WordUnit::target)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> TextGenerator {
        TextGenerator::english().unwrap()
    }

    fn targets(words: &[WordUnit]) -> Vec<String> {
        words.iter().map(|w| w.target().to_string()).collect()
    }

    #[test]
    fn test_generates_exact_word_count() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(7);

        for count in [1, 3, 4, 10, 25, 50, 137] {
            let words = generator.generate(count, false, &mut rng).unwrap();
            assert_eq!(words.len(), count);
        }
    }

    #[test]
    fn test_zero_words_is_invalid() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_matches!(
            generator().generate(0, true, &mut rng),
            Err(Error::InvalidConfig(_))
        );
    }

    #[test]
    fn test_same_seed_same_text() {
        let generator = generator();
        let a = generator
            .generate(40, true, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = generator
            .generate(40, true, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(targets(&a), targets(&b));
    }

    #[test]
    fn test_plain_words_come_from_pools() {
        let generator = generator();
        let lexicon = generator.lexicon();
        let words = generator
            .generate(30, false, &mut StdRng::seed_from_u64(3))
            .unwrap();

        for word in &words {
            let known = [
                &lexicon.nouns,
                &lexicon.verbs,
                &lexicon.adjectives,
                &lexicon.conjunctions,
            ]
            .iter()
            .any(|pool| pool.iter().any(|w| w == word.target()));
            assert!(known, "{} is not in any pool", word.target());
        }
    }

    #[test]
    fn test_first_word_is_a_noun() {
        let generator = generator();
        for seed in 0..20 {
            let words = generator
                .generate(1, false, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert!(generator
                .lexicon()
                .nouns
                .iter()
                .any(|n| n == words[0].target()));
        }
    }

    #[test]
    fn test_no_punctuation_without_flag() {
        let words = generator()
            .generate(60, false, &mut StdRng::seed_from_u64(11))
            .unwrap();
        for word in &words {
            assert!(word.target().chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_punctuated_text_opens_capitalized_and_closes_terminal() {
        let generator = generator();
        for seed in 0..20 {
            let words = generator
                .generate(12, true, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            let first = words[0].target().chars().next().unwrap();
            assert!(first.is_uppercase());
            assert!(ends_with_terminal(words.last().unwrap().target()));
        }
    }

    #[test]
    fn test_sentence_after_terminal_is_capitalized() {
        // Interior marks may include '.', so only check the converse: every
        // capitalized word after the first follows a terminal mark.
        let words = generator()
            .generate(80, true, &mut StdRng::seed_from_u64(5))
            .unwrap();
        for pair in words.windows(2) {
            let next_upper = pair[1]
                .target()
                .chars()
                .next()
                .is_some_and(char::is_uppercase);
            if next_upper {
                assert!(ends_with_terminal(pair[0].target()));
            }
        }
    }

    #[test]
    fn test_prompt_text_joins_with_spaces() {
        let words = vec![WordUnit::new("Cat"), WordUnit::new("runs.")];
        assert_eq!(prompt_text(&words), "Cat runs.");
    }

    // One word per pool, so every position shows which class it came from.
    fn marker_generator() -> TextGenerator {
        let pool = |word: &str| vec![word.to_string()];
        TextGenerator::new(Lexicon {
            name: "markers".to_string(),
            nouns: pool("n"),
            verbs: pool("v"),
            adjectives: pool("a"),
            conjunctions: pool("c"),
            punctuation: pool(","),
            terminal_punctuation: pool("."),
        })
        .unwrap()
    }

    #[test]
    fn test_sentences_follow_word_class_grammar() {
        let generator = marker_generator();

        for seed in 0..200 {
            let words = generator
                .generate(97, true, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            let prompt = prompt_text(&words);
            assert!(prompt.ends_with('.'));

            let sentences: Vec<Vec<&str>> = prompt
                .split_terminator('.')
                .map(|s| s.split_whitespace().collect())
                .collect();
            assert_eq!(sentences.iter().map(Vec::len).sum::<usize>(), 97);

            for (i, sentence) in sentences.iter().enumerate() {
                let is_last = i + 1 == sentences.len();
                assert!(!sentence.is_empty());
                assert!(sentence.len() <= MAX_SENTENCE_WORDS, "seed {seed}: {sentence:?}");
                if !is_last {
                    assert!(sentence.len() >= MIN_SENTENCE_WORDS, "seed {seed}: {sentence:?}");
                }

                for (position, word) in sentence.iter().enumerate() {
                    let expected = match WordClass::for_position(position) {
                        WordClass::Noun => "N",
                        WordClass::Verb => "v",
                        WordClass::Adjective => "a",
                        WordClass::Conjunction => "c",
                    };
                    assert_eq!(word.trim_end_matches(','), expected, "seed {seed}");
                }

                assert!(!sentence[0].ends_with(','));
                assert!(!sentence[sentence.len() - 1].ends_with(','));
            }
        }
    }
}
