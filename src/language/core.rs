use crate::error::{Error, Result};
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;

static LANG_DIR: Dir = include_dir!("src/lang");

/// Grammatical role that decides which pool a sentence position draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Conjunction,
}

impl WordClass {
    /// Sentences open with a noun, then cycle verb, adjective, conjunction.
    pub fn for_position(position: usize) -> Self {
        match position {
            0 => WordClass::Noun,
            p if p % 3 == 1 => WordClass::Verb,
            p if p % 3 == 2 => WordClass::Adjective,
            _ => WordClass::Conjunction,
        }
    }
}

/// Word pools used to assemble pseudo-sentences
#[derive(Deserialize, Clone, Debug)]
pub struct Lexicon {
    pub name: String,
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
    pub adjectives: Vec<String>,
    pub conjunctions: Vec<String>,
    /// Marks that may trail an interior word
    pub punctuation: Vec<String>,
    /// Marks that may end a sentence
    pub terminal_punctuation: Vec<String>,
}

impl Lexicon {
    pub fn new(name: &str) -> Result<Self> {
        let lexicon = read_lexicon_from_file(&format!("{name}.json"))?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn english() -> Result<Self> {
        Self::new("english")
    }

    pub fn pool(&self, class: WordClass) -> &[String] {
        match class {
            WordClass::Noun => &self.nouns,
            WordClass::Verb => &self.verbs,
            WordClass::Adjective => &self.adjectives,
            WordClass::Conjunction => &self.conjunctions,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let classes = [
            WordClass::Noun,
            WordClass::Verb,
            WordClass::Adjective,
            WordClass::Conjunction,
        ];
        if let Some(class) = classes.into_iter().find(|c| self.pool(*c).is_empty()) {
            return Err(Error::Lexicon(format!(
                "{}: {class} pool is empty",
                self.name
            )));
        }
        if self.punctuation.is_empty() || self.terminal_punctuation.is_empty() {
            return Err(Error::Lexicon(format!(
                "{}: punctuation pools must not be empty",
                self.name
            )));
        }
        Ok(())
    }
}

fn read_lexicon_from_file(file_name: &str) -> Result<Lexicon> {
    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| Error::Lexicon(format!("{file_name} not found")))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| Error::Lexicon(format!("{file_name} is not valid UTF-8")))?;

    Ok(from_str(file_as_str)?)
}
