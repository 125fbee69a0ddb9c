use std::fmt;

#[derive(Debug)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub origin: Option<String>,
    pub meanings: Vec<WordMeaning>,
}

#[derive(Debug)]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Determiner,
    Exclamation,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Determiner => "determiner",
            PartOfSpeech::Exclamation => "exclamation",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// The featured entry shown on the search screen. The screen only reads the
/// first element of each list, so a record is only built when both hold at
/// least one element.
#[derive(Debug, Clone)]
pub struct WordOfTheDay {
    pub word: String,
    pub definitions: Vec<WotdDefinition>,
    pub examples: Vec<WotdExample>,
}

#[derive(Debug, Clone)]
pub struct WotdDefinition {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct WotdExample {
    pub text: String,
}

impl WordOfTheDay {
    pub(crate) fn from_entry(entry: &Word) -> Option<Self> {
        let mut definitions = Vec::new();
        let mut examples = Vec::new();
        for meaning in &entry.meanings {
            for definition in &meaning.definitions {
                definitions.push(WotdDefinition {
                    text: definition.definition.clone(),
                });
                if let Some(example) = &definition.example {
                    examples.push(WotdExample {
                        text: example.clone(),
                    });
                }
            }
        }
        if definitions.is_empty() || examples.is_empty() {
            return None;
        }
        Some(Self {
            word: entry.word.clone(),
            definitions,
            examples,
        })
    }
}
