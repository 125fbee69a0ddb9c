use serde::Deserialize;
use thiserror::Error;

use crate::entry::{PartOfSpeech, Word, WordDefinition, WordMeaning};
use crate::{DictionaryError, NotFoundError};

const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
pub(crate) struct EntryDto {
    word: String,
    phonetic: Option<String>,
    origin: Option<String>,
    #[serde(default)]
    meanings: Vec<MeaningDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeaningDto {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<DefinitionDto>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DefinitionDto {
    definition: String,
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

// The api answers a miss with a small error document instead of an entry list.
#[derive(Debug, Deserialize)]
struct MissDto {
    message: String,
}

#[derive(Debug, Error)]
#[error("unknown part of speech: {name}")]
pub struct UnknownPartOfSpeech {
    name: String,
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    word: &str,
) -> Result<Word, DictionaryError> {
    let url = format!("{DICTIONARY_API_URL}/{word}");
    let res = client
        .get(&url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    if res.status() == reqwest::StatusCode::NOT_FOUND {
        let miss: MissDto = res.json().await.map_err(DictionaryError::Deserialize)?;
        return Err(DictionaryError::NotFound(NotFoundError {
            message: miss.message,
        }));
    }
    let entries: Vec<EntryDto> = res.json().await.map_err(DictionaryError::Deserialize)?;
    let entry = entries.into_iter().next().ok_or_else(|| {
        DictionaryError::NotFound(NotFoundError {
            message: format!("the api returned no entries for '{word}'"),
        })
    })?;
    Ok(entry.try_into()?)
}

impl TryFrom<EntryDto> for Word {
    type Error = UnknownPartOfSpeech;

    fn try_from(dto: EntryDto) -> Result<Self, Self::Error> {
        let meanings = dto
            .meanings
            .into_iter()
            .map(WordMeaning::try_from)
            .collect::<Result<Vec<WordMeaning>, UnknownPartOfSpeech>>()?;
        Ok(Word {
            word: dto.word,
            phonetic: dto.phonetic,
            origin: dto.origin,
            meanings,
        })
    }
}

impl TryFrom<MeaningDto> for WordMeaning {
    type Error = UnknownPartOfSpeech;

    fn try_from(dto: MeaningDto) -> Result<Self, Self::Error> {
        Ok(WordMeaning {
            part_of_speech: part_of_speech_from_name(&dto.part_of_speech)?,
            definitions: dto.definitions.into_iter().map(Into::into).collect(),
            synonyms: dto.synonyms,
            antonyms: dto.antonyms,
        })
    }
}

impl From<DefinitionDto> for WordDefinition {
    fn from(dto: DefinitionDto) -> Self {
        WordDefinition {
            definition: dto.definition,
            example: dto.example,
            synonyms: dto.synonyms,
            antonyms: dto.antonyms,
        }
    }
}

fn part_of_speech_from_name(name: &str) -> Result<PartOfSpeech, UnknownPartOfSpeech> {
    match name {
        "noun" => Ok(PartOfSpeech::Noun),
        "pronoun" => Ok(PartOfSpeech::Pronoun),
        "verb" => Ok(PartOfSpeech::Verb),
        "adjective" => Ok(PartOfSpeech::Adjective),
        "adverb" => Ok(PartOfSpeech::Adverb),
        "preposition" => Ok(PartOfSpeech::Preposition),
        "conjunction" => Ok(PartOfSpeech::Conjunction),
        "interjection" => Ok(PartOfSpeech::Interjection),
        "determiner" | "article" => Ok(PartOfSpeech::Determiner),
        "exclamation" => Ok(PartOfSpeech::Exclamation),
        other => Err(UnknownPartOfSpeech {
            name: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ENTRY: &str = r#"[
        {
            "word": "serendipity",
            "phonetic": "/ˌsɛɹ.ənˈdɪp.ɪ.ti/",
            "phonetics": [{ "text": "/ˌsɛɹ.ənˈdɪp.ɪ.ti/", "audio": "" }],
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        {
                            "definition": "The occurrence of events by chance in a happy way.",
                            "example": "A fortunate stroke of serendipity.",
                            "synonyms": ["chance", "fluke"],
                            "antonyms": []
                        },
                        {
                            "definition": "An unsought, unexpected discovery."
                        }
                    ],
                    "synonyms": ["luck"],
                    "antonyms": []
                }
            ]
        }
    ]"#;

    #[test]
    fn deserializes_and_converts_an_api_entry() {
        let entries: Vec<EntryDto> = serde_json::from_str(SAMPLE_ENTRY).unwrap();
        let word: Word = entries.into_iter().next().unwrap().try_into().unwrap();

        assert_eq!(word.word, "serendipity");
        assert_eq!(word.phonetic.as_deref(), Some("/ˌsɛɹ.ənˈdɪp.ɪ.ti/"));
        assert_eq!(word.meanings.len(), 1);

        let meaning = &word.meanings[0];
        assert_eq!(meaning.part_of_speech, PartOfSpeech::Noun);
        assert_eq!(meaning.synonyms, vec!["luck".to_string()]);
        assert_eq!(meaning.definitions.len(), 2);
        assert_eq!(
            meaning.definitions[0].example.as_deref(),
            Some("A fortunate stroke of serendipity.")
        );
        assert_eq!(meaning.definitions[1].example, None);
        assert!(meaning.definitions[1].synonyms.is_empty());
    }

    #[test]
    fn deserializes_the_miss_document() {
        let body = r#"{
            "title": "No Definitions Found",
            "message": "Sorry pal, we couldn't find definitions for the word you were looking for.",
            "resolution": "You can try the search again at later time or head to the web instead."
        }"#;
        let miss: MissDto = serde_json::from_str(body).unwrap();
        assert!(miss.message.starts_with("Sorry pal"));
    }

    #[test]
    fn rejects_unknown_parts_of_speech() {
        let error = part_of_speech_from_name("gerundive").unwrap_err();
        assert_eq!(error.to_string(), "unknown part of speech: gerundive");
    }

    #[test]
    fn maps_article_to_determiner() {
        assert_eq!(
            part_of_speech_from_name("article").unwrap(),
            PartOfSpeech::Determiner
        );
    }
}
