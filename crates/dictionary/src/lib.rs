use chrono::NaiveDate;
use thiserror::Error;

pub use api::UnknownPartOfSpeech;

mod api;
mod entry;
mod word_of_the_day;

pub use entry::{
    PartOfSpeech, Word, WordDefinition, WordMeaning, WordOfTheDay, WotdDefinition, WotdExample,
};

/// Attribution link base, required by the data provider's terms. The screen
/// appends the current query text verbatim.
pub const ATTRIBUTION_BASE_URL: &str = "https://en.wiktionary.org/wiki/";

pub fn attribution_url(query: &str) -> String {
    format!("{ATTRIBUTION_BASE_URL}{query}")
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary api")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to decode the dictionary api response")]
    Deserialize(#[source] reqwest::Error),
    #[error(transparent)]
    Conversion(#[from] UnknownPartOfSpeech),
    #[error("word not found: {}", .0.message)]
    NotFound(NotFoundError),
}

#[derive(Debug)]
pub struct NotFoundError {
    message: String,
}

#[derive(Clone)]
pub struct Dictionary {
    client: reqwest::Client,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        api::get_definition(&self.client, word).await
    }

    /// Fetches the featured entry for `date`. One call resolves to one word;
    /// callers wanting single-flight semantics key the call by a loader id.
    pub async fn word_of_the_day(&self, date: NaiveDate) -> Result<WordOfTheDay, DictionaryError> {
        word_of_the_day::fetch(&self.client, date).await
    }
}
