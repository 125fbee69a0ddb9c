// https://github.com/dulldesk/words-api/tree/master - amount, first letter, kind (noun or adj) // bad because it sends duplicates
// https://random-word-api.vercel.app/ - amount, length, first letter
// https://random-word.ryanrk.com/ - amount, length(minmax) // bad because the words are weird

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::entry::WordOfTheDay;
use crate::{api, DictionaryError, NotFoundError};

const RANDOM_WORD_API_URL: &'static str = "https://random-word-api.vercel.app/api";

// Random words frequently have no dictionary entry, so fetch a batch and walk
// it until one defines cleanly.
const CANDIDATE_COUNT: usize = 12;

pub(crate) async fn fetch(
    client: &reqwest::Client,
    date: NaiveDate,
) -> Result<WordOfTheDay, DictionaryError> {
    let candidates = get_random_words(client, CANDIDATE_COUNT, None).await?;
    let candidates = order_candidates(candidates, date);
    for word in &candidates {
        match api::get_definition(client, word).await {
            Ok(entry) => {
                if let Some(word_of_the_day) = WordOfTheDay::from_entry(&entry) {
                    return Ok(word_of_the_day);
                }
            }
            Err(DictionaryError::NotFound(_)) => continue,
            Err(error) => return Err(error),
        }
    }
    Err(DictionaryError::NotFound(NotFoundError {
        message: "none of the candidate words had a usable entry".to_string(),
    }))
}

/// Orders the candidates by a date-seeded shuffle, so the same batch resolves
/// to the same word everywhere on a given day.
fn order_candidates(mut words: Vec<String>, date: NaiveDate) -> Vec<String> {
    words.sort_unstable();
    words.dedup();
    let mut rng = StdRng::seed_from_u64(date.num_days_from_ce() as u64);
    words.shuffle(&mut rng);
    words
}

pub(crate) async fn get_random_words(
    client: &reqwest::Client,
    max: usize,
    length: Option<usize>,
) -> Result<Vec<String>, DictionaryError> {
    let mut req = client.get(RANDOM_WORD_API_URL).query(&[("words", max)]);
    if let Some(length) = length {
        req = req.query(&[("length", length)]);
    }
    let res: reqwest::Response = req.send().await.map_err(DictionaryError::Fetch)?;
    res.json::<Vec<String>>()
        .await
        .map_err(DictionaryError::Deserialize)
}
