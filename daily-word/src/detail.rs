use dictionary::{Dictionary, DictionaryError, Word};

use crate::render::strip_markup;

/// The detail view: fetches the full entry for a word and prints it.
pub async fn show(dict: &Dictionary, word: &str) {
    match dict.get_definition(word).await {
        Ok(entry) => print_entry(&entry),
        Err(DictionaryError::NotFound(_)) => {
            println!("Couldn't find the word you were looking for.");
        }
        Err(error) => {
            tracing::warn!("definition lookup failed: {error}");
            println!("Encountered an error while searching for the word definition.");
        }
    }
}

fn print_entry(entry: &Word) {
    println!("Showing definition for '{}':", entry.word);
    if let Some(phonetic) = &entry.phonetic {
        println!("  {phonetic}");
    }
    if let Some(origin) = &entry.origin {
        println!("  origin: {origin}");
    }
    for meaning in &entry.meanings {
        println!("    {}:", meaning.part_of_speech);
        for definition in &meaning.definitions {
            println!("        {}", strip_markup(&definition.definition));
            if let Some(example) = &definition.example {
                println!("          example: {}", strip_markup(example));
            }
            if !definition.synonyms.is_empty() {
                println!("          synonyms: {}", definition.synonyms.join(", "));
            }
            if !definition.antonyms.is_empty() {
                println!("          antonyms: {}", definition.antonyms.join(", "));
            }
        }
        if !meaning.synonyms.is_empty() {
            println!("      synonyms: {}", meaning.synonyms.join(", "));
        }
        if !meaning.antonyms.is_empty() {
            println!("      antonyms: {}", meaning.antonyms.join(", "));
        }
    }
}
