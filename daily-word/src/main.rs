use chrono::Local;
use dictionary::Dictionary;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::loader::{LoaderId, LoaderManager};
use crate::screen::{Effect, Screen, ScreenEvent};

mod connectivity;
mod detail;
mod loader;
mod render;
mod screen;

const WORD_OF_THE_DAY_LOADER_ID: LoaderId = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let dict = Dictionary::new();
    let mut screen = Screen::new();
    let (mut loaders, mut loads) = LoaderManager::new();

    if connectivity::is_connected().await {
        screen.load_started();
        let dict = dict.clone();
        let today = Local::now().date_naive();
        loaders.init_loader(WORD_OF_THE_DAY_LOADER_ID, async move {
            match dict.word_of_the_day(today).await {
                Ok(word_of_the_day) => Some(word_of_the_day),
                Err(error) => {
                    tracing::warn!("word of the day load failed: {error}");
                    None
                }
            }
        });
    } else {
        screen.update(None, false);
    }
    println!("{}\n", screen.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Input::Quit => break,
                    Input::Nothing => {}
                    Input::Events(events) => {
                        for event in events {
                            if let Some(effect) = screen.handle(event) {
                                run_effect(&dict, effect).await;
                            }
                        }
                        println!("{}\n", screen.render());
                    }
                }
            }
            Some((id, result)) = loads.recv() => {
                loaders.complete(id, result.clone());
                if id == WORD_OF_THE_DAY_LOADER_ID {
                    screen.handle(ScreenEvent::LoadFinished(result));
                    println!("{}\n", screen.render());
                }
            }
        }
    }

    loaders.destroy();
    Ok(())
}

async fn run_effect(dict: &Dictionary, effect: Effect) {
    match effect {
        Effect::OpenDetail(word) => detail::show(dict, &word).await,
        Effect::OpenWebPage(url) => {
            // Opens only when something on the system handles it; a miss is
            // not an error.
            if let Err(error) = open::that_detached(&url) {
                tracing::debug!("no handler for {url}: {error}");
            }
        }
    }
}

#[derive(Debug)]
enum Input {
    Events(Vec<ScreenEvent>),
    Quit,
    Nothing,
}

fn parse_line(line: &str) -> Input {
    let line = line.trim();
    let mut command_parts = line.split_ascii_whitespace();
    let Some(command) = command_parts.next() else {
        return Input::Nothing;
    };
    match command {
        "exit" | "leave" | "quit" | "q" => Input::Quit,
        "wotd" | "more" => Input::Events(vec![ScreenEvent::WordOfTheDayClicked]),
        "link" | "attribution" => Input::Events(vec![ScreenEvent::AttributionClicked]),
        "define" | "find" => {
            let word = command_parts.collect::<Vec<&str>>().join(" ");
            if word.is_empty() {
                return Input::Nothing;
            }
            Input::Events(vec![
                ScreenEvent::QueryChanged(word.clone()),
                ScreenEvent::QuerySubmitted(word),
            ])
        }
        _ => {
            let word = line.to_string();
            Input::Events(vec![
                ScreenEvent::QueryChanged(word.clone()),
                ScreenEvent::QuerySubmitted(word),
            ])
        }
    }
}
