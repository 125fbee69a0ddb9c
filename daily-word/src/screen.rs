use dictionary::WordOfTheDay;

use crate::render::Labeled;

pub const NO_INTERNET_CONNECTION: &str = "No internet connection";
pub const BAD_SERVER_RESPONSE: &str = "Bad server response";

#[derive(Debug)]
pub enum ScreenEvent {
    QueryChanged(String),
    QuerySubmitted(String),
    WordOfTheDayClicked,
    AttributionClicked,
    LoadFinished(Option<WordOfTheDay>),
}

/// Navigation requested by the screen, executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the detail view for a word.
    OpenDetail(String),
    /// Open an external web page, if anything on the system handles it.
    OpenWebPage(String),
}

/// The search screen. Holds the view state and turns events into effects;
/// it performs no IO of its own.
pub struct Screen {
    search_visible: bool,
    word_of_the_day_visible: bool,
    attribution_visible: bool,
    word: Option<String>,
    definition: Option<Labeled>,
    example: Option<Labeled>,
    empty_message: Option<String>,
    // Retargeted on every query change; the attribution link always opens the
    // last typed text.
    attribution_query: String,
    loading: bool,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            search_visible: true,
            word_of_the_day_visible: true,
            attribution_visible: true,
            word: None,
            definition: None,
            example: None,
            empty_message: None,
            attribution_query: String::new(),
            loading: false,
        }
    }

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    pub fn handle(&mut self, event: ScreenEvent) -> Option<Effect> {
        match event {
            ScreenEvent::QueryChanged(text) => {
                if self.search_visible {
                    self.attribution_query = text;
                }
                None
            }
            ScreenEvent::QuerySubmitted(word) => {
                if !self.search_visible {
                    return None;
                }
                Some(Effect::OpenDetail(word))
            }
            ScreenEvent::WordOfTheDayClicked => {
                if !self.word_of_the_day_visible {
                    return None;
                }
                self.word.clone().map(Effect::OpenDetail)
            }
            ScreenEvent::AttributionClicked => {
                if !self.attribution_visible {
                    return None;
                }
                Some(Effect::OpenWebPage(dictionary::attribution_url(
                    &self.attribution_query,
                )))
            }
            ScreenEvent::LoadFinished(word_of_the_day) => {
                self.update(word_of_the_day, true);
                None
            }
        }
    }

    /// Settles the screen into one of its three terminal outcomes: data
    /// rendered, bad server response, or no internet connection.
    pub fn update(&mut self, word_of_the_day: Option<WordOfTheDay>, connected: bool) {
        self.loading = false;
        match word_of_the_day {
            Some(word_of_the_day) if connected => {
                self.definition = word_of_the_day
                    .definitions
                    .first()
                    .map(|definition| Labeled::new("Definition:", &definition.text));
                self.example = word_of_the_day
                    .examples
                    .first()
                    .map(|example| Labeled::new("Example:", &example.text));
                self.word = Some(word_of_the_day.word);
            }
            _ if connected => self.show_error(BAD_SERVER_RESPONSE),
            _ => self.show_error(NO_INTERNET_CONNECTION),
        }
    }

    fn show_error(&mut self, message: &str) {
        // First, hide the currently visible views, then show the message.
        self.search_visible = false;
        self.word_of_the_day_visible = false;
        self.attribution_visible = false;
        self.empty_message = Some(message.to_string());
    }

    pub fn render(&self) -> String {
        if let Some(message) = &self.empty_message {
            return message.clone();
        }
        let mut out = String::from("Word of the day\n");
        if self.loading {
            out.push_str("  fetching today's word...\n");
        }
        if let Some(word) = &self.word {
            out.push_str(&format!("  {word}\n"));
        }
        if let Some(definition) = &self.definition {
            out.push_str(&format!("  {definition}\n"));
        }
        if let Some(example) = &self.example {
            out.push_str(&format!("  {example}\n"));
        }
        out.push_str(
            "\ntype a word to look it up, 'wotd' for today's word, 'link' to open the provider page, 'quit' to exit",
        );
        out
    }
}
