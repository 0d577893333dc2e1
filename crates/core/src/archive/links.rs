//! Google Slides link extraction

use once_cell::sync::Lazy;
use papersync_domain::constants::{SLIDES_EXPORT_SUFFIX, SLIDES_URL_PREFIX};
use regex::Regex;

static SLIDES_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://docs\.google\.com/presentation/d/([A-Za-z0-9_-]+)")
        .expect("SLIDES_LINK should compile - this is a bug")
});

/// A slide deck referenced from a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    pub deck_id: String,
}

impl SlideDeck {
    /// PDF export endpoint for the deck.
    pub fn export_url(&self) -> String {
        format!("{SLIDES_URL_PREFIX}{}{SLIDES_EXPORT_SUFFIX}", self.deck_id)
    }
}

/// Every deck linked in `text`, in order of appearance.
pub fn find_slide_decks(text: &str) -> Vec<SlideDeck> {
    SLIDES_LINK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|deck_id| SlideDeck { deck_id: deck_id.as_str().to_string() })
        .collect()
}
