//! Search box policy: a three-way gate on the trimmed input length.

use std::sync::Arc;
use std::time::Duration;

use crate::debounce::Debouncer;
use crate::validation::normalize_search_input;

pub const MIN_SEARCH_LENGTH: usize = 3;
pub const SEARCH_HINT: &str = "Search term must be at least 3 characters";

/// What the current text asks of the rest of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchSignal {
    /// Empty box: drop the search right away, no debounce.
    Clear,
    /// 1-2 characters: show the hint, send nothing.
    Hint,
    /// Long enough: search for this trimmed term once typing settles.
    Search(String),
}

/// Decides from the current text alone; no history is involved.
pub fn classify(text: &str) -> SearchSignal {
    let term = normalize_search_input(text);
    match term.chars().count() {
        0 => SearchSignal::Clear,
        n if n < MIN_SEARCH_LENGTH => SearchSignal::Hint,
        _ => SearchSignal::Search(term),
    }
}

type OnSearch = Arc<dyn Fn(String) + Send + Sync>;

/// The search box. Every keystroke replaces the text and re-applies
/// [`classify`]; terms reach `on_search` either immediately (clear) or
/// through the debouncer.
pub struct SearchControl {
    text: String,
    show_hint: bool,
    on_search: OnSearch,
    debouncer: Debouncer<String>,
}

impl SearchControl {
    pub fn new<F>(debounce: Duration, on_search: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let on_search: OnSearch = Arc::new(on_search);
        let debounced = Arc::clone(&on_search);
        Self {
            text: String::new(),
            show_hint: false,
            on_search,
            debouncer: Debouncer::new(debounce, move |term| debounced(term)),
        }
    }

    /// Replaces the box contents with `text`. Must run inside a tokio runtime
    /// since a long enough term schedules a debounced call.
    pub fn input(&mut self, text: &str) -> SearchSignal {
        self.text = text.to_string();
        let signal = classify(text);
        self.show_hint = signal == SearchSignal::Hint;
        match &signal {
            SearchSignal::Clear => (self.on_search)(String::new()),
            SearchSignal::Hint => {}
            SearchSignal::Search(term) => self.debouncer.trigger(term.clone()),
        }
        signal
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.show_hint.then_some(SEARCH_HINT)
    }

    /// The term the box currently asks for, if it is long enough to search.
    pub fn current_term(&self) -> Option<String> {
        match classify(&self.text) {
            SearchSignal::Search(term) => Some(term),
            _ => None,
        }
    }

    /// True while a debounced search has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}
