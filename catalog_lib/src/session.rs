//! Drives the catalog page on a single task.
//!
//! The session owns the search box, the page composition and the list view.
//! Fetches run as spawned tasks and debounced searches fire from the timer;
//! both report back over one channel, so view state is only ever touched
//! from the task that owns the session.

use std::time::Duration;

use catalog_api::Client;
use tokio::sync::mpsc;

use crate::config::CatalogConfig;
use crate::list_view::{ListOutcome, ListState, ListView};
use crate::page::CatalogPage;
use crate::search::{SearchControl, SearchSignal};

const PENDING_POLL: Duration = Duration::from_millis(10);

enum SessionEvent {
    Search(String),
    ListLoaded { seq: u64, outcome: ListOutcome },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionUpdate {
    /// The list view changed state: a fetch started or one settled.
    ListChanged,
    /// Nothing visible happened (stale response, superseded search).
    Unchanged,
}

pub struct CatalogSession {
    client: Client,
    page: CatalogPage,
    list: ListView,
    search: SearchControl,
    sender: mpsc::UnboundedSender<SessionEvent>,
    receiver: mpsc::UnboundedReceiver<SessionEvent>,
}

impl CatalogSession {
    pub fn new(client: Client, config: &CatalogConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let search_sender = sender.clone();
        let search = SearchControl::new(config.search_debounce, move |term| {
            let _ = search_sender.send(SessionEvent::Search(term));
        });
        Self {
            client,
            page: CatalogPage::new(config.page_size),
            list: ListView::new(),
            search,
            sender,
            receiver,
        }
    }

    pub fn page(&self) -> &CatalogPage {
        &self.page
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }

    pub fn search(&self) -> &SearchControl {
        &self.search
    }

    /// Mounts the page: issues the first listing fetch.
    pub fn start(&mut self) {
        tracing::info!("Catalog session started against {}", self.client.base_url());
        self.refetch();
    }

    /// Feeds the full current search-box text.
    pub fn input(&mut self, text: &str) -> SearchSignal {
        self.search.input(text)
    }

    /// Reports a page selection from the pagination control. Returns true if
    /// a fetch was started.
    pub fn select_page(&mut self, page: u32) -> bool {
        if self.page.on_page_change(page) {
            self.refetch();
            true
        } else {
            false
        }
    }

    fn refetch(&mut self) {
        let ticket = self.list.begin(self.page.list_params());
        let client = self.client.clone();
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let outcome = ticket.request.send(&client).await;
            let _ = sender.send(SessionEvent::ListLoaded {
                seq: ticket.seq,
                outcome,
            });
        });
    }

    fn apply(&mut self, event: SessionEvent) -> SessionUpdate {
        match event {
            SessionEvent::Search(term) => {
                // A debounced term can fire after the box moved on (cleared,
                // shortened below the minimum). Only the box's current term counts.
                if !term.is_empty() && self.search.current_term().as_deref() != Some(term.as_str())
                {
                    tracing::debug!(term = %term, "dropping superseded search");
                    return SessionUpdate::Unchanged;
                }
                if self.page.on_search(&term) {
                    self.refetch();
                    SessionUpdate::ListChanged
                } else {
                    SessionUpdate::Unchanged
                }
            }
            SessionEvent::ListLoaded { seq, outcome } => {
                if self.list.resolve(seq, outcome) {
                    SessionUpdate::ListChanged
                } else {
                    SessionUpdate::Unchanged
                }
            }
        }
    }

    /// Waits for the next search or fetch completion and applies it.
    pub async fn next_event(&mut self) -> SessionUpdate {
        match self.receiver.recv().await {
            Some(event) => self.apply(event),
            None => SessionUpdate::Unchanged,
        }
    }

    /// Processes events until no debounced search is pending and the list is
    /// no longer loading, then returns the settled state.
    pub async fn settle(&mut self) -> &ListState {
        loop {
            while let Ok(event) = self.receiver.try_recv() {
                self.apply(event);
            }
            let waiting_on_fetch = self.list.params().is_some() && self.list.is_loading();
            if waiting_on_fetch {
                self.next_event().await;
                continue;
            }
            if self.search.is_pending() {
                // The pending flag drops just after the search is queued, so
                // wait in slices and re-check rather than block on the channel.
                let _ = tokio::time::timeout(PENDING_POLL, self.next_event()).await;
                continue;
            }
            // A debounce that finished after the drain has queued its event.
            match self.receiver.try_recv() {
                Ok(event) => {
                    self.apply(event);
                }
                Err(_) => break,
            }
        }
        self.list.state()
    }
}
