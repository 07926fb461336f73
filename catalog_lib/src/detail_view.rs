//! Single product view keyed by the identifier from navigation.

use catalog_api::types::{Product, ServiceResponse};
use catalog_api::Client;
use serde::Serialize;

use crate::image::ImageSlot;
use crate::list_view::{FETCH_ERROR_MESSAGE, LOADING_MESSAGE};
use crate::sequence::{Sequencer, Ticket};

pub const NOT_FOUND_MESSAGE: &str = "No product found with this id.";

pub type DetailOutcome = Result<ServiceResponse<Product>, catalog_api::Error>;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum DetailState {
    Loading,
    /// The request itself failed.
    Failed { reason: String },
    /// The request succeeded but the service has no such product.
    NotFound,
    Ready { product: Product },
}

impl DetailState {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DetailState::Loading => Some(LOADING_MESSAGE),
            DetailState::Failed { .. } => Some(FETCH_ERROR_MESSAGE),
            DetailState::NotFound => Some(NOT_FOUND_MESSAGE),
            DetailState::Ready { .. } => None,
        }
    }
}

pub struct DetailView {
    id: Option<String>,
    state: DetailState,
    image: Option<ImageSlot>,
    sequencer: Sequencer,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            id: None,
            state: DetailState::Loading,
            image: None,
            sequencer: Sequencer::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn image(&self) -> Option<&ImageSlot> {
        self.image.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading)
    }

    /// Failed and not-found together: the states with nothing to show.
    pub fn is_error_or_missing(&self) -> bool {
        matches!(
            self.state,
            DetailState::Failed { .. } | DetailState::NotFound
        )
    }

    /// Points the view at `id`. Returns the fetch to send on first mount or
    /// when the id changed, `None` when it is already showing `id`.
    pub fn navigate(&mut self, id: &str) -> Option<Ticket<String>> {
        if self.id.as_deref() == Some(id) {
            return None;
        }
        let seq = self.sequencer.issue();
        tracing::debug!(seq, id, "detail fetch issued");
        self.id = Some(id.to_string());
        self.state = DetailState::Loading;
        self.image = None;
        Some(Ticket {
            seq,
            request: id.to_string(),
        })
    }

    /// Applies the outcome of request `seq`; stale outcomes are ignored.
    pub fn resolve(&mut self, seq: u64, outcome: DetailOutcome) -> bool {
        if !self.sequencer.is_current(seq) {
            tracing::debug!(
                seq,
                latest = self.sequencer.latest(),
                "dropping stale detail response"
            );
            return false;
        }
        self.state = match outcome {
            Err(e) => {
                tracing::error!("Product fetch failed: {}", e);
                DetailState::Failed {
                    reason: e.to_string(),
                }
            }
            Ok(resp) => match resp.data {
                Some(product) => {
                    self.image = Some(ImageSlot::new(&product.image_url));
                    DetailState::Ready { product }
                }
                None => DetailState::NotFound,
            },
        };
        true
    }

    /// Navigate, fetch and resolve in one go. A no-op when already on `id`.
    pub async fn load(&mut self, client: &Client, id: &str) -> &DetailState {
        if let Some(ticket) = self.navigate(id) {
            let outcome = client.get_product(&ticket.request).await;
            self.resolve(ticket.seq, outcome);
        }
        &self.state
    }

    /// Swaps the image for the placeholder; the fetch state is untouched.
    pub fn image_failed(&mut self) -> bool {
        self.image.as_mut().is_some_and(ImageSlot::mark_failed)
    }
}
