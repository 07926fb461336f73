//! The paged product list and its fetch state machine.
//!
//! Every input change restarts the cycle at [`ListState::Loading`]. The
//! response that settles it must carry the latest sequence number issued by
//! this view; anything older is dropped.

use catalog_api::types::{PaginatedResult, Product, ServiceResponse};
use catalog_api::{Client, ProductQuery, Query, SearchQuery};
use serde::Serialize;

use crate::image::ImageSlot;
use crate::pagination::Pagination;
use crate::sequence::{Sequencer, Ticket};

pub const LOADING_MESSAGE: &str = "Loading products...";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching products.";
pub const NO_PRODUCTS_MESSAGE: &str = "No product available.";
pub const NO_SEARCH_RESULTS_MESSAGE: &str = "No products were found with your search criteria.";

pub type ListOutcome = Result<ServiceResponse<PaginatedResult<Product>>, catalog_api::Error>;

/// Inputs of one list render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub limit: u32,
    pub term: Option<String>,
}

impl ListParams {
    /// The search term, if one is present and non-blank.
    pub fn search_term(&self) -> Option<&str> {
        self.term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Search when there is a term, plain listing otherwise.
    pub fn request(&self) -> ListRequest {
        match self.search_term() {
            Some(term) => ListRequest::Search(
                SearchQuery::default()
                    .with_term(term)
                    .with_page(self.page)
                    .with_limit(self.limit),
            ),
            None => ListRequest::List(
                ProductQuery::default()
                    .with_page(self.page)
                    .with_limit(self.limit),
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListRequest {
    List(ProductQuery),
    Search(SearchQuery),
}

impl ListRequest {
    pub async fn send(&self, client: &Client) -> ListOutcome {
        match self {
            ListRequest::List(query) => client.list_products(query).await,
            ListRequest::Search(query) => client.search_products(query).await,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListItem {
    pub product: Product,
    pub image: ImageSlot,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum ListState {
    Loading,
    Error {
        reason: String,
    },
    EmptyNoSearch,
    EmptySearch,
    Populated {
        items: Vec<ListItem>,
        pagination: Pagination,
    },
}

impl ListState {
    /// The fixed text shown for every state other than `Populated`.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ListState::Loading => Some(LOADING_MESSAGE),
            ListState::Error { .. } => Some(FETCH_ERROR_MESSAGE),
            ListState::EmptyNoSearch => Some(NO_PRODUCTS_MESSAGE),
            ListState::EmptySearch => Some(NO_SEARCH_RESULTS_MESSAGE),
            ListState::Populated { .. } => None,
        }
    }
}

pub struct ListView {
    params: Option<ListParams>,
    state: ListState,
    sequencer: Sequencer,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            params: None,
            state: ListState::Loading,
            sequencer: Sequencer::new(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn params(&self) -> Option<&ListParams> {
        self.params.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    /// Starts a fetch cycle for `params`.
    pub fn begin(&mut self, params: ListParams) -> Ticket<ListRequest> {
        let seq = self.sequencer.issue();
        let request = params.request();
        tracing::debug!(seq, ?request, "list fetch issued");
        self.params = Some(params);
        self.state = ListState::Loading;
        Ticket { seq, request }
    }

    /// Applies the outcome of request `seq`. Returns false, leaving the state
    /// untouched, when a newer request has been issued since.
    pub fn resolve(&mut self, seq: u64, outcome: ListOutcome) -> bool {
        if !self.sequencer.is_current(seq) {
            tracing::debug!(
                seq,
                latest = self.sequencer.latest(),
                "dropping stale list response"
            );
            return false;
        }
        let searching = self
            .params
            .as_ref()
            .is_some_and(|p| p.search_term().is_some());
        let current_page = self.params.as_ref().map_or(1, |p| p.page);

        self.state = match outcome {
            Err(e) => {
                tracing::error!("List fetch failed: {}", e);
                ListState::Error {
                    reason: e.to_string(),
                }
            }
            Ok(resp) => match resp.data {
                None => {
                    tracing::error!("List response carried no data: {}", resp.message);
                    ListState::Error {
                        reason: format!("empty payload: {}", resp.message),
                    }
                }
                Some(page) if page.results.is_empty() => {
                    if searching {
                        ListState::EmptySearch
                    } else {
                        ListState::EmptyNoSearch
                    }
                }
                Some(page) => ListState::Populated {
                    pagination: Pagination::new(page.total_pages, current_page),
                    items: page
                        .results
                        .into_iter()
                        .map(|product| ListItem {
                            image: ImageSlot::new(&product.image_url),
                            product,
                        })
                        .collect(),
                },
            },
        };
        true
    }

    /// Begin, send and resolve in one go, for callers that do not overlap
    /// requests.
    pub async fn load(&mut self, client: &Client, params: ListParams) -> &ListState {
        let ticket = self.begin(params);
        let outcome = ticket.request.send(client).await;
        self.resolve(ticket.seq, outcome);
        &self.state
    }

    /// Swaps one product's image for the placeholder. Returns true if the
    /// product is listed and its image changed.
    pub fn image_failed(&mut self, product_id: &str) -> bool {
        match &mut self.state {
            ListState::Populated { items, .. } => items
                .iter_mut()
                .find(|item| item.product.id == product_id)
                .is_some_and(|item| item.image.mark_failed()),
            _ => false,
        }
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        match &self.state {
            ListState::Populated { pagination, .. } => Some(pagination),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PLACEHOLDER_IMAGE;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: "Misc".to_string(),
            description: None,
            price: 10.0,
            image_url: format!("https://images.example.com/{id}.jpg"),
        }
    }

    fn page(results: Vec<Product>, total_items: u64, limit: u32, page: u32) -> ListOutcome {
        Ok(ServiceResponse {
            success: true,
            message: "ok".to_string(),
            data: Some(PaginatedResult {
                page,
                limit,
                total_items,
                total_pages: PaginatedResult::<Product>::pages_for(total_items, limit),
                results,
            }),
            status_code: 200,
        })
    }

    fn params(page: u32, term: Option<&str>) -> ListParams {
        ListParams {
            page,
            limit: 10,
            term: term.map(str::to_string),
        }
    }

    #[test]
    fn request_selection() {
        assert!(matches!(params(1, None).request(), ListRequest::List(_)));
        assert!(matches!(params(1, Some("  ")).request(), ListRequest::List(_)));
        match params(2, Some(" lamp ")).request() {
            ListRequest::Search(q) => {
                assert_eq!(q.term, "lamp");
                assert_eq!(q.common.page, 2);
                assert_eq!(q.common.limit, 10);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn starts_loading() {
        let view = ListView::new();
        assert!(view.is_loading());
        assert_eq!(view.state().message(), Some(LOADING_MESSAGE));
    }

    #[test]
    fn populated_carries_pagination() {
        let mut view = ListView::new();
        let ticket = view.begin(params(2, None));
        assert!(view.resolve(
            ticket.seq,
            page(vec![product("a"), product("b")], 25, 10, 2)
        ));

        match view.state() {
            ListState::Populated { items, pagination } => {
                assert_eq!(items.len(), 2);
                assert_eq!(pagination.total_pages(), 3);
                assert_eq!(pagination.current_page(), 2);
            }
            other => panic!("expected populated, got {other:?}"),
        }
        assert_eq!(view.state().message(), None);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let mut view = ListView::new();
        let ticket = view.begin(params(4, None));
        view.resolve(ticket.seq, page(vec![], 25, 10, 4));
        assert_eq!(*view.state(), ListState::EmptyNoSearch);
        assert_eq!(view.state().message(), Some(NO_PRODUCTS_MESSAGE));
    }

    #[test]
    fn empty_search_is_distinct() {
        let mut view = ListView::new();
        let ticket = view.begin(params(1, Some("zzz")));
        view.resolve(ticket.seq, page(vec![], 0, 10, 1));
        assert_eq!(*view.state(), ListState::EmptySearch);
        assert_eq!(view.state().message(), Some(NO_SEARCH_RESULTS_MESSAGE));
    }

    #[test]
    fn transport_failure_is_error() {
        let mut view = ListView::new();
        let ticket = view.begin(params(1, None));
        view.resolve(ticket.seq, Err(catalog_api::Error::RequestFailed));
        assert!(matches!(view.state(), ListState::Error { .. }));
        assert_eq!(view.state().message(), Some(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn null_payload_is_error() {
        let mut view = ListView::new();
        let ticket = view.begin(params(1, None));
        view.resolve(
            ticket.seq,
            Ok(ServiceResponse {
                success: true,
                message: "nothing".to_string(),
                data: None,
                status_code: 200,
            }),
        );
        assert!(matches!(view.state(), ListState::Error { .. }));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut view = ListView::new();
        let old = view.begin(params(1, None));
        let new = view.begin(params(2, None));

        view.resolve(new.seq, page(vec![product("new")], 20, 10, 2));
        assert!(!view.resolve(old.seq, page(vec![product("old")], 20, 10, 1)));

        match view.state() {
            ListState::Populated { items, .. } => assert_eq!(items[0].product.id, "new"),
            other => panic!("expected populated, got {other:?}"),
        }
    }

    #[test]
    fn stale_response_does_not_settle_loading() {
        let mut view = ListView::new();
        let old = view.begin(params(1, None));
        let _new = view.begin(params(1, Some("lamp")));

        assert!(!view.resolve(old.seq, page(vec![product("old")], 1, 10, 1)));
        assert!(view.is_loading());
    }

    #[test]
    fn new_input_restarts_at_loading() {
        let mut view = ListView::new();
        let ticket = view.begin(params(1, None));
        view.resolve(ticket.seq, page(vec![product("a")], 1, 10, 1));
        assert!(!view.is_loading());

        view.begin(params(1, Some("lamp")));
        assert!(view.is_loading());
    }

    #[test]
    fn image_failure_leaves_fetch_state() {
        let mut view = ListView::new();
        let ticket = view.begin(params(1, None));
        view.resolve(ticket.seq, page(vec![product("a"), product("b")], 2, 10, 1));

        assert!(view.image_failed("b"));
        assert!(!view.image_failed("missing"));

        match view.state() {
            ListState::Populated { items, pagination } => {
                assert_eq!(items[0].image.src(), "https://images.example.com/a.jpg");
                assert_eq!(items[1].image.src(), PLACEHOLDER_IMAGE);
                assert_eq!(pagination.total_pages(), 1);
            }
            other => panic!("expected populated, got {other:?}"),
        }
    }
}
