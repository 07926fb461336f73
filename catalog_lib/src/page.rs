//! Catalog page composition: owns the search term and the current page.

use crate::list_view::ListParams;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogPage {
    search_term: String,
    page: u32,
    limit: u32,
}

impl CatalogPage {
    pub fn new(limit: u32) -> Self {
        Self {
            search_term: String::new(),
            page: 1,
            limit,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// A new term always sends the listing back to page 1. Returns true if
    /// either value changed.
    pub fn on_search(&mut self, term: &str) -> bool {
        let changed = self.search_term != term || self.page != 1;
        self.search_term = term.to_string();
        self.page = 1;
        changed
    }

    pub fn on_page_change(&mut self, page: u32) -> bool {
        let changed = self.page != page;
        self.page = page;
        changed
    }

    pub fn list_params(&self) -> ListParams {
        ListParams {
            page: self.page,
            limit: self.limit,
            term: (!self.search_term.is_empty()).then(|| self.search_term.clone()),
        }
    }
}
