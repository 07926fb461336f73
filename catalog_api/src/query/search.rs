use url::Url;

use super::{common::QueryCommon, Query};

/// Query for the term search, `GET /products/search`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub common: QueryCommon,
    pub term: String,
}

impl Query for SearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("term", self.term.as_str());
        self.common.add_to_url(&url)
    }
}

impl SearchQuery {
    pub fn with_term(mut self, term: &str) -> Self {
        self.term = term.to_string();
        self
    }
}
