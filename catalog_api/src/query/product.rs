use url::Url;

use super::{common::QueryCommon, Query};

/// Query for the plain paged listing, `GET /products`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub common: QueryCommon,
}

impl Query for ProductQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
