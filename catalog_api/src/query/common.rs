//! Shared query infrastructure: the [`Query`] trait and the [`QueryCommon`] paging fields.

use url::Url;

/// Page size used when the caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = limit;
        self
    }
}

/// Paging fields shared by the list and search queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
    /// Results per page. Defaults to [`DEFAULT_LIMIT`].
    pub limit: u32,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryCommon {
    /// Appends the `page` and `limit` parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string())
            .append_pair("limit", &self.limit.to_string());
        url
    }
}
