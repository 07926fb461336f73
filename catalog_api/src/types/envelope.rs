use serde::{Deserialize, Serialize};

/// The `{ success, message, data, statusCode }` wrapper around every payload.
///
/// `data` is absent-capable even when `success` is true: a detail lookup for
/// an unknown id answers with `data: null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    pub status_code: u16,
}

impl<T> ServiceResponse<T> {
    /// Consumes the envelope and returns the payload, if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// One page of results plus the paging bookkeeping.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub results: Vec<T>,
}

impl<T> PaginatedResult<T> {
    /// Number of pages needed for `total_items` at `limit` per page.
    /// A zero limit yields zero pages.
    pub fn pages_for(total_items: u64, limit: u32) -> u32 {
        if limit == 0 {
            return 0;
        }
        let pages = total_items.div_ceil(u64::from(limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
