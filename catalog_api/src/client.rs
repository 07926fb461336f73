//! HTTP client for the product service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ProductQuery, Query, SearchQuery},
    types::{PaginatedResult, Product, ServiceResponse},
    Error,
};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("catalog/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the product service.
///
/// Every call returns the service's envelope untouched. Transport failures,
/// non-2xx statuses and unparseable bodies come back as [`Error`]; nothing is
/// retried.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to `http://localhost:3000`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at a product service on localhost.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    fn http_client() -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);
        let resp = Self::http_client()?
            .get(url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches one page of the full product listing.
    pub async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> Result<ServiceResponse<PaginatedResult<Product>>, Error> {
        let url = query.add_to_url(&self.get_url("/products")?);
        self.get(url).await
    }

    /// Fetches a single product. An unknown id is not an error: the envelope
    /// comes back with `data` set to `None`.
    pub async fn get_product(&self, id: &str) -> Result<ServiceResponse<Product>, Error> {
        let mut url = self.get_url("/products")?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry path segments: {}", self.base_api_url);
                Error::RequestFailed
            })?
            .push(id);
        self.get(url).await
    }

    /// Fetches one page of products matching `query.term`.
    pub async fn search_products(
        &self,
        query: &SearchQuery,
    ) -> Result<ServiceResponse<PaginatedResult<Product>>, Error> {
        let url = query.add_to_url(&self.get_url("/products/search")?);
        self.get(url).await
    }

    /// Checks that an image reference can be loaded. Any transport failure or
    /// non-2xx status counts as a failed load.
    pub async fn probe_image(&self, image_url: &str) -> Result<(), Error> {
        let url = Url::parse(image_url).map_err(|e| {
            tracing::debug!("Unparseable image URL {}: {}", image_url, e);
            Error::RequestFailed
        })?;
        let resp = Self::http_client()?.get(url).send().await.map_err(|e| {
            tracing::debug!("Image probe failed for {}: {}", image_url, e);
            Error::RequestFailed
        })?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!("Image probe for {} returned {}", image_url, status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: String::new(),
            });
        }
        Ok(())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::{truncate_body, Client};

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Client::with_base_url("http://api.test/");
        assert_eq!(client.base_url(), "http://api.test");
    }

    #[test]
    fn default_base_url_is_localhost() {
        assert_eq!(Client::default().base_url(), "http://localhost:3000");
    }

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
    }
}
