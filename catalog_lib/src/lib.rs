//! Library layer for the catalog viewer: the headless presentation state
//! behind the catalog and product screens.
//!
//! Wraps the `catalog_api` client with the search box policy, debounce,
//! list and detail view state machines, pagination, page composition and a
//! session driver that ties them together.

pub mod config;
pub mod debounce;
pub mod detail_view;
pub mod error;
pub mod image;
pub mod list_view;
pub mod page;
pub mod pagination;
pub mod route;
pub mod search;
pub mod sequence;
pub mod session;
pub mod validation;

pub use catalog_api;
pub use catalog_api::types;
pub use catalog_api::{Client, ProductQuery, Query, SearchQuery};

pub use config::CatalogConfig;
pub use detail_view::{DetailState, DetailView};
pub use error::CatalogError;
pub use image::{ImageSlot, PLACEHOLDER_IMAGE};
pub use list_view::{ListItem, ListParams, ListState, ListView};
pub use page::CatalogPage;
pub use pagination::{Affordance, Control, Pagination};
pub use route::Route;
pub use search::{SearchControl, SearchSignal};
pub use session::{CatalogSession, SessionUpdate};
