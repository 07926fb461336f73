//! The two navigation shapes the viewer takes parameters from.

use std::fmt;

use percent_encoding::percent_decode_str;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Catalog,
    /// `/products/{id}`
    ProductDetail { id: String },
}

impl Route {
    /// Parses a path. Query strings and fragments are ignored; a trailing
    /// slash is tolerated. Anything else is `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        match segments.as_slice() {
            [] if path.starts_with('/') => Some(Route::Catalog),
            ["products", id] => Some(Route::ProductDetail {
                id: percent_decode(id),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Catalog => write!(f, "/"),
            Route::ProductDetail { id } => write!(f, "/products/{}", id),
        }
    }
}

fn percent_decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
