//! Page-selection affordances for a paged listing.

use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum Affordance {
    /// Jump to page 1.
    First,
    /// A specific page number.
    Page(u32),
    /// Jump to the last page.
    Last,
}

impl fmt::Display for Affordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affordance::First => write!(f, "«"),
            Affordance::Page(n) => write!(f, "{}", n),
            Affordance::Last => write!(f, "»"),
        }
    }
}

/// One selectable control: what it is, where it goes, and whether it can be
/// selected from the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Control {
    pub affordance: Affordance,
    pub target: u32,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    total_pages: u32,
    current_page: u32,
}

impl Pagination {
    pub fn new(total_pages: u32, current_page: u32) -> Self {
        Self {
            total_pages,
            current_page,
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// One control per page number, the current page disabled.
    pub fn page_controls(&self) -> Vec<Control> {
        (1..=self.total_pages)
            .map(|n| Control {
                affordance: Affordance::Page(n),
                target: n,
                disabled: n == self.current_page,
            })
            .collect()
    }

    /// The full strip: first, every page, last. Empty when there are no pages.
    pub fn controls(&self) -> Vec<Control> {
        if self.total_pages == 0 {
            return Vec::new();
        }
        let mut controls = Vec::with_capacity(self.total_pages as usize + 2);
        controls.push(Control {
            affordance: Affordance::First,
            target: 1,
            disabled: self.current_page == 1,
        });
        controls.extend(self.page_controls());
        controls.push(Control {
            affordance: Affordance::Last,
            target: self.total_pages,
            disabled: self.current_page == self.total_pages,
        });
        controls
    }

    /// Page to report upward for `control`, or `None` if it is disabled.
    pub fn select(&self, control: &Control) -> Option<u32> {
        if control.disabled {
            None
        } else {
            Some(control.target)
        }
    }

    /// Target of a direct jump, if it lands on a different, existing page.
    pub fn go_to(&self, page: u32) -> Option<u32> {
        if (1..=self.total_pages).contains(&page) && page != self.current_page {
            Some(page)
        } else {
            None
        }
    }

    pub fn next(&self) -> Option<u32> {
        self.go_to(self.current_page.saturating_add(1))
    }

    pub fn previous(&self) -> Option<u32> {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn first(&self) -> Option<u32> {
        self.go_to(1)
    }

    pub fn last(&self) -> Option<u32> {
        self.go_to(self.total_pages)
    }
}
