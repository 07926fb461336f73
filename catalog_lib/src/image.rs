//! Per-render image state with a fixed placeholder fallback.

use serde::Serialize;

/// Substituted when a product image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300?text=No+Image+Available";

/// The image reference a view should show for one product.
///
/// Starts on the product's own URL and flips to [`PLACEHOLDER_IMAGE`] once a
/// load failure is reported. The flip is local render state and never touches
/// the fetch state of the owning view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    primary: String,
    failed: bool,
}

impl ImageSlot {
    pub fn new(primary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            failed: false,
        }
    }

    /// The reference to render right now.
    pub fn src(&self) -> &str {
        if self.failed {
            PLACEHOLDER_IMAGE
        } else {
            &self.primary
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Records a load failure. Returns true if this changed what is shown.
    pub fn mark_failed(&mut self) -> bool {
        let changed = !self.failed;
        self.failed = true;
        changed
    }

    pub fn is_placeholder(&self) -> bool {
        self.failed
    }
}
