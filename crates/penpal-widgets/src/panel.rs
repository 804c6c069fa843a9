//! Disclosure panel.
//!
//! A plain show/hide region used for the auxiliary detail view the reveal
//! action opens, and for any sidebar-like region the page wants to
//! collapse. State is a single boolean; persistence belongs to the page.

use penpal_core::surface::Visibility;
use serde::{Deserialize, Serialize};

/// Collapsible region with boolean visibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisclosurePanel {
    /// Panel title
    title: String,
    /// Whether the panel is shown
    visible: bool,
}

impl DisclosurePanel {
    /// Create a hidden panel.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            visible: false,
        }
    }

    /// Panel title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Flip visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

impl Visibility for DisclosurePanel {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
