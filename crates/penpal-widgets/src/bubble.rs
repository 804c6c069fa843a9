//! Thought bubble surface.
//!
//! The bubble shows the typewriter text while the sequence runs, then
//! floats upward during the exit transition. It starts hidden; the
//! sequencer's `ShowThought` effect reveals it.

use penpal_core::surface::Visibility;
use penpal_core::{EasedValue, Easing};
use serde::{Deserialize, Serialize};

/// How far the bubble floats up during the exit transition.
pub const FLOAT_DISTANCE: f64 = 40.0;

/// Thought bubble with settable text content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThoughtBubble {
    /// Current bubble text
    text: String,
    /// Whether the bubble is shown
    visible: bool,
    /// Upward float transition, if running
    #[serde(skip)]
    float: Option<EasedValue>,
}

impl ThoughtBubble {
    /// Create a hidden, empty bubble.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bubble text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the bubble text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current upward offset from the resting position.
    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.float.as_ref().map_or(0.0, EasedValue::value)
    }

    /// Start the fire-and-forget upward float.
    pub fn begin_float_up(&mut self, duration_secs: f64) {
        self.float =
            Some(EasedValue::new(0.0, -FLOAT_DISTANCE, duration_secs).with_easing(Easing::CubicInOut));
    }

    /// Advance the float transition.
    pub fn tick(&mut self, dt_secs: f64) {
        if let Some(float) = &mut self.float {
            float.update(dt_secs);
        }
    }
}

impl Visibility for ThoughtBubble {
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
