//! Character sprite surface.
//!
//! [`CharacterSprite`] displays the animated character. The direction
//! tracker points it at sprite resources; the sequencer's exit phase
//! slides it downward and finally hides it.

use penpal_core::surface::{SpriteSurface, Visibility};
use penpal_core::{Direction, EasedValue, Easing};
use serde::{Deserialize, Serialize};

/// How far the character slides down during the exit transition.
pub const SLIDE_DISTANCE: f64 = 80.0;

/// Displayable character surface with a settable sprite resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSprite {
    /// Current image resource path
    source: String,
    /// Alternative text
    alt: String,
    /// Whether the region is shown
    visible: bool,
    /// Downward slide transition, if running
    #[serde(skip)]
    slide: Option<EasedValue>,
}

impl Default for CharacterSprite {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterSprite {
    /// Create a sprite showing the idle pose.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: Direction::Idle.sprite_path(),
            alt: String::new(),
            visible: true,
            slide: None,
        }
    }

    /// Set the alt text.
    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Current image resource path.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the alt text.
    #[must_use]
    pub fn get_alt(&self) -> &str {
        &self.alt
    }

    /// Current downward offset from the resting position.
    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.slide.as_ref().map_or(0.0, EasedValue::value)
    }

    /// Start the fire-and-forget downward slide.
    pub fn begin_slide_down(&mut self, duration_secs: f64) {
        self.slide =
            Some(EasedValue::new(0.0, SLIDE_DISTANCE, duration_secs).with_easing(Easing::CubicInOut));
    }

    /// Advance the slide transition.
    pub fn tick(&mut self, dt_secs: f64) {
        if let Some(slide) = &mut self.slide {
            slide.update(dt_secs);
        }
    }
}

impl SpriteSurface for CharacterSprite {
    fn set_sprite(&mut self, path: &str) {
        self.source = path.to_string();
    }
}

impl Visibility for CharacterSprite {
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
