//! Collaborator surface contracts.
//!
//! The core never touches a rendering backend. Everything it needs from
//! the page — a sprite it can point at an image, a text surface it can
//! measure, regions it can show and hide, a conversation log it can append
//! to — is expressed as a trait here, implemented by the widgets crate and
//! by test fakes.

use crate::transcript::{EntryId, Participant};
use serde::{Deserialize, Serialize};

/// Computed box-model style of a text surface.
///
/// The measurement surrogate mirrors these values so its geometry matches
/// the real surface, including after viewport resizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    /// Outer width of the surface
    pub width: f32,
    /// Horizontal padding on each side
    pub padding: f32,
    /// Border width on each side
    pub border: f32,
    /// Font size
    pub font_size: f32,
    /// Line height
    pub line_height: f32,
}

impl SurfaceStyle {
    /// Usable inner width for laying out text.
    #[must_use]
    pub fn inner_width(&self) -> f32 {
        (self.border.mul_add(-2.0, self.padding.mul_add(-2.0, self.width))).max(0.0)
    }
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            width: 320.0,
            padding: 8.0,
            border: 1.0,
            font_size: 16.0,
            line_height: 24.0,
        }
    }
}

/// A displayable surface with a settable image resource.
pub trait SpriteSurface {
    /// Point the surface at an image resource path.
    fn set_sprite(&mut self, path: &str);
}

/// A text-input surface the tracker reads from.
///
/// The caret offset is a character index into the current text, clamped to
/// `[0, text.chars().count()]` by implementations.
pub trait TextSurface {
    /// Current text content.
    fn text(&self) -> &str;

    /// Caret offset as a character index.
    fn caret(&self) -> usize;

    /// Visible inner width available to text.
    fn inner_width(&self) -> f32;

    /// Computed box-model style.
    fn style(&self) -> SurfaceStyle;
}

/// The measurement surrogate owned by the direction tracker.
///
/// An off-screen, non-interactive mirror of the text surface used only for
/// geometry probing; it is never exposed to the rest of the page.
pub trait CaretProbe {
    /// Re-synchronize the surrogate's box model with the text surface.
    fn sync(&mut self, style: &SurfaceStyle);

    /// Measure the rendered horizontal offset of a marker placed directly
    /// after `prefix`. Returns `None` when the geometry is unmeasurable.
    fn measure_prefix(&mut self, prefix: &str) -> Option<f32>;
}

/// Boolean show/hide control for a page region.
pub trait Visibility {
    /// Make the region visible.
    fn show(&mut self);

    /// Hide the region.
    fn hide(&mut self);

    /// Current visibility.
    fn is_visible(&self) -> bool;
}

/// Sink for conversation log entries.
pub trait TranscriptSink {
    /// Append an entry; the returned handle supports scroll targeting.
    fn append(
        &mut self,
        participant: Participant,
        content: &str,
        avatar: Option<&str>,
    ) -> EntryId;
}
