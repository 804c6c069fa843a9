//! Monospace measurement surrogate.
//!
//! [`MonospaceProbe`] is the off-screen mirror the direction tracker owns.
//! It reproduces the prompt's box model and lays the caret prefix out with
//! greedy word wrap, returning the within-line x offset a marker placed
//! after the prefix would have. Cell advances come from `unicode-width`,
//! scaled by the mirrored font size.

use penpal_core::surface::{CaretProbe, SurfaceStyle};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Horizontal advance of one cell, as a fraction of the font size.
const CELL_ADVANCE_EM: f32 = 0.6;

/// Measurement surrogate with a monospace layout model.
#[derive(Debug, Clone)]
pub struct MonospaceProbe {
    style: SurfaceStyle,
}

impl MonospaceProbe {
    /// Create a probe mirroring the given style.
    #[must_use]
    pub const fn new(style: SurfaceStyle) -> Self {
        Self { style }
    }

    /// Width of one text cell.
    fn cell_width(&self) -> f32 {
        self.style.font_size * CELL_ADVANCE_EM
    }

    /// Advance of a text fragment, in pixels.
    fn advance(&self, fragment: &str) -> f32 {
        fragment.width() as f32 * self.cell_width()
    }
}

impl CaretProbe for MonospaceProbe {
    fn sync(&mut self, style: &SurfaceStyle) {
        self.style = *style;
    }

    fn measure_prefix(&mut self, prefix: &str) -> Option<f32> {
        let inner = self.style.inner_width();
        if !inner.is_finite() || inner <= 0.0 || self.cell_width() <= 0.0 {
            return None;
        }

        // Greedy word wrap over space-delimited words; words wider than a
        // full line wrap at cell granularity. The marker offset is the x
        // position after the last laid-out fragment.
        let mut x = 0.0f32;
        for word in prefix.split_inclusive(' ') {
            let width = self.advance(word);
            if x + width > inner && x > 0.0 {
                x = 0.0;
            }
            if width > inner {
                for grapheme in word.graphemes(true) {
                    let advance = self.advance(grapheme);
                    if x + advance > inner && x > 0.0 {
                        x = 0.0;
                    }
                    x += advance;
                }
            } else {
                x += width;
            }
        }
        Some(x)
    }
}
