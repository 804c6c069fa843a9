//! The fixed thought script and its timing table.
//!
//! A [`ThoughtScript`] is an ordered, immutable sequence of text stanzas
//! the sequencer types into the thought bubble, plus the [`Timing`]
//! constants governing every suspension in the cinematic sequence.
//! Typing and deleting operate on grapheme clusters so multi-byte text
//! never splits mid-cluster.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Timing constants for the scripted sequence, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Delay between typed units
    pub type_delay_ms: u64,
    /// Delay between deleted units
    pub delete_delay_ms: u64,
    /// Hold after a stanza finishes typing
    pub hold_ms: u64,
    /// Settle delay after the final hold, before exit transitions
    pub settle_ms: u64,
    /// Duration of the exit transitions
    pub exit_ms: u64,
    /// Duration of the reveal scroll
    pub scroll_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_delay_ms: 50,
            delete_delay_ms: 30,
            hold_ms: 3000,
            settle_ms: 500,
            exit_ms: 1000,
            scroll_ms: 1500,
        }
    }
}

impl Timing {
    /// Set the per-unit typing delay.
    #[must_use]
    pub const fn with_type_delay_ms(mut self, ms: u64) -> Self {
        self.type_delay_ms = ms;
        self
    }

    /// Set the per-unit deleting delay.
    #[must_use]
    pub const fn with_delete_delay_ms(mut self, ms: u64) -> Self {
        self.delete_delay_ms = ms;
        self
    }

    /// Set the post-stanza hold.
    #[must_use]
    pub const fn with_hold_ms(mut self, ms: u64) -> Self {
        self.hold_ms = ms;
        self
    }

    /// Set the settle delay before the exit transitions.
    #[must_use]
    pub const fn with_settle_ms(mut self, ms: u64) -> Self {
        self.settle_ms = ms;
        self
    }

    /// Set the exit transition duration.
    #[must_use]
    pub const fn with_exit_ms(mut self, ms: u64) -> Self {
        self.exit_ms = ms;
        self
    }

    /// Set the reveal scroll duration.
    #[must_use]
    pub const fn with_scroll_ms(mut self, ms: u64) -> Self {
        self.scroll_ms = ms;
        self
    }
}

/// Ordered, immutable sequence of thought stanzas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoughtScript {
    stanzas: Vec<String>,
    timing: Timing,
}

impl ThoughtScript {
    /// Create a script from stanza texts with default timing.
    #[must_use]
    pub fn new<I, S>(stanzas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stanzas: stanzas.into_iter().map(Into::into).collect(),
            timing: Timing::default(),
        }
    }

    /// Override the timing table.
    #[must_use]
    pub const fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Timing table.
    #[must_use]
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Stanza text by index.
    #[must_use]
    pub fn stanza(&self, index: usize) -> Option<&str> {
        self.stanzas.get(index).map(String::as_str)
    }

    /// Number of stanzas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stanzas.len()
    }

    /// Whether the script has no stanzas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stanzas.is_empty()
    }

    /// Number of typing units (grapheme clusters) in a stanza.
    #[must_use]
    pub fn unit_count(&self, index: usize) -> usize {
        self.stanza(index)
            .map_or(0, |s| s.graphemes(true).count())
    }

    /// The first `units` grapheme clusters of a stanza.
    #[must_use]
    pub fn unit_prefix(&self, index: usize, units: usize) -> &str {
        let Some(stanza) = self.stanza(index) else {
            return "";
        };
        match stanza.grapheme_indices(true).nth(units) {
            Some((byte, _)) => &stanza[..byte],
            None => stanza,
        }
    }
}
