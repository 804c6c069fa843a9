//! Conversation log view.
//!
//! [`TranscriptView`] stores the transcript, tracks a vertical offset for
//! each entry, and smooth-scrolls toward newly revealed entries with a
//! cubic ease-out. It also holds the action controls appended after the
//! reveal; activating one shows the auxiliary detail panel.

use penpal_core::surface::{TranscriptSink, Visibility};
use penpal_core::{EasedValue, Easing, Entry, EntryId, Participant, Transcript};
use serde::{Deserialize, Serialize};

/// Line height used for entry height estimates.
pub const ENTRY_LINE_HEIGHT: f32 = 24.0;

/// Vertical spacing between entries.
pub const ENTRY_SPACING: f32 = 16.0;

/// Default reveal-scroll duration in seconds.
const DEFAULT_SCROLL_SECS: f64 = 1.5;

/// An action control appended below a revealed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionControl {
    /// Button label
    pub label: String,
}

/// Scrollable conversation log.
#[derive(Debug, Clone)]
pub struct TranscriptView {
    transcript: Transcript,
    /// Top y offset of each entry, indexed by entry id
    offsets: Vec<f32>,
    content_height: f32,
    viewport_height: f32,
    scroll: f64,
    scroll_anim: Option<EasedValue>,
    scroll_secs: f64,
    actions: Vec<ActionControl>,
}

impl Default for TranscriptView {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptView {
    /// Create an empty log view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            offsets: Vec::new(),
            content_height: 0.0,
            viewport_height: 480.0,
            scroll: 0.0,
            scroll_anim: None,
            scroll_secs: DEFAULT_SCROLL_SECS,
            actions: Vec::new(),
        }
    }

    /// Set the viewport height.
    #[must_use]
    pub const fn with_viewport_height(mut self, height: f32) -> Self {
        self.viewport_height = height;
        self
    }

    /// Set the reveal-scroll duration.
    #[must_use]
    pub const fn with_scroll_secs(mut self, secs: f64) -> Self {
        self.scroll_secs = secs;
        self
    }

    /// The stored transcript.
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Top y offset of an entry.
    #[must_use]
    pub fn entry_top(&self, id: EntryId) -> Option<f32> {
        self.offsets.get(id.raw() as usize).copied()
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    /// Whether a scroll animation is running.
    #[must_use]
    pub const fn is_scrolling(&self) -> bool {
        self.scroll_anim.is_some()
    }

    /// Begin a smooth scroll that aligns the entry's top near the
    /// viewport top.
    pub fn scroll_to(&mut self, id: EntryId) {
        let Some(top) = self.entry_top(id) else {
            return;
        };
        let max_scroll = f64::from((self.content_height - self.viewport_height).max(0.0));
        let target = f64::from(top).min(max_scroll);
        self.scroll_anim =
            Some(EasedValue::new(self.scroll, target, self.scroll_secs).with_easing(Easing::CubicOut));
    }

    /// Advance the scroll animation.
    pub fn tick(&mut self, dt_secs: f64) {
        if let Some(anim) = &mut self.scroll_anim {
            anim.update(dt_secs);
            self.scroll = anim.value();
            if anim.is_complete() {
                self.scroll_anim = None;
            }
        }
    }

    /// Append an action control, returning its index.
    pub fn push_action(&mut self, label: impl Into<String>) -> usize {
        self.actions.push(ActionControl {
            label: label.into(),
        });
        self.actions.len() - 1
    }

    /// Appended action controls, in order.
    #[must_use]
    pub fn actions(&self) -> &[ActionControl] {
        &self.actions
    }

    /// Activate an action control: shows the detail region.
    ///
    /// Returns whether the index named an existing control.
    pub fn activate_action(&mut self, index: usize, detail: &mut dyn Visibility) -> bool {
        if index >= self.actions.len() {
            return false;
        }
        detail.show();
        true
    }

    /// Estimated rendered height of an entry.
    fn entry_height(content: &str) -> f32 {
        let lines = content.lines().count().max(1) as f32;
        lines.mul_add(ENTRY_LINE_HEIGHT, ENTRY_SPACING)
    }
}

impl TranscriptSink for TranscriptView {
    fn append(
        &mut self,
        participant: Participant,
        content: &str,
        avatar: Option<&str>,
    ) -> EntryId {
        let mut entry = Entry::new(participant, content);
        if let Some(avatar) = avatar {
            entry = entry.with_avatar(avatar);
        }
        let id = self.transcript.push(entry);
        self.offsets.push(self.content_height);
        self.content_height += Self::entry_height(content);
        id
    }
}
