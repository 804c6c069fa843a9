//! Editable prompt surface.
//!
//! [`PromptInput`] is the text surface the user types into. It owns the
//! text, the caret (a character index), focus, and the disabled flag the
//! wiring layer sets after submission. It implements
//! [`TextSurface`](penpal_core::TextSurface) so the direction tracker can
//! read its geometry.

use penpal_core::surface::{SurfaceStyle, TextSurface};
use penpal_core::{Event, Key, Rect};
use serde::{Deserialize, Serialize};

/// Message emitted by prompt event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptMessage {
    /// The text changed.
    Changed {
        /// The new text value
        value: String,
    },
    /// Enter was pressed.
    Submitted {
        /// The text at submission time
        value: String,
    },
}

/// Editable text-input surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptInput {
    /// Current text value
    value: String,
    /// Placeholder text
    placeholder: String,
    /// Whether the input is disabled
    disabled: bool,
    /// Computed box-model style
    style: SurfaceStyle,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Whether focused
    #[serde(skip)]
    focused: bool,
    /// Caret position (character index)
    #[serde(skip)]
    caret: usize,
}

impl Default for PromptInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptInput {
    /// Create a new prompt.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            disabled: false,
            style: SurfaceStyle::default(),
            bounds: Rect::default(),
            focused: false,
            caret: 0,
        }
    }

    /// Set the current value, moving the caret to the end.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.caret = self.value.chars().count();
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the box-model style.
    #[must_use]
    pub const fn with_style(mut self, style: SurfaceStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the current value.
    #[must_use]
    pub fn get_value(&self) -> &str {
        &self.value
    }

    /// Get the placeholder.
    #[must_use]
    pub fn get_placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check if focused.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Check if disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Caret position as a character index.
    #[must_use]
    pub const fn caret_position(&self) -> usize {
        self.caret
    }

    /// Disable the input. The wiring layer calls this once the session
    /// gate is claimed; there is no way back short of a new session.
    pub fn disable(&mut self) {
        self.disabled = true;
        self.focused = false;
    }

    /// Lay the prompt out, keeping the style's width in sync.
    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.style.width = bounds.width;
    }

    /// Move the caret to a character index, clamped to the text.
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.value.chars().count());
    }

    /// Handle an input event.
    pub fn event(&mut self, event: &Event) -> Option<PromptMessage> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseDown { position, .. } => {
                let was_focused = self.focused;
                self.focused = self.bounds.contains_point(position);
                if self.focused && !was_focused {
                    self.caret = self.value.chars().count();
                }
            }
            Event::FocusIn => self.focused = true,
            Event::FocusOut => self.focused = false,
            Event::TextInput { text } if self.focused => {
                if self.insert_text(text) {
                    return Some(PromptMessage::Changed {
                        value: self.value.clone(),
                    });
                }
            }
            Event::KeyDown { key } if self.focused => match key {
                Key::Backspace => {
                    if self.backspace() {
                        return Some(PromptMessage::Changed {
                            value: self.value.clone(),
                        });
                    }
                }
                Key::Delete => {
                    if self.delete() {
                        return Some(PromptMessage::Changed {
                            value: self.value.clone(),
                        });
                    }
                }
                Key::Left => self.caret = self.caret.saturating_sub(1),
                Key::Right => self.set_caret(self.caret + 1),
                Key::Home => self.caret = 0,
                Key::End => self.caret = self.value.chars().count(),
                Key::Enter => {
                    return Some(PromptMessage::Submitted {
                        value: self.value.clone(),
                    });
                }
                _ => {}
            },
            _ => {}
        }

        None
    }

    /// Insert text at the caret.
    fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let byte = char_to_byte(&self.value, self.caret);
        self.value.insert_str(byte, text);
        self.caret += text.chars().count();
        true
    }

    /// Delete the character before the caret.
    fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        let byte = char_to_byte(&self.value, self.caret);
        self.value.remove(byte);
        true
    }

    /// Delete the character at the caret.
    fn delete(&mut self) -> bool {
        if self.caret >= self.value.chars().count() {
            return false;
        }
        let byte = char_to_byte(&self.value, self.caret);
        self.value.remove(byte);
        true
    }
}

impl TextSurface for PromptInput {
    fn text(&self) -> &str {
        &self.value
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn inner_width(&self) -> f32 {
        self.style.inner_width()
    }

    fn style(&self) -> SurfaceStyle {
        self.style
    }
}

/// Byte offset of the `idx`-th character, clamped to the end.
fn char_to_byte(s: &str, idx: usize) -> usize {
    s.char_indices().nth(idx).map_or(s.len(), |(byte, _)| byte)
}
