//! Input events routed by the wiring layer.
//!
//! The direction tracker samples on text input, caret clicks, and key
//! release; the prompt edits on text input and key press. Everything else
//! here exists so surfaces can react to focus and viewport changes.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Text input received
    TextInput {
        /// Input text
        text: String,
    },
    /// Surface gained focus
    FocusIn,
    /// Surface lost focus
    FocusOut,
    /// Viewport resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Keyboard key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter/Return key
    Enter,
    /// Escape key
    Escape,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Home key
    Home,
    /// End key
    End,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
}

impl Event {
    /// Check if this is a keyboard event.
    #[must_use]
    pub const fn is_keyboard(&self) -> bool {
        matches!(
            self,
            Self::KeyDown { .. } | Self::KeyUp { .. } | Self::TextInput { .. }
        )
    }

    /// Check if this is a focus event.
    #[must_use]
    pub const fn is_focus(&self) -> bool {
        matches!(self, Self::FocusIn | Self::FocusOut)
    }

    /// Get the position if this is a positional event.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseDown { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Whether this event moves or may move the caret of a text surface.
    ///
    /// These are the triggers the direction tracker samples on: typed
    /// input, caret clicks, and key release after arrow/edit keys.
    #[must_use]
    pub const fn moves_caret(&self) -> bool {
        matches!(
            self,
            Self::TextInput { .. } | Self::MouseDown { .. } | Self::KeyUp { .. }
        )
    }
}
