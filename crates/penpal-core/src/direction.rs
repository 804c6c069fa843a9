//! Character facing directions and cursor classification.
//!
//! The character sprite faces one of a small closed set of directions,
//! chosen from where the caret sits horizontally inside the prompt. The
//! classification is a pure function over a [`CursorSample`] so it can be
//! tested without any rendering surface.
//!
//! The resource naming scheme (`assets/character/<direction>.png`) is the
//! only wire format in the system and must stay byte-exact for asset
//! compatibility.

use serde::{Deserialize, Serialize};

/// Directory holding the character sprite assets.
pub const SPRITE_DIR: &str = "assets/character";

/// Discrete facing direction of the animated character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Resting pose, shown when the prompt is empty
    #[default]
    Idle,
    /// Caret in the leftmost region
    LookLeft,
    /// Caret left of center
    LookDownLeft,
    /// Caret around the center
    LookDown,
    /// Caret right of center
    LookDownRight,
    /// Caret in the rightmost region
    LookRight,
}

impl Direction {
    /// All directions, in left-to-right order after `Idle`.
    pub const ALL: [Self; 6] = [
        Self::Idle,
        Self::LookLeft,
        Self::LookDownLeft,
        Self::LookDown,
        Self::LookDownRight,
        Self::LookRight,
    ];

    /// Kebab-case name used in resource paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::LookLeft => "look-left",
            Self::LookDownLeft => "look-down-left",
            Self::LookDown => "look-down",
            Self::LookDownRight => "look-down-right",
            Self::LookRight => "look-right",
        }
    }

    /// Parse a direction name.
    ///
    /// Anything outside the recognized set coerces to `Idle` — never an
    /// error.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "look-left" => Self::LookLeft,
            "look-down-left" => Self::LookDownLeft,
            "look-down" => Self::LookDown,
            "look-down-right" => Self::LookDownRight,
            "look-right" => Self::LookRight,
            _ => Self::Idle,
        }
    }

    /// Sprite resource path for this direction.
    #[must_use]
    pub fn sprite_path(self) -> String {
        format!("{SPRITE_DIR}/{}.png", self.name())
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One geometry sample of the caret inside the prompt surface.
///
/// Ephemeral — computed per update from the current text and caret index,
/// never persisted. The offset can exceed the container width at text-wrap
/// boundaries; classification tie-breaks into the nearest edge bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorSample {
    /// Rendered horizontal offset of the caret from the surface origin
    pub horizontal_offset: f32,
    /// Visible width of the text surface
    pub container_width: f32,
}

impl CursorSample {
    /// Create a new sample.
    #[must_use]
    pub const fn new(horizontal_offset: f32, container_width: f32) -> Self {
        Self {
            horizontal_offset,
            container_width,
        }
    }
}

/// Classify a cursor sample into a facing direction.
///
/// Five buckets whose thresholds are multiples of the HALF-width, not of
/// the normalized 0-1 range. Unmeasurable geometry (zero, negative, or
/// non-finite values) degrades to the centered `LookDown` classification
/// rather than dividing by zero.
#[must_use]
pub fn classify(sample: &CursorSample) -> Direction {
    let width = sample.container_width;
    let offset = sample.horizontal_offset;
    if !width.is_finite() || width <= 0.0 || !offset.is_finite() {
        return Direction::LookDown;
    }

    let center = width / 2.0;
    if offset < 0.5 * center {
        Direction::LookLeft
    } else if offset < 0.85 * center {
        Direction::LookDownLeft
    } else if offset < 1.15 * center {
        Direction::LookDown
    } else if offset < 1.5 * center {
        Direction::LookDownRight
    } else {
        Direction::LookRight
    }
}
