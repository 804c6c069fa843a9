//! Cursor-driven character direction tracking.
//!
//! [`DirectionTracker`] maps the caret's rendered horizontal position
//! inside the prompt to a facing direction and writes the matching sprite
//! resource exactly when the direction changes. Sampling is rate limited,
//! tolerant of unmeasurable geometry, and never fails: this is a
//! background embellishment that must not break input handling.

use crate::direction::{classify, CursorSample, Direction};
use crate::surface::{CaretProbe, SpriteSurface, SurfaceStyle, TextSurface};

/// Default rate-limit window between successful updates.
pub const DEFAULT_THROTTLE_MS: u64 = 50;

/// Tracks the caret and keeps the character sprite facing it.
///
/// Owns the measurement surrogate (`probe`); the sprite and text surfaces
/// are borrowed per call so a single tracker can outlive page relayouts.
#[derive(Debug)]
pub struct DirectionTracker<P> {
    probe: P,
    current: Direction,
    last_update_ms: Option<u64>,
    throttle_ms: u64,
}

impl<P: CaretProbe> DirectionTracker<P> {
    /// Create a tracker owning the given measurement probe.
    ///
    /// Starts in `Idle` — the resting sprite the page loads with.
    #[must_use]
    pub const fn new(probe: P) -> Self {
        Self {
            probe,
            current: Direction::Idle,
            last_update_ms: None,
            throttle_ms: DEFAULT_THROTTLE_MS,
        }
    }

    /// Override the rate-limit window.
    #[must_use]
    pub const fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    /// Current facing direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.current
    }

    /// Re-synchronize the probe's box model after a viewport resize.
    pub fn sync_probe(&mut self, style: &SurfaceStyle) {
        self.probe.sync(style);
    }

    /// Sample the caret and update the sprite if the direction changed.
    ///
    /// Returns whether a sprite write happened. This is a rate limit, not
    /// a debounce: a call landing inside the window is dropped outright,
    /// never deferred.
    pub fn sample_and_update(
        &mut self,
        now_ms: u64,
        input: &dyn TextSurface,
        sprite: &mut dyn SpriteSurface,
    ) -> bool {
        if let Some(last) = self.last_update_ms {
            if now_ms.saturating_sub(last) < self.throttle_ms {
                return false;
            }
        }
        self.last_update_ms = Some(now_ms);

        let text = input.text();
        if text.is_empty() {
            return self.set_direction(Direction::Idle, sprite);
        }

        let prefix = caret_prefix(text, input.caret());
        let direction = self.probe.measure_prefix(prefix).map_or(
            // Unmeasurable geometry degrades to the centered pose.
            Direction::LookDown,
            |offset| classify(&CursorSample::new(offset, input.inner_width())),
        );
        self.set_direction(direction, sprite)
    }

    /// Apply a direction, writing the sprite resource on change only.
    ///
    /// Redundant applications are suppressed so repeated samples of the
    /// same region cost nothing.
    pub fn set_direction(&mut self, direction: Direction, sprite: &mut dyn SpriteSurface) -> bool {
        if direction == self.current {
            return false;
        }
        tracing::trace!(from = %self.current, to = %direction, "direction change");
        self.current = direction;
        sprite.set_sprite(&direction.sprite_path());
        true
    }
}

/// Substring from the start of `text` to the caret, on a char boundary.
///
/// Caret indices past the end clamp to the full text.
fn caret_prefix(text: &str, caret: usize) -> &str {
    let end = text
        .char_indices()
        .nth(caret)
        .map_or(text.len(), |(idx, _)| idx);
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Test doubles
    // =========================================================================

    /// Probe returning a fixed offset, recording sync calls.
    struct FixedProbe {
        offset: Option<f32>,
        synced: Vec<SurfaceStyle>,
        measured: Vec<String>,
    }

    impl FixedProbe {
        fn new(offset: Option<f32>) -> Self {
            Self {
                offset,
                synced: Vec::new(),
                measured: Vec::new(),
            }
        }
    }

    impl CaretProbe for FixedProbe {
        fn sync(&mut self, style: &SurfaceStyle) {
            self.synced.push(*style);
        }

        fn measure_prefix(&mut self, prefix: &str) -> Option<f32> {
            self.measured.push(prefix.to_string());
            self.offset
        }
    }

    /// Sprite recording every resource write.
    #[derive(Default)]
    struct RecordingSprite {
        writes: Vec<String>,
    }

    impl SpriteSurface for RecordingSprite {
        fn set_sprite(&mut self, path: &str) {
            self.writes.push(path.to_string());
        }
    }

    /// Minimal text surface backed by plain fields.
    struct FakeText {
        text: String,
        caret: usize,
        width: f32,
    }

    impl FakeText {
        fn new(text: &str, caret: usize, width: f32) -> Self {
            Self {
                text: text.to_string(),
                caret,
                width,
            }
        }
    }

    impl TextSurface for FakeText {
        fn text(&self) -> &str {
            &self.text
        }

        fn caret(&self) -> usize {
            self.caret
        }

        fn inner_width(&self) -> f32 {
            self.width
        }

        fn style(&self) -> SurfaceStyle {
            SurfaceStyle {
                width: self.width,
                ..SurfaceStyle::default()
            }
        }
    }

    // =========================================================================
    // caret_prefix tests
    // =========================================================================

    #[test]
    fn test_caret_prefix_basic() {
        assert_eq!(caret_prefix("hello", 0), "");
        assert_eq!(caret_prefix("hello", 3), "hel");
        assert_eq!(caret_prefix("hello", 5), "hello");
    }

    #[test]
    fn test_caret_prefix_clamps_past_end() {
        assert_eq!(caret_prefix("hi", 10), "hi");
    }

    #[test]
    fn test_caret_prefix_multibyte() {
        assert_eq!(caret_prefix("héllo", 2), "hé");
        assert_eq!(caret_prefix("日本語", 1), "日");
    }

    // =========================================================================
    // Sampling tests
    // =========================================================================

    #[test]
    fn test_sample_updates_direction_and_sprite() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(10.0)));
        let mut sprite = RecordingSprite::default();
        let input = FakeText::new("hello", 5, 200.0);

        let changed = tracker.sample_and_update(0, &input, &mut sprite);
        assert!(changed);
        assert_eq!(tracker.direction(), Direction::LookLeft);
        assert_eq!(sprite.writes, ["assets/character/look-left.png"]);
    }

    #[test]
    fn test_empty_text_forces_idle() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(190.0)));
        let mut sprite = RecordingSprite::default();

        // Drive away from idle first.
        let filled = FakeText::new("hello", 5, 200.0);
        tracker.sample_and_update(0, &filled, &mut sprite);
        assert_ne!(tracker.direction(), Direction::Idle);

        let empty = FakeText::new("", 0, 200.0);
        tracker.sample_and_update(100, &empty, &mut sprite);
        assert_eq!(tracker.direction(), Direction::Idle);
        assert_eq!(
            sprite.writes.last().map(String::as_str),
            Some("assets/character/idle.png")
        );
    }

    #[test]
    fn test_empty_text_skips_measurement() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(0.0)));
        let mut sprite = RecordingSprite::default();
        let empty = FakeText::new("", 0, 200.0);

        tracker.sample_and_update(0, &empty, &mut sprite);
        assert!(tracker.probe.measured.is_empty());
    }

    #[test]
    fn test_throttle_drops_second_sample() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(10.0)));
        let mut sprite = RecordingSprite::default();
        let left = FakeText::new("hello", 1, 200.0);

        assert!(tracker.sample_and_update(0, &left, &mut sprite));

        // Inside the 50 ms window: the sample is dropped, even though the
        // caret moved far right.
        tracker.probe.offset = Some(190.0);
        assert!(!tracker.sample_and_update(49, &left, &mut sprite));
        assert_eq!(tracker.direction(), Direction::LookLeft);

        // At the window boundary the sample goes through.
        assert!(tracker.sample_and_update(50, &left, &mut sprite));
        assert_eq!(tracker.direction(), Direction::LookRight);
        assert_eq!(sprite.writes.len(), 2);
    }

    #[test]
    fn test_throttle_is_rate_limit_not_debounce() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(10.0)));
        let mut sprite = RecordingSprite::default();
        let input = FakeText::new("hello", 1, 200.0);

        tracker.sample_and_update(0, &input, &mut sprite);
        tracker.sample_and_update(10, &input, &mut sprite);
        tracker.sample_and_update(20, &input, &mut sprite);

        // Dropped samples were never measured, not queued for later.
        assert_eq!(tracker.probe.measured.len(), 1);
    }

    #[test]
    fn test_redundant_direction_suppressed() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(100.0)));
        let mut sprite = RecordingSprite::default();
        let input = FakeText::new("hello", 5, 200.0);

        assert!(tracker.sample_and_update(0, &input, &mut sprite));
        assert!(!tracker.sample_and_update(100, &input, &mut sprite));
        assert!(!tracker.sample_and_update(200, &input, &mut sprite));
        assert_eq!(sprite.writes.len(), 1);
    }

    #[test]
    fn test_set_direction_idempotent() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(None));
        let mut sprite = RecordingSprite::default();

        assert!(tracker.set_direction(Direction::LookRight, &mut sprite));
        assert!(!tracker.set_direction(Direction::LookRight, &mut sprite));
        assert!(!tracker.set_direction(Direction::LookRight, &mut sprite));
        assert_eq!(sprite.writes, ["assets/character/look-right.png"]);
    }

    #[test]
    fn test_unmeasurable_geometry_degrades_to_centered() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(None));
        let mut sprite = RecordingSprite::default();
        let input = FakeText::new("hello", 5, 200.0);

        tracker.sample_and_update(0, &input, &mut sprite);
        assert_eq!(tracker.direction(), Direction::LookDown);
    }

    #[test]
    fn test_zero_width_degrades_to_centered() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(42.0)));
        let mut sprite = RecordingSprite::default();
        let input = FakeText::new("hello", 5, 0.0);

        tracker.sample_and_update(0, &input, &mut sprite);
        assert_eq!(tracker.direction(), Direction::LookDown);
    }

    #[test]
    fn test_measures_caret_prefix_not_full_text() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(10.0)));
        let mut sprite = RecordingSprite::default();
        let input = FakeText::new("hello world", 5, 200.0);

        tracker.sample_and_update(0, &input, &mut sprite);
        assert_eq!(tracker.probe.measured, ["hello"]);
    }

    #[test]
    fn test_sync_probe_forwards_style() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(0.0)));
        let style = SurfaceStyle {
            width: 640.0,
            ..SurfaceStyle::default()
        };
        tracker.sync_probe(&style);
        assert_eq!(tracker.probe.synced, [style]);
    }

    #[test]
    fn test_custom_throttle_window() {
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(10.0))).with_throttle_ms(200);
        let mut sprite = RecordingSprite::default();
        let input = FakeText::new("hello", 1, 200.0);

        tracker.sample_and_update(0, &input, &mut sprite);
        assert!(!tracker.sample_and_update(150, &input, &mut sprite));
        assert_eq!(tracker.probe.measured.len(), 1);
    }

    #[test]
    fn test_sample_pure_in_inputs_modulo_throttle() {
        // Same (text, caret, width) far enough apart always classifies
        // the same way; the sprite write count stays at one.
        let mut tracker = DirectionTracker::new(FixedProbe::new(Some(150.0)));
        let mut sprite = RecordingSprite::default();
        let input = FakeText::new("steady", 6, 200.0);

        for step in 0..10u64 {
            tracker.sample_and_update(step * 100, &input, &mut sprite);
            assert_eq!(tracker.direction(), Direction::LookRight);
        }
        assert_eq!(sprite.writes.len(), 1);
    }
}
