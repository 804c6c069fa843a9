//! Easing functions and eased values for timed transitions.
//!
//! Everything animated in the demo — the reveal scroll, the thought
//! bubble's float-up, the character's slide-down — is a fixed-duration
//! eased interpolation. Time advances through explicit `update` calls, so
//! tests drive animations with a simulated clock.

// =============================================================================
// Easing Functions
// =============================================================================

/// Easing functions for transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Cubic ease out (fast start, slow end)
    CubicOut,
    /// Cubic ease in and out (slow start and end)
    CubicInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

// =============================================================================
// EasedValue
// =============================================================================

/// A value animating from `from` to `to` over a fixed duration.
#[derive(Debug, Clone)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}
