// SPDX-License-Identifier: MPL-2.0
//! Animation curves and the slide tween that moves overlays on and off screen.
//!
//! Animations here are evaluated against a caller-supplied [`Instant`] rather
//! than an internal clock, so the lifecycle tests can drive them
//! deterministically.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Easing curve applied to slide progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Accelerates from rest.
    EaseIn,
    /// Decelerates into the target.
    #[default]
    EaseOut,
    /// Accelerates, then decelerates.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    ///
    /// Out-of-range input is clamped, so a degenerate elapsed time never
    /// produces an overshoot.
    #[must_use]
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    (4.0 - 2.0 * t).mul_add(t, -1.0)
                }
            }
        }
    }
}

/// An easing curve paired with a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// Curve shaping the slide progress.
    pub easing: Easing,
    /// Total animation length.
    pub duration: Duration,
}

impl Animation {
    /// Creates an animation with the given curve and duration.
    #[must_use]
    pub fn new(easing: Easing, duration: Duration) -> Self {
        Self { easing, duration }
    }

    /// Linear animation.
    #[must_use]
    pub fn linear(duration: Duration) -> Self {
        Self::new(Easing::Linear, duration)
    }

    /// Ease-in animation.
    #[must_use]
    pub fn ease_in(duration: Duration) -> Self {
        Self::new(Easing::EaseIn, duration)
    }

    /// Ease-out animation.
    #[must_use]
    pub fn ease_out(duration: Duration) -> Self {
        Self::new(Easing::EaseOut, duration)
    }

    /// Ease-in-out animation.
    #[must_use]
    pub fn ease_in_out(duration: Duration) -> Self {
        Self::new(Easing::EaseInOut, duration)
    }
}

impl Default for Animation {
    /// Ease-out over 300 ms, the default slide used for message overlays.
    fn default() -> Self {
        Self::ease_out(Duration::from_millis(300))
    }
}

/// A one-dimensional tween between two offsets.
///
/// The slide is a pure value: `value(now)` interpolates without mutating
/// anything, and `is_done(now)` reports completion. Retargeting restarts the
/// curve from the current position so an in-flight slide can chase a moving
/// target (e.g. a rect measured mid-animation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    from: f32,
    to: f32,
    started: Instant,
    animation: Animation,
}

impl Slide {
    /// Starts a slide from `from` to `to` at `started`.
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant, animation: Animation) -> Self {
        Self {
            from,
            to,
            started,
            animation,
        }
    }

    /// The offset at `now`, clamped to the target once the duration elapses.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        if self.animation.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.animation.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.animation.duration.as_secs_f32();
        let eased = self.animation.easing.apply(progress);
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether the slide has reached its target at `now`.
    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        self.animation.duration.is_zero()
            || now.saturating_duration_since(self.started) >= self.animation.duration
    }

    /// The slide's destination offset.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Redirects the slide toward a new target, restarting the curve from the
    /// current position.
    pub fn retarget(&mut self, now: Instant, to: f32) {
        self.from = self.value(now);
        self.started = now;
        self.to = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!((easing.apply(0.0) - 0.0).abs() < f32::EPSILON);
            assert!((easing.apply(1.0) - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn easing_clamps_out_of_range_progress() {
        assert!((Easing::EaseOut.apply(-1.0) - 0.0).abs() < f32::EPSILON);
        assert!((Easing::EaseOut.apply(2.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn slide_starts_at_from_and_ends_at_to() {
        let start = Instant::now();
        let slide = Slide::new(
            1000.0,
            350.0,
            start,
            Animation::linear(Duration::from_millis(300)),
        );

        assert!((slide.value(start) - 1000.0).abs() < f32::EPSILON);
        assert!((slide.value(start + Duration::from_millis(300)) - 350.0).abs() < f32::EPSILON);
        assert!(slide.is_done(start + Duration::from_millis(300)));
        assert!(!slide.is_done(start + Duration::from_millis(150)));
    }

    #[test]
    fn linear_slide_is_halfway_at_half_duration() {
        let start = Instant::now();
        let slide = Slide::new(
            0.0,
            100.0,
            start,
            Animation::linear(Duration::from_millis(200)),
        );

        let mid = slide.value(start + Duration::from_millis(100));
        assert!((mid - 50.0).abs() < 0.01);
    }

    #[test]
    fn zero_duration_slide_is_immediately_done() {
        let start = Instant::now();
        let slide = Slide::new(0.0, 100.0, start, Animation::ease_out(Duration::ZERO));

        assert!(slide.is_done(start));
        assert!((slide.value(start) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn retarget_restarts_from_current_position() {
        let start = Instant::now();
        let mut slide = Slide::new(
            0.0,
            100.0,
            start,
            Animation::linear(Duration::from_millis(200)),
        );

        let mid = start + Duration::from_millis(100);
        slide.retarget(mid, -50.0);

        assert!((slide.value(mid) - 50.0).abs() < 0.01);
        assert!((slide.target() - -50.0).abs() < f32::EPSILON);
        assert!(slide.is_done(mid + Duration::from_millis(200)));
        assert!((slide.value(mid + Duration::from_millis(200)) - -50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn value_before_start_stays_at_from() {
        let start = Instant::now() + Duration::from_secs(1);
        let slide = Slide::new(
            5.0,
            10.0,
            start,
            Animation::linear(Duration::from_millis(100)),
        );

        assert!((slide.value(Instant::now()) - 5.0).abs() < f32::EPSILON);
    }
}
