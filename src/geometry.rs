// SPDX-License-Identifier: MPL-2.0
//! Integral-rectangle change detection.
//!
//! Overlay placement depends on the measured bounds of the host container and
//! the overlay content. Measurement happens during the widget pass, and every
//! stored rect change triggers a re-render, which triggers another
//! measurement. [`RectTracker`] breaks that cycle by ignoring updates whose
//! pixel-rounded rectangle matches the stored one, so sub-pixel layout jitter
//! never feeds back into placement.

use iced::{Point, Rectangle, Size};

/// A bounding rectangle rounded outward to pixel boundaries.
///
/// Two rects that cover the same pixels compare equal, which is the unit of
/// change detection for measured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegralRect {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl IntegralRect {
    /// Rounds `rect` outward to the smallest pixel-aligned rectangle
    /// containing it.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rectangle(rect: Rectangle) -> Self {
        let left = rect.x.floor();
        let top = rect.y.floor();
        let right = (rect.x + rect.width.max(0.0)).ceil();
        let bottom = (rect.y + rect.height.max(0.0)).ceil();

        Self {
            x: left as i32,
            y: top as i32,
            width: (right - left).max(0.0) as u32,
            height: (bottom - top).max(0.0) as u32,
        }
    }
}

/// Tracks the last measured bounds of one view, suppressing writes whose
/// integral rectangle is unchanged.
#[derive(Debug, Clone, Copy)]
pub struct RectTracker {
    rect: Rectangle,
    integral: Option<IntegralRect>,
}

impl RectTracker {
    /// An empty tracker with no measurement yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rect: Rectangle::new(Point::ORIGIN, Size::ZERO),
            integral: None,
        }
    }

    /// Submits a freshly measured rectangle.
    ///
    /// Returns `true` and stores the rect only when its integral value
    /// differs from the stored one; submitting the same integral rect twice
    /// in a row is a no-op.
    pub fn submit(&mut self, rect: Rectangle) -> bool {
        let integral = IntegralRect::from_rectangle(rect);
        if self.integral == Some(integral) {
            return false;
        }

        self.rect = rect;
        self.integral = Some(integral);
        true
    }

    /// The last stored rectangle (zero-sized before the first measurement).
    #[must_use]
    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    /// Whether any measurement has been stored yet.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.integral.is_some()
    }
}

impl Default for RectTracker {
    fn default() -> Self {
        Self::new()
    }
}
