// SPDX-License-Identifier: MPL-2.0
//! Viewport snapshot supplied by the host integration layer.
//!
//! Edge toasts slide across the full screen width and hidden offsets clear
//! the screen edge, so the overlay needs to know how big the screen (or
//! hosting window) is. Rather than querying the platform directly, the host
//! forwards the current size once per resize and the overlay keeps a
//! snapshot.

use iced::Size;

/// Margin added beyond the host edge when parking an overlay off screen.
pub const DEFAULT_CHROME_CLEARANCE: f32 = 5.0;

/// Clearance for hosts embedded in desktop chrome (title bars, docks) that
/// must be cleared for the overlay to be fully out of sight.
pub const EMBEDDED_DESKTOP_CLEARANCE: f32 = 300.0;

/// The host window's size plus the off-screen clearance margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    size: Size,
    chrome_clearance: f32,
}

impl Viewport {
    /// A viewport of the given size with the default clearance.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            chrome_clearance: DEFAULT_CHROME_CLEARANCE,
        }
    }

    /// A viewport for hosts embedded in desktop chrome.
    #[must_use]
    pub fn embedded_desktop(size: Size) -> Self {
        Self::new(size).with_chrome_clearance(EMBEDDED_DESKTOP_CLEARANCE)
    }

    /// Overrides the off-screen clearance margin. Negative values clamp to
    /// zero.
    #[must_use]
    pub fn with_chrome_clearance(mut self, clearance: f32) -> Self {
        self.chrome_clearance = clearance.max(0.0);
        self
    }

    /// Replaces the size, keeping the clearance.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Current size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Current height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Off-screen clearance margin.
    #[must_use]
    pub fn chrome_clearance(&self) -> f32 {
        self.chrome_clearance
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_viewport_is_empty_with_default_clearance() {
        let viewport = Viewport::default();
        assert!((viewport.width() - 0.0).abs() < f32::EPSILON);
        assert!((viewport.chrome_clearance() - DEFAULT_CHROME_CLEARANCE).abs() < f32::EPSILON);
    }

    #[test]
    fn embedded_desktop_uses_large_clearance() {
        let viewport = Viewport::embedded_desktop(Size::new(1920.0, 1080.0));
        assert!((viewport.chrome_clearance() - EMBEDDED_DESKTOP_CLEARANCE).abs() < f32::EPSILON);
    }

    #[test]
    fn negative_clearance_clamps_to_zero() {
        let viewport = Viewport::new(Size::new(800.0, 600.0)).with_chrome_clearance(-10.0);
        assert!((viewport.chrome_clearance() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn resize_keeps_clearance() {
        let mut viewport = Viewport::embedded_desktop(Size::new(800.0, 600.0));
        viewport.resize(Size::new(1024.0, 768.0));
        assert!((viewport.height() - 768.0).abs() < f32::EPSILON);
        assert!((viewport.chrome_clearance() - EMBEDDED_DESKTOP_CLEARANCE).abs() < f32::EPSILON);
    }
}
