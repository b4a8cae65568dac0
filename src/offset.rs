// SPDX-License-Identifier: MPL-2.0
//! Pure offset calculator.
//!
//! Maps a message kind, anchor edge, and the measured host/content
//! rectangles to a screen-space translation. Vertical offsets are relative to
//! the overlay content centered inside the host: a zero offset leaves the
//! content at the host's center. Screen origin is top-left, y grows
//! downward.
//!
//! Edge toasts decouple the two axes: the vertical offset is a fixed inset
//! derived from the host and content heights, while the horizontal offset is
//! a full-width slide computed from the viewport (see
//! [`edge_hidden_offset`] and [`edge_resting_offset`]) and driven by the
//! lifecycle controller.

use crate::config::{MessageKind, Position, Side};
use crate::viewport::Viewport;
use iced::Rectangle;

/// Off-screen placement used before any real measurement exists.
pub const BOOTSTRAP_OFFSET: f32 = 1000.0;

/// Horizontal inset of a resting edge toast from the screen edge.
pub const EDGE_RESTING_INSET: f32 = 10.0;

/// Vertical inset of a bottom-anchored edge toast.
pub const EDGE_BOTTOM_INSET: f32 = 30.0;

/// Vertical inset of a top-anchored edge toast.
pub const EDGE_TOP_INSET: f32 = 60.0;

fn mid_y(rect: Rectangle) -> f32 {
    rect.y + rect.height / 2.0
}

fn is_unmeasured(rect: Rectangle) -> bool {
    rect.width <= 0.0 || rect.height <= 0.0
}

/// The vertical offset of a displayed overlay.
#[must_use]
pub fn displayed_offset(
    kind: MessageKind,
    position: Position,
    host: Rectangle,
    content: Rectangle,
) -> f32 {
    match kind {
        MessageKind::Alert => host.height / 2.0 - mid_y(host),
        MessageKind::Toast => match position {
            Position::Bottom => host.height - mid_y(host) - content.height / 2.0,
            Position::Top => -mid_y(host) + content.height / 2.0,
        },
        MessageKind::Floater { vertical_padding } => match position {
            Position::Bottom => {
                host.height - mid_y(host) - content.height / 2.0 - vertical_padding
            }
            Position::Top => -mid_y(host) + content.height / 2.0 + vertical_padding,
        },
        MessageKind::EdgeToast { .. } => {
            let centered = host.height / 2.0 - content.height / 2.0;
            match position {
                Position::Bottom => centered - EDGE_BOTTOM_INSET,
                Position::Top => -(centered - EDGE_TOP_INSET),
            }
        }
    }
}

/// The vertical offset parking an overlay just beyond the host edge.
///
/// Before the host rect is measured this is a large constant guaranteeing
/// fully off-screen placement; afterwards the content sits past the host
/// edge plus the viewport's chrome clearance margin.
#[must_use]
pub fn hidden_offset(
    position: Position,
    host: Rectangle,
    content: Rectangle,
    viewport: &Viewport,
) -> f32 {
    if is_unmeasured(host) {
        return match position {
            Position::Top => -BOOTSTRAP_OFFSET,
            Position::Bottom => BOOTSTRAP_OFFSET,
        };
    }

    let clearance = viewport.chrome_clearance();
    match position {
        Position::Top => -mid_y(host) - content.height / 2.0 - clearance,
        Position::Bottom => {
            let screen_height = if viewport.height() > 0.0 {
                viewport.height()
            } else {
                host.height
            };
            screen_height - mid_y(host) + content.height / 2.0 + clearance
        }
    }
}

/// The lateral offset parking an edge toast fully off screen.
#[must_use]
pub fn edge_hidden_offset(side: Side, viewport_width: f32) -> f32 {
    let distance = if viewport_width > 0.0 {
        viewport_width
    } else {
        BOOTSTRAP_OFFSET
    };
    match side {
        Side::Left => -distance,
        Side::Right => distance,
    }
}

/// The lateral offset of a resting edge toast, inset
/// [`EDGE_RESTING_INSET`] units from the screen's horizontal edge.
#[must_use]
pub fn edge_resting_offset(side: Side, viewport_width: f32, content_width: f32) -> f32 {
    let inset = viewport_width / 2.0 - content_width / 2.0 - EDGE_RESTING_INSET;
    match side {
        Side::Left => -inset,
        Side::Right => inset,
    }
}
