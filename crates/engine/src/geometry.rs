//! Anchor placement for the badge and suggestion panel.
//!
//! Positions are computed from the field's bounding rectangle in viewport
//! coordinates each time an overlay is rendered. A collapsed rectangle means
//! the field is hidden or detached; nothing is placed for it.

use gramm_primitives::{Point, Rect, Viewport};

/// Badge inset from the field's top edge.
pub const BADGE_TOP_INSET: f64 = 6.0;
/// Badge inset from the field's right edge.
pub const BADGE_RIGHT_INSET: f64 = 18.0;

/// Nominal panel size used for overflow decisions.
pub const PANEL_WIDTH: f64 = 380.0;
pub const PANEL_HEIGHT: f64 = 250.0;
/// Gap between the field and a panel placed below it.
pub const PANEL_GAP: f64 = 8.0;
/// Distance above the field's top edge when the panel flips.
pub const PANEL_FLIP_OFFSET: f64 = 260.0;
/// Right-edge clearance when clamping horizontally.
pub const PANEL_RIGHT_CLEARANCE: f64 = 390.0;
/// Minimum distance from the viewport's left and top edges.
pub const VIEWPORT_MARGIN: f64 = 5.0;

/// Top-right corner anchor for the badge.
pub fn badge_position(field: Rect) -> Option<Point> {
	if field.is_collapsed() {
		return None;
	}
	Some(Point::new(field.right() - BADGE_RIGHT_INSET, field.top + BADGE_TOP_INSET))
}

/// Top-left corner for the panel.
///
/// Prefers just below the field, left-aligned with it. Flips above when the
/// panel would run past the viewport bottom, and clamps horizontally so it
/// stays on screen with at least [`VIEWPORT_MARGIN`] on the left.
pub fn panel_position(field: Rect, viewport: Viewport) -> Option<Point> {
	if field.is_collapsed() {
		return None;
	}

	let mut top = field.bottom() + PANEL_GAP;
	if top + PANEL_HEIGHT > viewport.height {
		top = field.top - PANEL_FLIP_OFFSET;
	}

	let mut left = field.left;
	if left + PANEL_WIDTH > viewport.width {
		left = viewport.width - PANEL_RIGHT_CLEARANCE;
	}
	if left < VIEWPORT_MARGIN {
		left = VIEWPORT_MARGIN;
	}

	Some(Point::new(left, top.max(VIEWPORT_MARGIN)))
}

#[cfg(test)]
mod tests;
