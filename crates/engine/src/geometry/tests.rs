use gramm_primitives::{Point, Rect, Viewport};

use super::*;

const DESKTOP: Viewport = Viewport::new(1280.0, 800.0);

#[test]
fn badge_sits_in_top_right_corner() {
	let field = Rect::new(100.0, 200.0, 300.0, 80.0);
	assert_eq!(badge_position(field), Some(Point::new(382.0, 206.0)));
}

#[test]
fn collapsed_field_places_nothing() {
	assert_eq!(badge_position(Rect::default()), None);
	assert_eq!(panel_position(Rect::new(50.0, 50.0, 0.0, 0.0), DESKTOP), None);
}

#[test]
fn panel_prefers_below_field() {
	let field = Rect::new(100.0, 200.0, 300.0, 80.0);
	assert_eq!(panel_position(field, DESKTOP), Some(Point::new(100.0, 288.0)));
}

#[test]
fn panel_flips_above_near_viewport_bottom() {
	let field = Rect::new(100.0, 600.0, 300.0, 80.0);
	// 680 + 8 + 250 > 800
	assert_eq!(panel_position(field, DESKTOP), Some(Point::new(100.0, 340.0)));
}

#[test]
fn flipped_panel_never_goes_above_margin() {
	let field = Rect::new(100.0, 100.0, 300.0, 500.0);
	let viewport = Viewport::new(1280.0, 700.0);
	assert_eq!(panel_position(field, viewport), Some(Point::new(100.0, VIEWPORT_MARGIN)));
}

#[test]
fn panel_clamps_to_right_edge() {
	let field = Rect::new(1100.0, 100.0, 150.0, 30.0);
	assert_eq!(panel_position(field, DESKTOP), Some(Point::new(890.0, 138.0)));
}

#[test]
fn panel_keeps_left_margin_on_narrow_viewports() {
	let field = Rect::new(-40.0, 100.0, 300.0, 30.0);
	assert_eq!(panel_position(field, DESKTOP).map(|p| p.x), Some(VIEWPORT_MARGIN));

	let phone = Viewport::new(320.0, 640.0);
	let field = Rect::new(20.0, 100.0, 280.0, 30.0);
	assert_eq!(panel_position(field, phone).map(|p| p.x), Some(VIEWPORT_MARGIN));
}
