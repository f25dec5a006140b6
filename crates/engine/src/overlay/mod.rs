//! Floating badge and suggestion panel.
//!
//! [`OverlayManager`] owns the single anchor binding: at most one badge and at
//! most one panel exist at a time, both bound to the same field. Every render
//! tears the previous overlay down before mounting the new one, so stale
//! overlays never accumulate on the host surface.

mod badge;
mod panel;

pub use badge::{BadgeStatus, BadgeView};
pub use panel::{MAX_SUGGESTIONS, PanelAction, PanelSession, PanelView, SuggestionPanel};

use gramm_primitives::FieldId;
use tracing::trace;

use crate::geometry::{badge_position, panel_position};
use crate::host::Host;

#[derive(Debug, Default)]
pub struct OverlayManager {
	anchor: Option<(FieldId, BadgeStatus)>,
	panel: SuggestionPanel,
}

impl OverlayManager {
	pub fn new() -> Self {
		Self::default()
	}

	/// Anchors the badge to `field`. Binding another field drops the panel.
	pub fn bind(&mut self, field: FieldId, status: BadgeStatus) {
		if self.panel.field().is_some_and(|bound| bound != field) {
			self.panel.close();
		}
		self.anchor = Some((field, status));
	}

	/// Drops the anchor binding and closes the panel.
	pub fn unbind(&mut self) -> Option<FieldId> {
		self.panel.close();
		self.anchor.take().map(|(field, _)| field)
	}

	pub fn anchor(&self) -> Option<FieldId> {
		self.anchor.map(|(field, _)| field)
	}

	pub fn status(&self) -> Option<BadgeStatus> {
		self.anchor.map(|(_, status)| status)
	}

	/// Updates the badge status if `field` is the anchor.
	pub fn set_status(&mut self, field: FieldId, status: BadgeStatus) -> bool {
		match &mut self.anchor {
			Some((bound, current)) if *bound == field => {
				*current = status;
				true
			}
			_ => false,
		}
	}

	pub fn panel(&self) -> &SuggestionPanel {
		&self.panel
	}

	pub fn panel_mut(&mut self) -> &mut SuggestionPanel {
		&mut self.panel
	}

	/// Remounts the badge for the anchor field.
	///
	/// Returns false when nothing was mounted: no anchor, a detached field, or
	/// a collapsed bounding rect.
	pub fn render_badge<H: Host + ?Sized>(&self, host: &mut H) -> bool {
		host.remove_badge();
		let Some((field, status)) = self.anchor else {
			return false;
		};
		if !host.is_attached(field) {
			return false;
		}
		let Some(position) = badge_position(host.bounding_rect(field)) else {
			trace!(%field, "engine.overlay.badge_suppressed");
			return false;
		};
		host.show_badge(&BadgeView::new(field, status, position));
		true
	}

	/// Remounts the panel for its bound field.
	///
	/// An unreadable field closes the panel.
	pub fn render_panel<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
		host.remove_panel();
		let Some(field) = self.panel.field() else {
			return false;
		};
		let text = match host.text(field) {
			Ok(text) => text,
			Err(error) => {
				trace!(%field, %error, "engine.overlay.panel_unreadable");
				self.panel.close();
				return false;
			}
		};
		let Some(position) = panel_position(host.bounding_rect(field), host.viewport()) else {
			trace!(%field, "engine.overlay.panel_suppressed");
			return false;
		};
		match self.panel.view(&text, position) {
			Some(view) => {
				host.show_panel(&view);
				true
			}
			None => false,
		}
	}

	pub fn render<H: Host + ?Sized>(&mut self, host: &mut H) {
		self.render_badge(host);
		self.render_panel(host);
	}

	/// Closes the panel and removes it from the surface.
	pub fn close_panel<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
		host.remove_panel();
		self.panel.close()
	}

	/// Unbinds and removes both overlays from the surface.
	pub fn teardown<H: Host + ?Sized>(&mut self, host: &mut H) -> Option<FieldId> {
		host.remove_panel();
		host.remove_badge();
		self.unbind()
	}
}
