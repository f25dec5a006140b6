use gramm_primitives::{FieldId, Point};

/// What the badge is currently telling the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStatus {
	/// A check for the field is in flight.
	Loading,
	/// The last check found nothing, was skipped, or failed.
	Clean,
	/// The field has this many active matches. Always non-zero.
	Flagged(usize),
}

impl BadgeStatus {
	/// Status for a match count.
	pub fn for_count(count: usize) -> Self {
		if count == 0 { Self::Clean } else { Self::Flagged(count) }
	}

	/// Hover text. The loading badge has none.
	pub fn title(self) -> Option<String> {
		match self {
			Self::Loading => None,
			Self::Clean => Some("No issues".to_string()),
			Self::Flagged(1) => Some("1 issue".to_string()),
			Self::Flagged(n) => Some(format!("{n} issues")),
		}
	}

	pub fn is_clickable(self) -> bool {
		matches!(self, Self::Flagged(_))
	}
}

/// Data-only badge render target consumed by the host surface.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeView {
	pub field: FieldId,
	pub status: BadgeStatus,
	/// Top-left corner in viewport coordinates.
	pub position: Point,
	pub title: Option<String>,
}

impl BadgeView {
	pub fn new(field: FieldId, status: BadgeStatus, position: Point) -> Self {
		Self {
			field,
			status,
			position,
			title: status.title(),
		}
	}
}
