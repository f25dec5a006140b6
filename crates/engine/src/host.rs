//! Seams to the host page.

use gramm_primitives::{CharIdx, CharLen, FieldId, FieldNode, Rect, Viewport};
use ropey::Rope;
use thiserror::Error;

use crate::overlay::{BadgeView, PanelView};

/// Failures reported by a host while touching a field.
///
/// The engine treats every variant as "skip this operation".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	/// The field is no longer attached to the page.
	#[error("field is detached")]
	Detached,
	/// A replacement span does not fit the field's current content.
	#[error("span {offset}+{length} exceeds field length {len}")]
	OutOfRange {
		offset: CharIdx,
		length: CharLen,
		len: CharLen,
	},
	/// The host messaging context was torn down.
	#[error("host context invalidated")]
	ContextInvalidated,
}

/// Read and edit access to host text fields.
pub trait FieldHost {
	/// Classifier input for a field, or `None` if it is gone.
	fn node(&self, field: FieldId) -> Option<FieldNode>;

	/// Current plain-text content.
	fn text(&self, field: FieldId) -> Result<String, HostError>;

	/// Replaces `length` chars at `offset` and returns the field's new content.
	///
	/// See [`replace_chars`] for the splice itself.
	fn replace_range(
		&mut self,
		field: FieldId,
		offset: CharIdx,
		length: CharLen,
		replacement: &str,
	) -> Result<String, HostError>;

	/// Bounding rectangle in viewport coordinates. Collapsed (zero width and
	/// height) for hidden or detached elements.
	fn bounding_rect(&self, field: FieldId) -> Rect;

	fn viewport(&self) -> Viewport;

	/// The field that currently has focus, if it is one the host tracks.
	fn active_field(&self) -> Option<FieldId>;

	fn is_attached(&self, field: FieldId) -> bool;

	/// Installs or removes the host's DOM listeners.
	fn set_listeners(&mut self, installed: bool);
}

/// Where injected nodes go.
///
/// There is at most one badge and one panel; `show_*` replaces whatever is
/// mounted.
pub trait OverlaySurface {
	fn show_badge(&mut self, view: &BadgeView);
	fn remove_badge(&mut self);
	fn show_panel(&mut self, view: &PanelView);
	fn remove_panel(&mut self);
}

/// Everything the engine needs from a host.
pub trait Host: FieldHost + OverlaySurface {}

impl<T: FieldHost + OverlaySurface> Host for T {}

/// Splices `replacement` over `length` chars at `offset` in `text`.
pub fn replace_chars(text: &str, offset: CharIdx, length: CharLen, replacement: &str) -> Result<String, HostError> {
	let mut rope = Rope::from_str(text);
	let len = rope.len_chars();
	let end = offset.checked_add(length).filter(|&end| end <= len).ok_or(HostError::OutOfRange {
		offset,
		length,
		len,
	})?;
	rope.remove(offset..end);
	rope.insert(offset, replacement);
	Ok(rope.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn replace_chars_splices_by_char_index() {
		assert_eq!(replace_chars("Teh cat sits.", 0, 3, "The").unwrap(), "The cat sits.");
		assert_eq!(replace_chars("café olé", 5, 3, "hola").unwrap(), "café hola");
		assert_eq!(replace_chars("abc", 3, 0, "d").unwrap(), "abcd");
	}

	#[test]
	fn replace_chars_rejects_overflow() {
		assert_eq!(
			replace_chars("abc", 2, 5, "x"),
			Err(HostError::OutOfRange {
				offset: 2,
				length: 5,
				len: 3
			})
		);
	}
}
