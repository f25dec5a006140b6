//! Suggestion panel state machine.
//!
//! ```text
//! Closed --open(non-empty)--> Viewing(field, snapshot, 0)
//! Viewing(i) --next/prev--> Viewing(i +/- 1)        bounds-checked
//! Viewing(i) --replace_matches(m)--> Viewing(min(i, len-1)) | Closed if empty
//! Viewing --close--> Closed
//! ```
//!
//! The panel owns a snapshot of the field's matches. Accepting a suggestion or
//! dismissing a rule updates the match store first, then hands the new list to
//! [`SuggestionPanel::replace_matches`].

use gramm_primitives::{Category, FieldId, Match, Point};

/// Most replacement candidates shown for one match.
pub const MAX_SUGGESTIONS: usize = 5;

/// User actions inside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
	Close,
	Next,
	Prev,
	/// Apply the candidate at this index of the shown suggestions.
	Accept { suggestion: usize },
	/// Ignore the current match's rule for the rest of the session.
	DismissRule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSession {
	pub field: FieldId,
	pub matches: Vec<Match>,
	pub index: usize,
}

impl PanelSession {
	pub fn current(&self) -> &Match {
		&self.matches[self.index]
	}
}

#[derive(Debug, Default)]
pub struct SuggestionPanel {
	session: Option<PanelSession>,
}

impl SuggestionPanel {
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens on the first match. An empty list leaves the panel closed.
	///
	/// Any session for another field is replaced.
	pub fn open(&mut self, field: FieldId, matches: Vec<Match>) -> bool {
		if matches.is_empty() {
			self.session = None;
			return false;
		}
		self.session = Some(PanelSession {
			field,
			matches,
			index: 0,
		});
		true
	}

	/// Returns true if the panel was open.
	pub fn close(&mut self) -> bool {
		self.session.take().is_some()
	}

	pub fn next(&mut self) -> bool {
		match &mut self.session {
			Some(session) if session.index + 1 < session.matches.len() => {
				session.index += 1;
				true
			}
			_ => false,
		}
	}

	pub fn prev(&mut self) -> bool {
		match &mut self.session {
			Some(session) if session.index > 0 => {
				session.index -= 1;
				true
			}
			_ => false,
		}
	}

	/// Swaps in an updated match list, clamping the index. Closes on empty.
	///
	/// Returns true if the panel is still open.
	pub fn replace_matches(&mut self, matches: Vec<Match>) -> bool {
		let Some(session) = &mut self.session else {
			return false;
		};
		if matches.is_empty() {
			self.session = None;
			return false;
		}
		session.index = session.index.min(matches.len() - 1);
		session.matches = matches;
		true
	}

	pub fn is_open(&self) -> bool {
		self.session.is_some()
	}

	pub fn session(&self) -> Option<&PanelSession> {
		self.session.as_ref()
	}

	pub fn field(&self) -> Option<FieldId> {
		self.session.as_ref().map(|s| s.field)
	}

	pub fn current(&self) -> Option<&Match> {
		self.session.as_ref().map(PanelSession::current)
	}

	/// Builds the render target for the current match.
	///
	/// `field_text` is the field's live content, used for the excerpt.
	pub fn view(&self, field_text: &str, position: Point) -> Option<PanelView> {
		let session = self.session.as_ref()?;
		let current = session.current();
		Some(PanelView {
			field: session.field,
			position,
			category: current.category,
			index: session.index,
			total: session.matches.len(),
			excerpt: current.excerpt(field_text),
			message: current.message.clone(),
			suggestions: current.replacements.iter().take(MAX_SUGGESTIONS).cloned().collect(),
			rule_id: current.rule_id.clone(),
		})
	}
}

/// Data-only panel render target consumed by the host surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
	pub field: FieldId,
	/// Top-left corner in viewport coordinates.
	pub position: Point,
	pub category: Category,
	/// Zero-based index of the shown match.
	pub index: usize,
	pub total: usize,
	/// The flagged substring.
	pub excerpt: String,
	pub message: String,
	/// At most [`MAX_SUGGESTIONS`] candidates, best first.
	pub suggestions: Vec<String>,
	pub rule_id: String,
}

impl PanelView {
	pub fn has_prev(&self) -> bool {
		self.index > 0
	}

	pub fn has_next(&self) -> bool {
		self.index + 1 < self.total
	}

	/// One-based position counter, e.g. `2/5`.
	pub fn counter(&self) -> String {
		format!("{}/{}", self.index + 1, self.total)
	}
}
