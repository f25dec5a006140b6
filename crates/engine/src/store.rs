//! Per-field match records.
//!
//! A [`MatchRecord`] pairs the text a check ran against with the matches it
//! produced. Offsets in `matches` always index into `text`; the two mutation
//! paths besides a fresh check keep that true.
//!
//! # Accepting a replacement
//!
//! Replacing the span of match `k` with a string of a different length moves
//! every later match by the signed length delta. Only matches that start
//! strictly after `k` move. A match that straddles the edited span keeps its
//! old position and length until the next full check replaces the record;
//! a match that no longer fits the new text at all is dropped.

use gramm_primitives::{FieldId, Match};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Text last checked for a field, and the matches active on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchRecord {
	pub text: String,
	pub matches: Vec<Match>,
}

impl MatchRecord {
	pub fn new(text: impl Into<String>, matches: Vec<Match>) -> Self {
		Self {
			text: text.into(),
			matches,
		}
	}

	pub fn is_clean(&self) -> bool {
		self.matches.is_empty()
	}
}

/// Shifts matches after an in-place edit of `edited`'s span.
///
/// `edited` must already be removed from `matches`. Matches starting strictly
/// after `edited.offset` move by `new_len - edited.length`.
pub fn shift_after_edit(matches: &mut [Match], edited: &Match, new_len: usize) {
	let delta = new_len as isize - edited.length as isize;
	if delta == 0 {
		return;
	}
	for m in matches.iter_mut().filter(|m| m.offset > edited.offset) {
		m.offset = m.offset.saturating_add_signed(delta);
	}
}

/// Records keyed by field handle.
///
/// Entries are evicted explicitly when the host reports a field detached.
#[derive(Debug, Default)]
pub struct MatchStore {
	records: FxHashMap<FieldId, MatchRecord>,
}

impl MatchStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the record for `field`.
	pub fn set(&mut self, field: FieldId, text: impl Into<String>, matches: Vec<Match>) {
		let record = MatchRecord::new(text, matches);
		trace!(field = field.0, matches = record.matches.len(), "engine.store.set");
		self.records.insert(field, record);
	}

	pub fn get(&self, field: FieldId) -> Option<&MatchRecord> {
		self.records.get(&field)
	}

	pub fn remove(&mut self, field: FieldId) -> Option<MatchRecord> {
		self.records.remove(&field)
	}

	pub fn contains(&self, field: FieldId) -> bool {
		self.records.contains_key(&field)
	}

	pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
		self.records.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn clear(&mut self) {
		self.records.clear();
	}

	/// Removes every match from `rule_id` in `field`'s record. The text is
	/// untouched. Returns the number of matches removed.
	pub fn dismiss_rule(&mut self, field: FieldId, rule_id: &str) -> usize {
		let Some(record) = self.records.get_mut(&field) else {
			return 0;
		};
		let before = record.matches.len();
		record.matches.retain(|m| m.rule_id != rule_id);
		let removed = before - record.matches.len();
		debug!(field = field.0, rule_id, removed, "engine.store.dismiss_rule");
		removed
	}

	/// Applies an accepted replacement for `accepted` to `field`'s record.
	///
	/// `replacement` is the string that was spliced over the match's span and
	/// `new_text` the field content afterwards. Returns the updated record, or
	/// `None` if the field has no record or `accepted` is not in it.
	pub fn accept(&mut self, field: FieldId, accepted: &Match, replacement: &str, new_text: String) -> Option<&MatchRecord> {
		let record = self.records.get_mut(&field)?;
		let index = record.matches.iter().position(|m| m == accepted)?;
		let edited = record.matches.remove(index);

		shift_after_edit(&mut record.matches, &edited, replacement.chars().count());

		let len = new_text.chars().count();
		let before = record.matches.len();
		record.matches.retain(|m| m.fits(len));
		if record.matches.len() != before {
			debug!(field = field.0, dropped = before - record.matches.len(), "engine.store.accept_dropped_stale");
		}
		record.text = new_text;

		debug!(field = field.0, offset = edited.offset, remaining = record.matches.len(), "engine.store.accept");
		Some(record)
	}
}
