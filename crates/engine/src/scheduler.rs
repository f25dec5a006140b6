//! Per-field debounce timers.
//!
//! Timers are plain deadlines; nothing sleeps. The engine passes the current
//! time into [`DebounceScheduler::take_due`] on every tick, the same way a
//! sync manager checks `is_due(now, debounce)` per document.

use std::time::{Duration, Instant};

use gramm_primitives::FieldId;
use rustc_hash::FxHashMap;
use tracing::trace;

/// How long a blurred field keeps its overlays before they are torn down.
pub const FOCUS_GRACE: Duration = Duration::from_millis(200);

/// At most one live deadline per field.
#[derive(Debug, Default)]
pub struct DebounceScheduler {
	deadlines: FxHashMap<FieldId, Instant>,
}

impl DebounceScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Arms (or re-arms) the timer for `field` to fire `delay` after `now`.
	///
	/// Returns true if an older timer was replaced.
	pub fn arm(&mut self, field: FieldId, now: Instant, delay: Duration) -> bool {
		let replaced = self.deadlines.insert(field, now + delay).is_some();
		trace!(field = field.0, delay_ms = delay.as_millis() as u64, replaced, "engine.scheduler.armed");
		replaced
	}

	/// Cancels the timer for `field`. Returns true if one was pending.
	pub fn cancel(&mut self, field: FieldId) -> bool {
		self.deadlines.remove(&field).is_some()
	}

	/// Cancels every timer, returning how many were pending.
	pub fn cancel_all(&mut self) -> usize {
		let count = self.deadlines.len();
		self.deadlines.clear();
		count
	}

	pub fn is_armed(&self, field: FieldId) -> bool {
		self.deadlines.contains_key(&field)
	}

	pub fn deadline(&self, field: FieldId) -> Option<Instant> {
		self.deadlines.get(&field).copied()
	}

	/// Earliest pending deadline, for hosts that sleep between ticks.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.deadlines.values().min().copied()
	}

	/// Removes and returns every field whose deadline is at or before `now`,
	/// earliest first.
	pub fn take_due(&mut self, now: Instant) -> Vec<FieldId> {
		let mut due: Vec<(Instant, FieldId)> = self
			.deadlines
			.iter()
			.filter(|(_, deadline)| **deadline <= now)
			.map(|(&field, &deadline)| (deadline, field))
			.collect();
		due.sort_unstable();

		for (_, field) in &due {
			self.deadlines.remove(field);
		}
		due.into_iter().map(|(_, field)| field).collect()
	}

	pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
		self.deadlines.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.deadlines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.deadlines.is_empty()
	}
}

#[cfg(test)]
mod tests;
