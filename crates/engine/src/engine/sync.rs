//! Per-field check sequencing.

use gramm_checker::CheckOutcome;
use gramm_primitives::FieldId;

/// Completion message from a spawned check task.
#[derive(Debug)]
pub(crate) struct CheckComplete {
	pub field: FieldId,
	pub seq: u64,
	/// Exact text that was sent.
	pub text: String,
	pub outcome: CheckOutcome,
}

/// Sequence bookkeeping for one field.
///
/// Every dispatched check takes the next sequence number. A completion is
/// applied only if it is newer than the last applied one, so a slow response
/// can never overwrite the result of a check sent after it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldSync {
	sent: u64,
	applied: u64,
	in_flight: usize,
}

impl FieldSync {
	pub fn begin(&mut self) -> u64 {
		self.sent += 1;
		self.in_flight += 1;
		self.sent
	}

	/// Retires one in-flight check. Returns true if its result should be applied.
	pub fn complete(&mut self, seq: u64) -> bool {
		self.in_flight = self.in_flight.saturating_sub(1);
		if seq <= self.applied {
			return false;
		}
		self.applied = seq;
		true
	}

	/// Marks every check sent so far as stale.
	///
	/// Used when the record was replaced locally (skip, accept, disable).
	pub fn invalidate(&mut self) {
		self.applied = self.sent;
	}

	pub fn in_flight(&self) -> usize {
		self.in_flight
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn later_send_wins_over_late_arrival() {
		let mut sync = FieldSync::default();
		let first = sync.begin();
		let second = sync.begin();
		assert_eq!(sync.in_flight(), 2);

		assert!(sync.complete(second));
		assert!(!sync.complete(first));
		assert_eq!(sync.in_flight(), 0);
	}

	#[test]
	fn in_order_arrivals_all_apply() {
		let mut sync = FieldSync::default();
		let first = sync.begin();
		let second = sync.begin();

		assert!(sync.complete(first));
		assert!(sync.complete(second));
	}

	#[test]
	fn invalidate_drops_everything_in_flight() {
		let mut sync = FieldSync::default();
		let seq = sync.begin();
		sync.invalidate();

		assert!(!sync.complete(seq));
		let next = sync.begin();
		assert!(sync.complete(next));
	}
}
