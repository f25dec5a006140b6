use std::time::{Duration, Instant};

use gramm_primitives::FieldId;

use super::*;

const DELAY: Duration = Duration::from_millis(1500);

#[test]
fn rearming_replaces_the_pending_timer() {
	let mut scheduler = DebounceScheduler::new();
	let t0 = Instant::now();
	let field = FieldId(1);

	assert!(!scheduler.arm(field, t0, DELAY));
	assert!(scheduler.arm(field, t0 + Duration::from_millis(900), DELAY));
	assert_eq!(scheduler.len(), 1);

	// The first deadline has passed but it was replaced.
	assert!(scheduler.take_due(t0 + DELAY).is_empty());
	assert_eq!(scheduler.take_due(t0 + Duration::from_millis(2400)), vec![field]);
	assert!(scheduler.is_empty());
}

#[test]
fn not_due_before_delay_elapses() {
	let mut scheduler = DebounceScheduler::new();
	let t0 = Instant::now();
	scheduler.arm(FieldId(1), t0, DELAY);
	assert!(scheduler.take_due(t0 + DELAY - Duration::from_millis(1)).is_empty());
	assert!(scheduler.is_armed(FieldId(1)));
}

#[test]
fn cancel_prevents_firing() {
	let mut scheduler = DebounceScheduler::new();
	let t0 = Instant::now();
	scheduler.arm(FieldId(1), t0, DELAY);
	assert!(scheduler.cancel(FieldId(1)));
	assert!(!scheduler.cancel(FieldId(1)));
	assert!(scheduler.take_due(t0 + DELAY * 2).is_empty());
}

#[test]
fn due_fields_come_out_earliest_first() {
	let mut scheduler = DebounceScheduler::new();
	let t0 = Instant::now();
	scheduler.arm(FieldId(7), t0 + Duration::from_millis(300), DELAY);
	scheduler.arm(FieldId(3), t0, DELAY);
	scheduler.arm(FieldId(9), t0 + Duration::from_secs(10), DELAY);

	assert_eq!(scheduler.next_deadline(), Some(t0 + DELAY));
	assert_eq!(scheduler.take_due(t0 + Duration::from_secs(2)), vec![FieldId(3), FieldId(7)]);
	assert_eq!(scheduler.fields().collect::<Vec<_>>(), vec![FieldId(9)]);
}

#[test]
fn cancel_all_reports_count() {
	let mut scheduler = DebounceScheduler::new();
	let t0 = Instant::now();
	scheduler.arm(FieldId(1), t0, DELAY);
	scheduler.arm(FieldId(2), t0, DELAY);
	assert_eq!(scheduler.cancel_all(), 2);
	assert_eq!(scheduler.next_deadline(), None);
}
