use gramm_primitives::Match;
use rustc_hash::FxHashSet;

/// Rule identifiers the user dismissed during this session.
///
/// Process-wide and grow-only; never persisted.
#[derive(Debug, Default, Clone)]
pub struct IgnoredRules {
	rules: FxHashSet<String>,
}

impl IgnoredRules {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a rule. Returns false if it was already ignored.
	pub fn insert(&mut self, rule_id: &str) -> bool {
		if self.rules.contains(rule_id) {
			return false;
		}
		self.rules.insert(rule_id.to_string())
	}

	pub fn contains(&self, rule_id: &str) -> bool {
		self.rules.contains(rule_id)
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Drops matches produced by ignored rules, keeping order.
	pub fn filter(&self, matches: &mut Vec<Match>) {
		if self.rules.is_empty() {
			return;
		}
		matches.retain(|m| !self.rules.contains(&m.rule_id));
	}
}
