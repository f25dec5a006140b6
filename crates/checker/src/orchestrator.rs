//! Check orchestration and failure policy.
//!
//! [`CheckOrchestrator`] is the only place a [`CheckError`] is turned into
//! "no issues found". Callers get a [`CheckOutcome`] that still says *why* the
//! list is empty, so the engine can leave a previous record untouched after a
//! failure instead of overwriting it.

use std::sync::Arc;

use gramm_primitives::Match;
use tracing::{debug, warn};

use crate::transport::CheckTransport;
use crate::wire::CheckRequest;
use crate::{CheckError, IgnoredRules, Result};

/// Minimum trimmed char count worth sending to the checker.
pub const MIN_CHECK_CHARS: usize = 3;

/// Result of one triggered check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
	/// The service answered; matches are sorted by offset.
	Checked(Vec<Match>),
	/// Text too short; no request was made.
	Skipped,
	/// The request failed or the answer was malformed.
	Degraded,
}

impl CheckOutcome {
	/// Matches to display. Empty unless the check succeeded.
	pub fn matches(&self) -> &[Match] {
		match self {
			Self::Checked(matches) => matches,
			Self::Skipped | Self::Degraded => &[],
		}
	}

	pub fn into_matches(self) -> Vec<Match> {
		match self {
			Self::Checked(matches) => matches,
			Self::Skipped | Self::Degraded => Vec::new(),
		}
	}

	/// Removes matches from ignored rules.
	pub fn without_ignored(mut self, ignored: &IgnoredRules) -> Self {
		if let Self::Checked(matches) = &mut self {
			ignored.filter(matches);
		}
		self
	}
}

/// Runs checks against a transport and absorbs its failures.
#[derive(Clone)]
pub struct CheckOrchestrator {
	transport: Arc<dyn CheckTransport>,
}

impl std::fmt::Debug for CheckOrchestrator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CheckOrchestrator").finish_non_exhaustive()
	}
}

impl CheckOrchestrator {
	pub fn new(transport: Arc<dyn CheckTransport>) -> Self {
		Self { transport }
	}

	/// Builds a request, or `None` when the text is below [`MIN_CHECK_CHARS`].
	pub fn prepare(text: &str, language: &str) -> Option<CheckRequest> {
		if text.trim().chars().count() < MIN_CHECK_CHARS {
			return None;
		}
		Some(CheckRequest::new(text, language))
	}

	/// Sends a prepared request. Never fails.
	pub async fn run(&self, request: &CheckRequest) -> CheckOutcome {
		match self.transport.check(request).await {
			Ok(matches) => CheckOutcome::Checked(matches),
			Err(err) => {
				match &err {
					CheckError::Transport(_) | CheckError::Status(_) => {
						warn!(error = %err, "checker.degraded");
					}
					CheckError::Decode(_) | CheckError::ContextInvalidated => {
						debug!(error = %err, "checker.degraded");
					}
				}
				CheckOutcome::Degraded
			}
		}
	}

	/// Full inline check: short circuit, request, degrade, filter.
	pub async fn check(&self, text: &str, language: &str, ignored: &IgnoredRules) -> CheckOutcome {
		let Some(request) = Self::prepare(text, language) else {
			return CheckOutcome::Skipped;
		};
		self.run(&request).await.without_ignored(ignored)
	}

	/// Manual trigger variant: failures are returned, not absorbed.
	///
	/// Short text still short-circuits to an empty list.
	pub async fn check_strict(&self, text: &str, language: &str) -> Result<Vec<Match>> {
		let Some(request) = Self::prepare(text, language) else {
			return Ok(Vec::new());
		};
		self.transport.check(&request).await
	}
}

#[cfg(test)]
mod tests;
