use std::sync::Arc;

use async_trait::async_trait;
use gramm_primitives::Category;
use parking_lot::Mutex;

use super::*;

struct ScriptedTransport {
	calls: Mutex<Vec<CheckRequest>>,
	reply: fn() -> Result<Vec<Match>>,
}

impl ScriptedTransport {
	fn new(reply: fn() -> Result<Vec<Match>>) -> Arc<Self> {
		Arc::new(Self {
			calls: Mutex::new(Vec::new()),
			reply,
		})
	}

	fn call_count(&self) -> usize {
		self.calls.lock().len()
	}
}

#[async_trait]
impl CheckTransport for ScriptedTransport {
	async fn check(&self, request: &CheckRequest) -> Result<Vec<Match>> {
		self.calls.lock().push(request.clone());
		(self.reply)()
	}
}

fn two_rules() -> Result<Vec<Match>> {
	Ok(vec![
		Match {
			offset: 0,
			length: 3,
			message: "typo".to_string(),
			rule_id: "SPELL".to_string(),
			category: Category::Spelling,
			replacements: vec!["The".to_string()],
		},
		Match {
			offset: 8,
			length: 4,
			message: "comma".to_string(),
			rule_id: "COMMA".to_string(),
			category: Category::Grammar,
			replacements: Vec::new(),
		},
	])
}

fn unavailable() -> Result<Vec<Match>> {
	Err(CheckError::Status(503))
}

fn invalidated() -> Result<Vec<Match>> {
	Err(CheckError::ContextInvalidated)
}

fn malformed() -> Result<Vec<Match>> {
	Err(serde_json::from_str::<serde_json::Value>("{not json").unwrap_err().into())
}

#[tokio::test]
async fn short_text_skips_transport() {
	let transport = ScriptedTransport::new(two_rules);
	let orchestrator = CheckOrchestrator::new(transport.clone());
	let ignored = IgnoredRules::new();

	for text in ["", "  ", "ab", "  ab  ", "\n\té\n"] {
		let outcome = orchestrator.check(text, "es", &ignored).await;
		assert_eq!(outcome, CheckOutcome::Skipped, "text {text:?}");
		assert!(outcome.matches().is_empty());
	}
	assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn three_trimmed_chars_are_sent() {
	let transport = ScriptedTransport::new(two_rules);
	let orchestrator = CheckOrchestrator::new(transport.clone());

	let outcome = orchestrator.check("  abc ", "es", &IgnoredRules::new()).await;
	assert_eq!(outcome.matches().len(), 2);
	assert_eq!(transport.call_count(), 1);
	assert_eq!(transport.calls.lock()[0].text, "  abc ");
}

#[tokio::test]
async fn failures_degrade_to_empty() {
	for reply in [unavailable as fn() -> Result<Vec<Match>>, invalidated, malformed] {
		let orchestrator = CheckOrchestrator::new(ScriptedTransport::new(reply));
		let outcome = orchestrator.check("Teh cat sits.", "en-US", &IgnoredRules::new()).await;
		assert_eq!(outcome, CheckOutcome::Degraded);
		assert!(outcome.into_matches().is_empty());
	}
}

#[tokio::test]
async fn ignored_rules_are_filtered_before_returning() {
	let orchestrator = CheckOrchestrator::new(ScriptedTransport::new(two_rules));
	let mut ignored = IgnoredRules::new();
	ignored.insert("COMMA");

	let outcome = orchestrator.check("Teh cat, sits.", "en-US", &ignored).await;
	let ids: Vec<_> = outcome.matches().iter().map(|m| m.rule_id.as_str()).collect();
	assert_eq!(ids, ["SPELL"]);
}

#[tokio::test]
async fn strict_check_surfaces_errors() {
	let orchestrator = CheckOrchestrator::new(ScriptedTransport::new(unavailable));
	let err = orchestrator.check_strict("Teh cat sits.", "en-US").await.unwrap_err();
	assert!(matches!(err, CheckError::Status(503)));
	assert!(orchestrator.check_strict("ab", "en-US").await.unwrap().is_empty());
}
