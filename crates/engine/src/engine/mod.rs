//! Lifecycle driver.
//!
//! [`Engine`] owns every piece of per-field state and the single overlay slot.
//! Hosts feed it [`HostEvent`]s and call [`Engine::tick`] whenever
//! [`Engine::next_deadline`] passes or a check may have completed.
//!
//! # Checks
//!
//! A due field's text is snapshotted and sent from a spawned task; the task
//! reports back over an unbounded channel drained at the start of every tick.
//! Sent requests are never cancelled. Each carries a per-field sequence
//! number and completions older than the newest applied one are dropped.
//!
//! # Failures
//!
//! Host errors abort the operation in progress and nothing else. A
//! [`HostError::Detached`] field is forgotten on the spot.

mod sync;

use std::time::Instant;

use gramm_checker::{CheckOrchestrator, CheckOutcome, IgnoredRules};
use gramm_config::{EnabledTransition, Preferences, PreferencesChange};
use gramm_primitives::{FieldId, Match};
use rustc_hash::FxHashMap;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use self::sync::{CheckComplete, FieldSync};
use crate::classifier::is_checkable;
use crate::host::{Host, HostError};
use crate::overlay::{BadgeStatus, MAX_SUGGESTIONS, OverlayManager, PanelAction};
use crate::scheduler::{DebounceScheduler, FOCUS_GRACE};
use crate::store::MatchStore;

/// Events reported by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
	FocusIn(FieldId),
	FocusOut(FieldId),
	/// The user edited the field.
	Input(FieldId),
	/// A click anywhere on the page.
	Click { inside_panel: bool },
	Scroll,
	/// The page was resized or reflowed.
	Layout,
	BadgeClicked,
	Panel(PanelAction),
	/// The field was removed from the page.
	Detached(FieldId),
	/// The page navigated; every field is gone.
	Navigation,
	/// Explicit request to check the focused field now.
	CheckSelection,
}

/// Work done by one [`Engine::tick`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickStats {
	pub dispatched: usize,
	pub applied: usize,
	pub stale: usize,
}

pub struct Engine {
	prefs: Preferences,
	orchestrator: CheckOrchestrator,
	store: MatchStore,
	ignored: IgnoredRules,
	overlays: OverlayManager,
	checks: DebounceScheduler,
	grace: DebounceScheduler,
	sync: FxHashMap<FieldId, FieldSync>,
	focused: Option<FieldId>,
	listening: bool,
	completion_rx: mpsc::UnboundedReceiver<CheckComplete>,
	completion_tx: mpsc::UnboundedSender<CheckComplete>,
}

impl std::fmt::Debug for Engine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Engine")
			.field("enabled", &self.prefs.enabled)
			.field("records", &self.store.len())
			.field("pending", &self.checks.len())
			.field("in_flight", &self.in_flight_count())
			.field("focused", &self.focused)
			.finish()
	}
}

impl Engine {
	pub fn new(prefs: Preferences, orchestrator: CheckOrchestrator) -> Self {
		let (completion_tx, completion_rx) = mpsc::unbounded_channel();
		Self {
			prefs,
			orchestrator,
			store: MatchStore::new(),
			ignored: IgnoredRules::new(),
			overlays: OverlayManager::new(),
			checks: DebounceScheduler::new(),
			grace: DebounceScheduler::new(),
			sync: FxHashMap::default(),
			focused: None,
			listening: false,
			completion_rx,
			completion_tx,
		}
	}

	/// Installs host listeners if checking is enabled.
	pub fn start<H: Host + ?Sized>(&mut self, host: &mut H) {
		if self.prefs.enabled {
			self.install(host);
		}
	}

	pub fn prefs(&self) -> &Preferences {
		&self.prefs
	}

	pub fn store(&self) -> &MatchStore {
		&self.store
	}

	pub fn ignored(&self) -> &IgnoredRules {
		&self.ignored
	}

	pub fn overlays(&self) -> &OverlayManager {
		&self.overlays
	}

	pub fn focused(&self) -> Option<FieldId> {
		self.focused
	}

	pub fn is_listening(&self) -> bool {
		self.listening
	}

	pub fn is_pending(&self, field: FieldId) -> bool {
		self.checks.is_armed(field)
	}

	/// Fields with at least one check awaiting a response.
	pub fn in_flight_count(&self) -> usize {
		self.sync.values().filter(|s| s.in_flight() > 0).count()
	}

	/// Earliest debounce or focus-grace deadline.
	pub fn next_deadline(&self) -> Option<Instant> {
		match (self.checks.next_deadline(), self.grace.next_deadline()) {
			(Some(a), Some(b)) => Some(a.min(b)),
			(a, b) => a.or(b),
		}
	}

	/// Applies a preference change notification.
	///
	/// Disabling tears down overlays, timers and listeners before returning.
	/// Enabling reinstalls listeners.
	pub fn apply_preferences<H: Host + ?Sized>(&mut self, change: PreferencesChange, host: &mut H) -> EnabledTransition {
		let transition = self.prefs.apply(change);
		match transition {
			EnabledTransition::Disabled => self.disable(host),
			EnabledTransition::Enabled => self.install(host),
			EnabledTransition::Unchanged => {}
		}
		debug!(?transition, language = %self.prefs.language, delay_ms = self.prefs.check_delay_ms, "engine.prefs.applied");
		transition
	}

	pub fn handle<H: Host + ?Sized>(&mut self, event: HostEvent, now: Instant, host: &mut H) {
		if !self.prefs.enabled {
			trace!(?event, "engine.event.ignored_disabled");
			return;
		}
		match event {
			HostEvent::FocusIn(field) => self.on_focus_in(field, host),
			HostEvent::FocusOut(field) => self.on_focus_out(field, now),
			HostEvent::Input(field) => self.on_input(field, now, host),
			HostEvent::Click { inside_panel: true } => {
				if let Some(field) = self.overlays.panel().field() {
					self.grace.cancel(field);
				}
			}
			HostEvent::Click { inside_panel: false } => {
				self.overlays.close_panel(host);
			}
			HostEvent::Scroll => {
				self.overlays.close_panel(host);
			}
			HostEvent::Layout => self.overlays.render(host),
			HostEvent::BadgeClicked => self.on_badge_clicked(host),
			HostEvent::Panel(action) => self.on_panel_action(action, now, host),
			HostEvent::Detached(field) => self.forget(field, host),
			HostEvent::Navigation => self.forget_all(host),
			HostEvent::CheckSelection => {
				self.check_focused(host);
			}
		}
	}

	/// Applies finished checks, fires expired focus-grace timers, then
	/// dispatches due debounced checks.
	pub fn tick<H: Host + ?Sized>(&mut self, now: Instant, host: &mut H) -> TickStats {
		let mut stats = TickStats::default();
		self.poll_completions(host, &mut stats);

		for field in self.grace.take_due(now) {
			if host.active_field() == Some(field) {
				continue;
			}
			debug!(field = field.0, "engine.focus.grace_expired");
			if self.overlays.anchor() == Some(field) {
				self.overlays.teardown(host);
			} else if self.overlays.panel().field() == Some(field) {
				self.overlays.close_panel(host);
			}
		}

		if !self.prefs.enabled {
			return stats;
		}
		for field in self.checks.take_due(now) {
			if self.dispatch(field, host) {
				stats.dispatched += 1;
			}
		}
		stats
	}

	/// Checks the focused field immediately, bypassing the debounce.
	///
	/// Returns false if nothing checkable has focus.
	pub fn check_focused<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
		if !self.prefs.enabled {
			return false;
		}
		let Some(field) = host.active_field() else {
			return false;
		};
		if !self.is_checkable(field, host) {
			return false;
		}
		self.focused = Some(field);
		self.checks.cancel(field);
		self.dispatch(field, host);
		true
	}

	/// Forgets every field the host reports as detached.
	pub fn sweep_detached<H: Host + ?Sized>(&mut self, host: &mut H) -> usize {
		let mut known: Vec<FieldId> = self.store.fields().collect();
		known.extend(self.checks.fields());
		known.extend(self.grace.fields());
		known.extend(self.sync.keys().copied());
		known.extend(self.focused);
		known.sort_unstable_by_key(|f| f.0);
		known.dedup();

		let detached: Vec<FieldId> = known.into_iter().filter(|&f| !host.is_attached(f)).collect();
		for &field in &detached {
			self.forget(field, host);
		}
		detached.len()
	}

	fn is_checkable<H: Host + ?Sized>(&self, field: FieldId, host: &H) -> bool {
		host.node(field).is_some_and(|node| is_checkable(&node))
	}

	fn install<H: Host + ?Sized>(&mut self, host: &mut H) {
		host.set_listeners(true);
		self.listening = true;
		debug!("engine.listeners.installed");
	}

	fn disable<H: Host + ?Sized>(&mut self, host: &mut H) {
		let cancelled = self.checks.cancel_all();
		self.grace.cancel_all();
		for sync in self.sync.values_mut() {
			sync.invalidate();
		}
		self.overlays.teardown(host);
		self.focused = None;
		host.set_listeners(false);
		self.listening = false;
		debug!(cancelled, "engine.listeners.removed");
	}

	fn on_focus_in<H: Host + ?Sized>(&mut self, field: FieldId, host: &mut H) {
		if !self.is_checkable(field, host) {
			return;
		}
		self.focused = Some(field);
		self.grace.cancel(field);
		self.dispatch(field, host);
	}

	fn on_focus_out(&mut self, field: FieldId, now: Instant) {
		if self.checks.cancel(field) {
			debug!(field = field.0, "engine.focus.timer_cancelled");
		}
		if self.focused == Some(field) {
			self.focused = None;
		}
		self.grace.arm(field, now, FOCUS_GRACE);
	}

	fn on_input<H: Host + ?Sized>(&mut self, field: FieldId, now: Instant, host: &mut H) {
		if !self.is_checkable(field, host) {
			return;
		}
		self.checks.arm(field, now, self.prefs.check_delay());
	}

	fn on_badge_clicked<H: Host + ?Sized>(&mut self, host: &mut H) {
		let Some(field) = self.overlays.anchor() else {
			return;
		};
		if !self.overlays.status().is_some_and(BadgeStatus::is_clickable) {
			return;
		}
		let Some(record) = self.store.get(field) else {
			return;
		};
		self.grace.cancel(field);
		if self.overlays.panel_mut().open(field, record.matches.clone()) {
			debug!(field = field.0, total = record.matches.len(), "engine.panel.opened");
			self.overlays.render_panel(host);
		}
	}

	fn on_panel_action<H: Host + ?Sized>(&mut self, action: PanelAction, now: Instant, host: &mut H) {
		let Some(field) = self.overlays.panel().field() else {
			return;
		};
		self.grace.cancel(field);
		match action {
			PanelAction::Close => {
				self.overlays.close_panel(host);
			}
			PanelAction::Next => {
				if self.overlays.panel_mut().next() {
					self.overlays.render_panel(host);
				}
			}
			PanelAction::Prev => {
				if self.overlays.panel_mut().prev() {
					self.overlays.render_panel(host);
				}
			}
			PanelAction::Accept { suggestion } => self.accept(field, suggestion, now, host),
			PanelAction::DismissRule => self.dismiss_rule(field, host),
		}
	}

	fn accept<H: Host + ?Sized>(&mut self, field: FieldId, suggestion: usize, now: Instant, host: &mut H) {
		let Some(current) = self.overlays.panel().current().cloned() else {
			return;
		};
		let Some(replacement) = current.replacements.iter().take(MAX_SUGGESTIONS).nth(suggestion).cloned() else {
			trace!(field = field.0, suggestion, "engine.accept.no_such_suggestion");
			return;
		};

		let new_text = match host.replace_range(field, current.offset, current.length, &replacement) {
			Ok(text) => text,
			Err(error) => {
				self.on_host_error(field, &error, host);
				return;
			}
		};

		let remaining = match self.store.accept(field, &current, &replacement, new_text.clone()) {
			Some(record) => record.matches.clone(),
			None => {
				// Panel snapshot and record diverged; fall back to the edited text alone.
				self.store.set(field, new_text, Vec::new());
				Vec::new()
			}
		};
		self.sync.entry(field).or_default().invalidate();

		self.overlays.panel_mut().replace_matches(remaining.clone());
		self.overlays.set_status(field, BadgeStatus::for_count(remaining.len()));
		self.overlays.render(host);
		self.checks.arm(field, now, self.prefs.check_delay());
	}

	fn dismiss_rule<H: Host + ?Sized>(&mut self, field: FieldId, host: &mut H) {
		let Some(current) = self.overlays.panel().current().cloned() else {
			return;
		};
		let rule_id = current.rule_id;
		if rule_id.is_empty() {
			trace!(field = field.0, "engine.rule.dismiss_without_id");
		} else if self.ignored.insert(&rule_id) {
			debug!(rule_id = %rule_id, ignored = self.ignored.len(), "engine.rule.dismissed");
		}
		self.store.dismiss_rule(field, &rule_id);

		let remaining: Vec<Match> = match self.store.get(field) {
			Some(record) => record.matches.clone(),
			None => self
				.overlays
				.panel()
				.session()
				.map(|s| s.matches.iter().filter(|m| m.rule_id != rule_id).cloned().collect())
				.unwrap_or_default(),
		};

		self.overlays.panel_mut().replace_matches(remaining.clone());
		self.overlays.set_status(field, BadgeStatus::for_count(remaining.len()));
		self.overlays.render(host);
	}

	/// Sends a check for `field`'s current text. Returns true if a request
	/// was spawned.
	fn dispatch<H: Host + ?Sized>(&mut self, field: FieldId, host: &mut H) -> bool {
		let text = match host.text(field) {
			Ok(text) => text,
			Err(error) => {
				self.on_host_error(field, &error, host);
				return false;
			}
		};

		let Some(request) = CheckOrchestrator::prepare(&text, self.prefs.language_or_default()) else {
			trace!(field = field.0, "engine.check.skipped_short");
			self.sync.entry(field).or_default().invalidate();
			self.store.remove(field);
			if self.overlays.panel().field() == Some(field) {
				self.overlays.panel_mut().close();
			}
			self.show_status(field, BadgeStatus::Clean, host);
			return false;
		};

		let seq = self.sync.entry(field).or_default().begin();
		debug!(field = field.0, seq, chars = text.chars().count(), language = %request.language, "engine.check.dispatch");
		self.show_status(field, BadgeStatus::Loading, host);

		let orchestrator = self.orchestrator.clone();
		let tx = self.completion_tx.clone();
		tokio::spawn(async move {
			let outcome = orchestrator.run(&request).await;
			if tx
				.send(CheckComplete {
					field,
					seq,
					text: request.text,
					outcome,
				})
				.is_err()
			{
				trace!(field = field.0, seq, "engine.check.receiver_dropped");
			}
		});
		true
	}

	fn poll_completions<H: Host + ?Sized>(&mut self, host: &mut H, stats: &mut TickStats) {
		while let Ok(complete) = self.completion_rx.try_recv() {
			let field = complete.field;
			let Some(sync) = self.sync.get_mut(&field) else {
				trace!(field = field.0, "engine.check.forgotten");
				continue;
			};
			if !sync.complete(complete.seq) || !self.prefs.enabled {
				debug!(field = field.0, seq = complete.seq, "engine.check.stale");
				stats.stale += 1;
				continue;
			}
			stats.applied += 1;

			let status = match complete.outcome.without_ignored(&self.ignored) {
				CheckOutcome::Checked(matches) => {
					debug!(field = field.0, seq = complete.seq, matches = matches.len(), "engine.check.applied");
					let status = BadgeStatus::for_count(matches.len());
					if self.overlays.panel().field() == Some(field) {
						self.overlays.panel_mut().replace_matches(matches.clone());
					}
					self.store.set(field, complete.text, matches);
					status
				}
				CheckOutcome::Skipped => {
					self.store.remove(field);
					BadgeStatus::Clean
				}
				CheckOutcome::Degraded => BadgeStatus::Clean,
			};
			self.show_status(field, status, host);
		}
	}

	/// Rebinds and remounts the badge if `field` is the one the user is on.
	fn show_status<H: Host + ?Sized>(&mut self, field: FieldId, status: BadgeStatus, host: &mut H) {
		if self.focused != Some(field) && self.overlays.anchor() != Some(field) {
			return;
		}
		self.overlays.bind(field, status);
		self.overlays.render(host);
	}

	fn on_host_error<H: Host + ?Sized>(&mut self, field: FieldId, error: &HostError, host: &mut H) {
		debug!(field = field.0, %error, "engine.host.error");
		if *error == HostError::Detached {
			self.forget(field, host);
		}
	}

	fn forget<H: Host + ?Sized>(&mut self, field: FieldId, host: &mut H) {
		self.checks.cancel(field);
		self.grace.cancel(field);
		self.store.remove(field);
		self.sync.remove(&field);
		if self.focused == Some(field) {
			self.focused = None;
		}
		if self.overlays.anchor() == Some(field) {
			self.overlays.teardown(host);
		} else if self.overlays.panel().field() == Some(field) {
			self.overlays.close_panel(host);
		}
		debug!(field = field.0, "engine.field.forgotten");
	}

	fn forget_all<H: Host + ?Sized>(&mut self, host: &mut H) {
		let cancelled = self.checks.cancel_all();
		self.grace.cancel_all();
		self.store.clear();
		self.sync.clear();
		self.focused = None;
		self.overlays.teardown(host);
		debug!(cancelled, "engine.navigation.reset");
	}
}
