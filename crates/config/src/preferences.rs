use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Checker endpoint used when none is configured.
pub const DEFAULT_API_URL: &str = "https://api.languagetool.org/v2/check";

/// Language code used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "es";

/// Idle delay before a check fires after the last edit.
pub const DEFAULT_CHECK_DELAY_MS: u64 = 1500;

/// User preferences read at startup and on every change notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preferences {
	/// Master switch for inline checking.
	pub enabled: bool,
	/// Checker language code (`es`, `en-US`, `auto`, ...).
	pub language: String,
	/// Debounce delay in milliseconds.
	pub check_delay_ms: u64,
	/// Checker endpoint.
	pub api_url: String,
	/// Per-request timeout. `None` leaves timing to the transport.
	pub request_timeout_ms: Option<u64>,
}

impl Default for Preferences {
	fn default() -> Self {
		Self {
			enabled: true,
			language: DEFAULT_LANGUAGE.to_string(),
			check_delay_ms: DEFAULT_CHECK_DELAY_MS,
			api_url: DEFAULT_API_URL.to_string(),
			request_timeout_ms: None,
		}
	}
}

/// A partial update delivered by the preference store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreferencesChange {
	pub enabled: Option<bool>,
	pub language: Option<String>,
	pub check_delay_ms: Option<u64>,
	pub api_url: Option<String>,
	pub request_timeout_ms: Option<Option<u64>>,
}

/// What a change did to the `enabled` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnabledTransition {
	Unchanged,
	Enabled,
	Disabled,
}

impl Preferences {
	/// Parses and validates a TOML document.
	pub fn parse(input: &str) -> Result<Self> {
		let prefs: Self = toml::from_str(input)?;
		prefs.validate()?;
		Ok(prefs)
	}

	fn validate(&self) -> Result<()> {
		if self.language.trim().is_empty() {
			return Err(ConfigError::Invalid("language must not be empty".to_string()));
		}
		if self.api_url.trim().is_empty() {
			return Err(ConfigError::Invalid("api_url must not be empty".to_string()));
		}
		Ok(())
	}

	/// Debounce delay, never shorter than one millisecond.
	pub fn check_delay(&self) -> Duration {
		Duration::from_millis(self.check_delay_ms.max(1))
	}

	pub fn request_timeout(&self) -> Option<Duration> {
		self.request_timeout_ms.map(Duration::from_millis)
	}

	/// Language to send with a check, falling back to [`DEFAULT_LANGUAGE`].
	pub fn language_or_default(&self) -> &str {
		let language = self.language.trim();
		if language.is_empty() { DEFAULT_LANGUAGE } else { language }
	}

	/// Merges a change notification in place.
	pub fn apply(&mut self, change: PreferencesChange) -> EnabledTransition {
		let was_enabled = self.enabled;

		if let Some(enabled) = change.enabled {
			self.enabled = enabled;
		}
		if let Some(language) = change.language {
			self.language = language;
		}
		if let Some(delay) = change.check_delay_ms {
			self.check_delay_ms = delay;
		}
		if let Some(api_url) = change.api_url {
			self.api_url = api_url;
		}
		if let Some(timeout) = change.request_timeout_ms {
			self.request_timeout_ms = timeout;
		}

		match (was_enabled, self.enabled) {
			(false, true) => EnabledTransition::Enabled,
			(true, false) => EnabledTransition::Disabled,
			_ => EnabledTransition::Unchanged,
		}
	}
}
