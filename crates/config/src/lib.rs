//! Preferences for the gramm checker.
//!
//! Preferences are a flat TOML table. Every key is optional; missing keys fall
//! back to the install-time defaults, so an empty file is a valid config.
//!
//! # Configuration File
//!
//! gramm looks for `$XDG_CONFIG_HOME/gramm/config.toml` (or the platform
//! equivalent). A missing file is not an error.
//!
//! ```toml
//! enabled = true
//! language = "en-US"
//! check_delay_ms = 800
//! api_url = "https://api.languagetool.org/v2/check"
//! request_timeout_ms = 10000
//! ```
//!
//! # Change Notifications
//!
//! Hosts that store preferences externally deliver partial updates as a
//! [`PreferencesChange`]. [`Preferences::apply`] merges one and reports whether
//! the `enabled` flag flipped, which is what decides whether overlays and
//! listeners must be torn down or reinstalled.

pub mod error;
pub mod preferences;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
pub use preferences::{
	DEFAULT_API_URL, DEFAULT_CHECK_DELAY_MS, DEFAULT_LANGUAGE, EnabledTransition, Preferences,
	PreferencesChange,
};

/// Returns the default config file location, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("gramm").join("config.toml"))
}

/// Loads preferences from a TOML file.
pub fn load(path: impl AsRef<Path>) -> Result<Preferences> {
	let path = path.as_ref();
	let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
		path: path.to_path_buf(),
		error: e,
	})?;
	Preferences::parse(&content)
}

/// Loads preferences from `path`, falling back to defaults when the file does
/// not exist. Other I/O and parse failures are returned.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Preferences> {
	let path = path.as_ref();
	if !path.exists() {
		tracing::debug!(path = %path.display(), "config.missing_file");
		return Ok(Preferences::default());
	}
	load(path)
}
