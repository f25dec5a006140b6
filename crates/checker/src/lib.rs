//! Checker service boundary.
//!
//! - [`wire`]: request encoding and response decoding for the LanguageTool
//!   `/v2/check` endpoint, including UTF-16 to char offset conversion.
//! - [`transport`]: the [`CheckTransport`] seam and its reqwest implementation.
//! - [`orchestrator`]: [`CheckOrchestrator`], which owns the
//!   degrade-to-empty policy and the minimum-length short circuit.
//! - [`ignored`]: the session-wide [`IgnoredRules`] set.
//! - [`report`]: the flat text report used by the manual trigger surface.

pub mod error;
pub mod ignored;
pub mod orchestrator;
pub mod report;
pub mod transport;
pub mod wire;

pub use error::{CheckError, Result};
pub use ignored::IgnoredRules;
pub use orchestrator::{CheckOrchestrator, CheckOutcome, MIN_CHECK_CHARS};
pub use transport::{CheckTransport, HttpTransport};
pub use wire::CheckRequest;
