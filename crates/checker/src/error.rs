use thiserror::Error;

/// Failures at the checker service boundary.
///
/// None of these reach the inline overlay: the orchestrator degrades every
/// variant to an empty result. Only the manual trigger surface renders them.
#[derive(Debug, Error)]
pub enum CheckError {
	/// The request could not be sent or the response body could not be read.
	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),
	/// The service answered with a non-success status.
	#[error("checker returned HTTP {0}")]
	Status(u16),
	/// The response body is not a valid check payload.
	#[error("malformed response: {0}")]
	Decode(#[from] serde_json::Error),
	/// The host messaging context was torn down mid-operation.
	#[error("host context invalidated")]
	ContextInvalidated,
}

/// Result type for checker operations.
pub type Result<T> = std::result::Result<T, CheckError>;
