use std::time::Duration;

use async_trait::async_trait;
use gramm_primitives::Match;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, trace};

use crate::wire::{CheckRequest, decode_response};
use crate::{CheckError, Result};

/// The request/response seam to the remote checker.
///
/// Implementations report every failure explicitly; deciding what a failure
/// means for the user is the orchestrator's job. Exactly one attempt is made
/// per call.
#[async_trait]
pub trait CheckTransport: Send + Sync {
	async fn check(&self, request: &CheckRequest) -> Result<Vec<Match>>;
}

/// HTTP transport posting form-encoded requests to a LanguageTool endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: reqwest::Client,
	endpoint: String,
}

impl HttpTransport {
	/// Builds a transport. `timeout` of `None` leaves timing to reqwest's
	/// defaults.
	pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
		let mut builder = reqwest::Client::builder();
		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}
		Ok(Self {
			client: builder.build()?,
			endpoint: endpoint.into(),
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl CheckTransport for HttpTransport {
	async fn check(&self, request: &CheckRequest) -> Result<Vec<Match>> {
		trace!(endpoint = %self.endpoint, language = %request.language, chars = request.text.chars().count(), "checker.http.send");

		let response = self
			.client
			.post(&self.endpoint)
			.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(request.form_body())
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			debug!(status = status.as_u16(), "checker.http.status");
			return Err(CheckError::Status(status.as_u16()));
		}

		let body = response.text().await?;
		decode_response(&request.text, &body)
	}
}
