//! LanguageTool `/v2/check` wire format.
//!
//! The service reports offsets in UTF-16 code units. Everything past this
//! module works in char indices, so [`decode_response`] converts each span
//! against the text that was sent.

use gramm_primitives::{Category, Match};
use ropey::Rope;
use serde::Deserialize;
use tracing::debug;

use crate::Result;

/// A single check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
	pub text: String,
	pub language: String,
}

impl CheckRequest {
	pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			language: language.into(),
		}
	}

	/// Encodes the request as an `application/x-www-form-urlencoded` body.
	pub fn form_body(&self) -> String {
		url::form_urlencoded::Serializer::new(String::new())
			.append_pair("text", &self.text)
			.append_pair("language", &self.language)
			.append_pair("enabledOnly", "false")
			.finish()
	}
}

#[derive(Debug, Default, Deserialize)]
struct WireResponse {
	#[serde(default)]
	matches: Vec<WireMatch>,
}

#[derive(Debug, Deserialize)]
struct WireMatch {
	offset: usize,
	length: usize,
	#[serde(default)]
	message: String,
	#[serde(default)]
	replacements: Vec<WireReplacement>,
	#[serde(default)]
	rule: Option<WireRule>,
}

#[derive(Debug, Deserialize)]
struct WireReplacement {
	#[serde(default)]
	value: String,
}

#[derive(Debug, Deserialize)]
struct WireRule {
	#[serde(default)]
	id: String,
	#[serde(default)]
	category: Option<WireCategory>,
}

#[derive(Debug, Deserialize)]
struct WireCategory {
	#[serde(default)]
	id: Option<String>,
}

/// Decodes a response body into matches over `text`, sorted by offset.
///
/// A body that is not JSON, or whose matches lack offsets, is an error.
/// Individual matches whose span does not fit `text` are dropped.
pub fn decode_response(text: &str, body: &str) -> Result<Vec<Match>> {
	let response: WireResponse = serde_json::from_str(body)?;
	let rope = Rope::from_str(text);
	let total_cu = rope.len_utf16_cu();

	let mut matches: Vec<Match> = response
		.matches
		.into_iter()
		.filter_map(|wire| {
			let end_cu = wire.offset.checked_add(wire.length)?;
			if wire.length == 0 || end_cu > total_cu {
				debug!(offset = wire.offset, length = wire.length, total_cu, "checker.wire.span_out_of_range");
				return None;
			}
			let offset = rope.utf16_cu_to_char(wire.offset);
			let end = rope.utf16_cu_to_char(end_cu);
			if end <= offset {
				return None;
			}

			let (rule_id, category_id) = match wire.rule {
				Some(rule) => (rule.id, rule.category.and_then(|c| c.id)),
				None => (String::new(), None),
			};

			Some(Match {
				offset,
				length: end - offset,
				message: wire.message,
				rule_id,
				category: Category::from_checker_id(category_id.as_deref()),
				replacements: wire.replacements.into_iter().map(|r| r.value).collect(),
			})
		})
		.collect();

	matches.sort_by_key(|m| m.offset);
	Ok(matches)
}

#[cfg(test)]
mod tests;
