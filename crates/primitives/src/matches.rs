use serde::{Deserialize, Serialize};

/// A position in checked text, measured in characters (not bytes).
pub type CharIdx = usize;

/// A length in checked text, measured in characters (not bytes).
pub type CharLen = usize;

/// Coarse issue class used for labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Spelling,
	Grammar,
	Style,
}

impl Category {
	/// Derives the class from a checker category identifier.
	///
	/// Typo and spelling categories map to [`Category::Spelling`]; style,
	/// redundancy and wordiness map to [`Category::Style`]; everything else,
	/// including a missing identifier, is [`Category::Grammar`].
	pub fn from_checker_id(id: Option<&str>) -> Self {
		let id = id.unwrap_or_default().to_ascii_uppercase();
		if id.contains("TYPO") || id.contains("SPELL") {
			Self::Spelling
		} else if ["STYLE", "REDUNDANCY", "WORDINESS"].iter().any(|k| id.contains(k)) {
			Self::Style
		} else {
			Self::Grammar
		}
	}

	/// Upper-case label shown in the panel header and manual report.
	pub fn label(self) -> &'static str {
		match self {
			Self::Spelling => "SPELLING",
			Self::Grammar => "GRAMMAR",
			Self::Style => "STYLE",
		}
	}

	/// Lower-case identifier used as a CSS class suffix.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Spelling => "spelling",
			Self::Grammar => "grammar",
			Self::Style => "style",
		}
	}
}

/// A single flagged span of checked text.
///
/// `offset` and `length` are char indices into the text the match was produced
/// for; `offset + length` never exceeds that text's char length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
	pub offset: CharIdx,
	pub length: CharLen,
	pub message: String,
	pub rule_id: String,
	pub category: Category,
	/// Candidate fixes, best first.
	pub replacements: Vec<String>,
}

impl Match {
	/// Exclusive end of the flagged span.
	pub fn end(&self) -> CharIdx {
		self.offset + self.length
	}

	/// Returns true if `offset..end` lies within a text of `len` chars.
	pub fn fits(&self, len: CharLen) -> bool {
		self.length > 0 && self.end() <= len
	}

	/// Returns the flagged substring of `text`, or an empty string when the
	/// span no longer fits.
	pub fn excerpt(&self, text: &str) -> String {
		text.chars().skip(self.offset).take(self.length).collect()
	}
}

#[cfg(test)]
mod tests;
