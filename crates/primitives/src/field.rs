use std::fmt;

/// Stable handle for a host text field.
///
/// Handles are issued by the host and never dereferenced by the engine, so a
/// detached element is not kept alive by anything keyed on its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u64);

impl fmt::Display for FieldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "field#{}", self.0)
	}
}

/// Element kind as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementTag {
	TextArea,
	Input,
	Other,
}

/// The `type` attribute of a single-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputType {
	/// No `type` attribute, or an empty one.
	Unspecified,
	Text,
	Search,
	Email,
	Url,
	Password,
	Number,
	/// Any other type value, lowercased.
	Other(String),
}

impl InputType {
	/// Parses a raw `type` attribute value, case-insensitively.
	pub fn parse(raw: &str) -> Self {
		let lowered = raw.trim().to_ascii_lowercase();
		match lowered.as_str() {
			"" => Self::Unspecified,
			"text" => Self::Text,
			"search" => Self::Search,
			"email" => Self::Email,
			"url" => Self::Url,
			"password" => Self::Password,
			"number" => Self::Number,
			_ => Self::Other(lowered),
		}
	}
}

/// Snapshot of the attributes the field classifier looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
	pub tag: ElementTag,
	/// Only meaningful for [`ElementTag::Input`].
	pub input_type: InputType,
	/// The element's editable-content flag.
	pub content_editable: bool,
}

impl FieldNode {
	pub fn textarea() -> Self {
		Self {
			tag: ElementTag::TextArea,
			input_type: InputType::Unspecified,
			content_editable: false,
		}
	}

	pub fn input(input_type: InputType) -> Self {
		Self {
			tag: ElementTag::Input,
			input_type,
			content_editable: false,
		}
	}

	pub fn content_editable() -> Self {
		Self {
			tag: ElementTag::Other,
			input_type: InputType::Unspecified,
			content_editable: true,
		}
	}

	pub fn plain() -> Self {
		Self {
			tag: ElementTag::Other,
			input_type: InputType::Unspecified,
			content_editable: false,
		}
	}
}
