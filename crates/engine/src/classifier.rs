use gramm_primitives::{ElementTag, FieldNode, InputType};

/// Returns true if `node` is a plain-text surface worth checking.
///
/// Multi-line text areas and single-line inputs of a textual type qualify, as
/// does anything with its editable-content flag set. Password, numeric and
/// non-editable elements do not.
pub fn is_checkable(node: &FieldNode) -> bool {
	match node.tag {
		ElementTag::TextArea => true,
		ElementTag::Input => matches!(
			node.input_type,
			InputType::Unspecified | InputType::Text | InputType::Search | InputType::Email | InputType::Url
		),
		ElementTag::Other => node.content_editable,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn textual_inputs_qualify() {
		for raw in ["", "text", "TEXT", "search", "email", "url"] {
			assert!(is_checkable(&FieldNode::input(InputType::parse(raw))), "type {raw:?}");
		}
	}

	#[test]
	fn non_textual_inputs_are_excluded() {
		for raw in ["password", "number", "checkbox", "date", "tel"] {
			assert!(!is_checkable(&FieldNode::input(InputType::parse(raw))), "type {raw:?}");
		}
	}

	#[test]
	fn textarea_and_content_editable_qualify() {
		assert!(is_checkable(&FieldNode::textarea()));
		assert!(is_checkable(&FieldNode::content_editable()));
		assert!(!is_checkable(&FieldNode::plain()));
	}

	#[test]
	fn input_tag_ignores_content_editable_flag() {
		let mut node = FieldNode::input(InputType::Password);
		node.content_editable = true;
		assert!(!is_checkable(&node));
	}
}
