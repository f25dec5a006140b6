use super::{Category, Match};

fn sample(offset: usize, length: usize) -> Match {
	Match {
		offset,
		length,
		message: "Possible spelling mistake found.".to_string(),
		rule_id: "MORFOLOGIK_RULE_ES".to_string(),
		category: Category::Spelling,
		replacements: vec!["The".to_string()],
	}
}

#[test]
fn category_from_checker_id() {
	assert_eq!(Category::from_checker_id(Some("TYPOS")), Category::Spelling);
	assert_eq!(Category::from_checker_id(Some("misspelling")), Category::Spelling);
	assert_eq!(Category::from_checker_id(Some("STYLE")), Category::Style);
	assert_eq!(Category::from_checker_id(Some("REDUNDANCY")), Category::Style);
	assert_eq!(Category::from_checker_id(Some("WORDINESS")), Category::Style);
	assert_eq!(Category::from_checker_id(Some("GRAMMAR")), Category::Grammar);
	assert_eq!(Category::from_checker_id(Some("PUNCTUATION")), Category::Grammar);
	assert_eq!(Category::from_checker_id(None), Category::Grammar);
}

#[test]
fn excerpt_counts_chars_not_bytes() {
	let m = sample(3, 4);
	assert_eq!(m.excerpt("Él está aquí"), "está");
}

#[test]
fn fits_rejects_empty_and_overflowing_spans() {
	assert!(sample(0, 3).fits(3));
	assert!(!sample(1, 3).fits(3));
	assert!(!sample(0, 0).fits(3));
}

#[test]
fn serializes_category_lowercase() {
	let json = serde_json::to_value(sample(0, 3)).expect("serialize");
	assert_eq!(json["category"], "spelling");
	assert_eq!(json["rule_id"], "MORFOLOGIK_RULE_ES");
}
