use pretty_assertions::assert_eq;

use super::*;
use crate::CheckError;

const TEH_CAT: &str = r#"{
	"software": {"name": "LanguageTool"},
	"matches": [{
		"message": "Possible spelling mistake found.",
		"shortMessage": "Spelling mistake",
		"replacements": [{"value": "The"}, {"value": "Tea"}],
		"offset": 0,
		"length": 3,
		"rule": {"id": "MORFOLOGIK_RULE_EN_US", "issueType": "misspelling", "category": {"id": "TYPOS", "name": "Possible Typo"}}
	}]
}"#;

#[test]
fn decodes_languagetool_match() {
	let matches = decode_response("Teh cat sits.", TEH_CAT).unwrap();
	assert_eq!(
		matches,
		vec![Match {
			offset: 0,
			length: 3,
			message: "Possible spelling mistake found.".to_string(),
			rule_id: "MORFOLOGIK_RULE_EN_US".to_string(),
			category: Category::Spelling,
			replacements: vec!["The".to_string(), "Tea".to_string()],
		}]
	);
}

#[test]
fn missing_matches_key_is_empty_not_malformed() {
	assert!(decode_response("some text", "{}").unwrap().is_empty());
}

#[test]
fn non_json_body_is_decode_error() {
	let err = decode_response("some text", "<html>502 Bad Gateway</html>").unwrap_err();
	assert!(matches!(err, CheckError::Decode(_)));
}

#[test]
fn utf16_offsets_become_char_offsets() {
	// The emoji is two UTF-16 code units but one char.
	let text = "😀 Teh end";
	let body = r#"{"matches":[{"offset":3,"length":3,"message":"m","replacements":[],"rule":{"id":"R","category":{"id":"TYPOS"}}}]}"#;
	let matches = decode_response(text, body).unwrap();
	assert_eq!(matches.len(), 1);
	assert_eq!(matches[0].offset, 2);
	assert_eq!(matches[0].length, 3);
	assert_eq!(matches[0].excerpt(text), "Teh");
}

#[test]
fn out_of_range_and_empty_spans_are_dropped() {
	let body = r#"{"matches":[
		{"offset":0,"length":0,"message":"empty"},
		{"offset":2,"length":40,"message":"overflow"},
		{"offset":1,"length":2,"message":"ok"}
	]}"#;
	let matches = decode_response("abcd", body).unwrap();
	assert_eq!(matches.len(), 1);
	assert_eq!(matches[0].message, "ok");
	assert_eq!(matches[0].rule_id, "");
	assert_eq!(matches[0].category, Category::Grammar);
}

#[test]
fn matches_are_sorted_by_offset() {
	let body = r#"{"matches":[
		{"offset":6,"length":1,"message":"second"},
		{"offset":0,"length":1,"message":"first"}
	]}"#;
	let matches = decode_response("abcdefgh", body).unwrap();
	let messages: Vec<_> = matches.iter().map(|m| m.message.as_str()).collect();
	assert_eq!(messages, ["first", "second"]);
}

#[test]
fn form_body_escapes_text() {
	let request = CheckRequest::new("a&b = c?", "en-US");
	assert_eq!(request.form_body(), "text=a%26b+%3D+c%3F&language=en-US&enabledOnly=false");
}
