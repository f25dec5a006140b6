//! Flat text report for the manual trigger surface.

use std::fmt::Write;

use gramm_primitives::Match;

use crate::CheckError;

/// Renders a check result as plain text.
///
/// Unlike the inline overlay, failures are shown verbatim here.
pub fn render(text: &str, result: &Result<Vec<Match>, CheckError>) -> String {
	let matches = match result {
		Ok(matches) => matches,
		Err(err) => return format!("error: {err}\n"),
	};

	if matches.is_empty() {
		return "ok: no issues found\n".to_string();
	}

	let mut out = String::new();
	for m in matches {
		let _ = writeln!(out, "[{}] offset:{}", m.category.label(), m.offset);
		let _ = writeln!(out, "  {}", m.message);
		let excerpt = m.excerpt(text);
		match m.replacements.first() {
			Some(suggestion) => {
				let _ = writeln!(out, "  {excerpt} -> {suggestion}");
			}
			None => {
				let _ = writeln!(out, "  {excerpt}");
			}
		}
	}
	let _ = writeln!(out, "{} issue{}", matches.len(), if matches.len() == 1 { "" } else { "s" });
	out
}
