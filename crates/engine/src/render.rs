//! HTML markup for hosts that mount overlays as DOM fragments.
//!
//! Every piece of text that came from the checker or the field is escaped.
//! Interactive elements carry a `data-action` attribute; suggestion buttons
//! also carry `data-suggestion`, the index a host passes back in
//! [`PanelAction::Accept`](crate::overlay::PanelAction::Accept).

use std::fmt::Write as _;

use crate::overlay::{BadgeStatus, BadgeView, PanelView};

/// Escapes text for use in element content and double- or single-quoted
/// attribute values.
pub fn escape_html(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	escape_html_into(&mut out, s);
	out
}

fn escape_html_into(out: &mut String, s: &str) {
	for c in s.chars() {
		match c {
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'&' => out.push_str("&amp;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
}

pub fn badge_html(view: &BadgeView) -> String {
	let class = match view.status {
		BadgeStatus::Loading => "gramm-badge gramm-checking",
		BadgeStatus::Clean => "gramm-badge",
		BadgeStatus::Flagged(_) => "gramm-badge gramm-has-issues",
	};
	let mut out = String::new();
	let _ = write!(
		out,
		r#"<div class="{class}" style="top:{}px;left:{}px""#,
		view.position.y, view.position.x
	);
	if let Some(title) = &view.title {
		out.push_str(r#" title=""#);
		escape_html_into(&mut out, title);
		out.push('"');
	}
	if view.status.is_clickable() {
		out.push_str(r#" data-action="open""#);
	}
	out.push_str("></div>");
	out
}

pub fn panel_html(view: &PanelView) -> String {
	let mut out = String::new();
	let _ = write!(
		out,
		r#"<div class="gramm-panel" style="top:{}px;left:{}px">"#,
		view.position.y, view.position.x
	);

	let _ = write!(
		out,
		r#"<div class="gramm-panel-header"><span class="gramm-category gramm-cat-{}">[{}]</span><span class="gramm-counter">{}</span><button class="gramm-close" data-action="close">x</button></div>"#,
		view.category.as_str(),
		view.category.label(),
		view.counter()
	);

	out.push_str(r#"<div class="gramm-panel-body"><p class="gramm-message">"#);
	escape_html_into(&mut out, &view.message);
	out.push_str(r#"</p><span class="gramm-excerpt">"#);
	escape_html_into(&mut out, &view.excerpt);
	out.push_str(r#"</span><div class="gramm-suggestions">"#);
	for (index, suggestion) in view.suggestions.iter().enumerate() {
		let _ = write!(out, r#"<button class="gramm-suggestion" data-action="accept" data-suggestion="{index}">"#);
		escape_html_into(&mut out, suggestion);
		out.push_str("</button>");
	}
	out.push_str("</div></div>");

	out.push_str(r#"<div class="gramm-panel-footer"><span class="gramm-rule">"#);
	escape_html_into(&mut out, &view.rule_id);
	out.push_str("</span><div>");
	if view.has_prev() {
		out.push_str(r#"<button data-action="prev">&lt; prev</button>"#);
	}
	if view.has_next() {
		out.push_str(r#"<button data-action="next">next &gt;</button>"#);
	}
	out.push_str(r#"<button data-action="dismiss-rule" data-rule=""#);
	escape_html_into(&mut out, &view.rule_id);
	out.push_str(r#"">skip</button></div></div></div>"#);
	out
}

#[cfg(test)]
mod tests {
	use gramm_primitives::{Category, FieldId, Point};
	use pretty_assertions::assert_eq;

	use super::*;

	fn panel(index: usize, total: usize) -> PanelView {
		PanelView {
			field: FieldId(1),
			position: Point::new(10.0, 288.0),
			category: Category::Spelling,
			index,
			total,
			excerpt: "<b>Teh</b>".to_string(),
			message: "Possible \"typo\" & more".to_string(),
			suggestions: vec!["The".to_string(), "Tea's".to_string()],
			rule_id: "MORFOLOGIK_RULE_EN_US".to_string(),
		}
	}

	#[test]
	fn escapes_every_special_char() {
		assert_eq!(escape_html(r#"<a href="x">Tom's & co</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; co&lt;/a&gt;");
	}

	#[test]
	fn escape_passes_plain_text() {
		assert_eq!(escape_html("ortografía"), "ortografía");
		assert_eq!(escape_html(""), "");
	}

	#[test]
	fn loading_badge_has_no_title_or_action() {
		let html = badge_html(&BadgeView::new(FieldId(1), BadgeStatus::Loading, Point::new(382.0, 206.0)));
		assert_eq!(html, r#"<div class="gramm-badge gramm-checking" style="top:206px;left:382px"></div>"#);
	}

	#[test]
	fn flagged_badge_is_clickable() {
		let html = badge_html(&BadgeView::new(FieldId(1), BadgeStatus::Flagged(2), Point::new(1.0, 2.0)));
		assert!(html.contains(r#"title="2 issues""#));
		assert!(html.contains(r#"data-action="open""#));
	}

	#[test]
	fn panel_escapes_checker_text() {
		let html = panel_html(&panel(0, 1));
		assert!(html.contains("&lt;b&gt;Teh&lt;/b&gt;"));
		assert!(html.contains("Possible &quot;typo&quot; &amp; more"));
		assert!(html.contains(r#"data-suggestion="1">Tea&#39;s</button>"#));
		assert!(!html.contains("<b>"));
	}

	#[test]
	fn panel_navigation_buttons_follow_position() {
		let first = panel_html(&panel(0, 3));
		assert!(!first.contains(r#"data-action="prev""#));
		assert!(first.contains(r#"data-action="next""#));
		assert!(first.contains("1/3"));

		let last = panel_html(&panel(2, 3));
		assert!(last.contains(r#"data-action="prev""#));
		assert!(!last.contains(r#"data-action="next""#));
	}
}
