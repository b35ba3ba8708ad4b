//! Inline text rendering.
//!
//! Each text run is escaped and then wrapped once per decoration, innermost
//! first: color, highlight, bold, italic, link. The link therefore always ends
//! up outermost, and `<strong><em>` nesting is stable for any mark order on
//! input.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::document::{DocNode, Mark, mark_types, node_types};
use crate::structuring::elements::TextRun;

pub const LINE_BREAK: &str = "<br>";

/// Render a list of inline nodes. Non-text inline nodes other than line
/// breaks contribute nothing.
pub fn render_inline(nodes: &[DocNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        if node.is(node_types::HARD_BREAK) {
            out.push_str(LINE_BREAK);
        } else if node.is_text() {
            out.push_str(&render_text(
                node.text.as_deref().unwrap_or_default(),
                &node.marks,
            ));
        }
    }
    out
}

/// Render runs that were lifted out of their source nodes.
pub fn render_runs(runs: &[TextRun]) -> String {
    runs.iter().map(|r| render_text(&r.text, &r.marks)).collect()
}

/// Render one text leaf with its decorations.
pub fn render_text(text: &str, marks: &[Mark]) -> String {
    let mut out = encode_text(text).into_owned();

    if let Some(color) = color_of(marks) {
        out = format!(
            r#"<span style="color: {}">{out}</span>"#,
            encode_double_quoted_attribute(color)
        );
    }
    if let Some(mark) = find(marks, mark_types::HIGHLIGHT) {
        out = match mark.attr_str("color").filter(|c| !c.is_empty()) {
            Some(color) => format!(
                r#"<mark style="background-color: {}">{out}</mark>"#,
                encode_double_quoted_attribute(color)
            ),
            None => format!("<mark>{out}</mark>"),
        };
    }
    if find(marks, mark_types::BOLD).is_some() {
        out = format!("<strong>{out}</strong>");
    }
    if find(marks, mark_types::ITALIC).is_some() {
        out = format!("<em>{out}</em>");
    }
    if let Some(link) = find(marks, mark_types::LINK) {
        let href = encode_double_quoted_attribute(link.attr_str("href").unwrap_or_default());
        out = match link.attr_str("target").filter(|t| !t.is_empty()) {
            Some(target) => format!(
                r#"<a href="{href}" target="{}">{out}</a>"#,
                encode_double_quoted_attribute(target)
            ),
            None => format!(r#"<a href="{href}">{out}</a>"#),
        };
    }
    out
}

fn find<'a>(marks: &'a [Mark], kind: &str) -> Option<&'a Mark> {
    marks.iter().find(|m| m.kind == kind)
}

fn color_of(marks: &[Mark]) -> Option<&str> {
    marks
        .iter()
        .filter(|m| m.kind == mark_types::COLOR || m.kind == mark_types::TEXT_STYLE)
        .find_map(|m| m.attr_str("color"))
        .filter(|c| !c.is_empty())
}
