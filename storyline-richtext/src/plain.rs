//! Plain-text flattening of a parsed document.

use crate::{NodeKind, RichTextNode};
use storyline_types::DynamicValue;

/// Renders nodes as plain text.
///
/// Paragraphs and headings end with a newline, ordered list items are
/// numbered from `attrs.order` (default 1), bullet items are prefixed with
/// `- ` and horizontal rules become `---`.
#[must_use]
pub fn to_plain_text(nodes: &[RichTextNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        render(node, &mut out);
    }
    out
}

fn render(node: &RichTextNode, out: &mut String) {
    match node.kind {
        NodeKind::Text => out.push_str(node.text.as_deref().unwrap_or_default()),
        NodeKind::HardBreak => out.push('\n'),
        NodeKind::HorizontalRule => out.push_str("---\n"),
        NodeKind::Paragraph | NodeKind::Heading => {
            for child in node.children() {
                render(child, out);
            }
            out.push('\n');
        }
        NodeKind::ListItem => {
            for child in node.children() {
                render(child, out);
            }
        }
        NodeKind::OrderedList => {
            let start = node
                .attr("order")
                .and_then(DynamicValue::as_int)
                .unwrap_or(1);
            for (offset, item) in node.children().iter().enumerate() {
                let marker = format!("{}. ", start.saturating_add(offset as i64));
                push_item(&marker, item, out);
            }
        }
        NodeKind::BulletList => {
            for item in node.children() {
                push_item("- ", item, out);
            }
        }
    }
}

/// Writes one list item, indenting continuation lines under the marker.
fn push_item(marker: &str, item: &RichTextNode, out: &mut String) {
    let mut body = String::new();
    render(item, &mut body);
    let indent = " ".repeat(marker.len());

    for (i, line) in body.trim_end().lines().enumerate() {
        if i == 0 {
            out.push_str(marker);
        } else {
            out.push_str(&indent);
        }
        out.push_str(line);
        out.push('\n');
    }
}
