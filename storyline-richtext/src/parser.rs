//! Recursive descent from `DynamicValue` into `RichTextNode`.

use crate::{Mark, NodeKind, RichTextNode};
use std::collections::BTreeSet;
use storyline_types::DynamicValue;

/// Parses a sequence of node objects.
///
/// Elements that are not objects, or whose `"type"` is not a known kind,
/// are left out of the result.
#[must_use]
pub fn parse(nodes: &[DynamicValue]) -> Vec<RichTextNode> {
    nodes.iter().filter_map(parse_node).collect()
}

/// Parses a full document envelope (`{"type": "doc", "content": [...]}`).
#[must_use]
pub fn parse_document(value: &DynamicValue) -> Option<Vec<RichTextNode>> {
    value.document_content().map(parse)
}

/// Parses a single node object, or returns `None` if it is not one.
#[must_use]
pub fn parse_node(value: &DynamicValue) -> Option<RichTextNode> {
    let fields = value.as_object()?;
    let kind = fields
        .get("type")
        .and_then(DynamicValue::as_str)
        .and_then(NodeKind::from_wire)?;

    let mut node = RichTextNode::new(kind);

    if kind == NodeKind::Text {
        node.text = fields
            .get("text")
            .and_then(DynamicValue::as_str)
            .map(str::to_owned);
    }

    if kind.is_container() {
        node.children = fields
            .get("content")
            .and_then(DynamicValue::as_array)
            .map(parse);
    }

    node.marks = fields
        .get("marks")
        .and_then(DynamicValue::as_array)
        .map(parse_marks);

    node.attrs = fields.get("attrs").and_then(DynamicValue::as_object).cloned();

    Some(node)
}

fn parse_marks(marks: &[DynamicValue]) -> BTreeSet<Mark> {
    marks
        .iter()
        .filter_map(|mark| mark.get("type").and_then(DynamicValue::as_str))
        .filter_map(Mark::from_wire)
        .collect()
}

/// Rich-text accessor for dynamic values.
pub trait RichTextExt {
    /// Parses the value as a rich-text document.
    ///
    /// Returns `None` unless the value is an object with `"type": "doc"` and
    /// an array `"content"`.
    fn as_rich_text_document(&self) -> Option<Vec<RichTextNode>>;
}

impl RichTextExt for DynamicValue {
    fn as_rich_text_document(&self) -> Option<Vec<RichTextNode>> {
        parse_document(self)
    }
}
