use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::BTreeSet;
use storyline_richtext::{Mark, NodeKind, RichTextExt, RichTextNode, parse, parse_document};
use storyline_types::DynamicValue;

fn value(json: serde_json::Value) -> DynamicValue {
    DynamicValue::decode(&json).unwrap()
}

fn nodes(json: serde_json::Value) -> Vec<DynamicValue> {
    value(json).as_array().unwrap().to_vec()
}

// ── Single nodes ─────────────────────────────────────────────────

#[test]
fn bold_text_node() {
    let parsed = parse(&nodes(json!([
        {"type": "text", "text": "hi", "marks": [{"type": "bold"}]}
    ])));

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].kind, NodeKind::Text);
    assert_eq!(parsed[0].text.as_deref(), Some("hi"));
    assert_eq!(parsed[0].marks, Some(BTreeSet::from([Mark::Bold])));
}

#[test]
fn unknown_kind_is_omitted() {
    let parsed = parse(&nodes(json!([
        {"type": "paragraph"},
        {"type": "unknown_kind", "text": "x"},
        {"type": "hard_break"}
    ])));

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].kind, NodeKind::Paragraph);
    assert_eq!(parsed[1].kind, NodeKind::HardBreak);
}

#[test]
fn non_object_elements_are_omitted() {
    let parsed = parse(&nodes(json!(["text", 3, null, {"type": "horizontal_rule"}])));
    assert_eq!(parsed, vec![RichTextNode::new(NodeKind::HorizontalRule)]);
}

#[test]
fn element_without_type_is_omitted() {
    let parsed = parse(&nodes(json!([{"text": "orphan"}])));
    assert!(parsed.is_empty());
}

#[test]
fn unknown_marks_are_dropped_and_duplicates_collapse() {
    let parsed = parse(&nodes(json!([{
        "type": "text",
        "text": "x",
        "marks": [{"type": "bold"}, {"type": "sparkle"}, {"type": "bold"}, {"type": "italic"}, "bad"]
    }])));

    assert_eq!(
        parsed[0].marks,
        Some(BTreeSet::from([Mark::Bold, Mark::Italic]))
    );
}

#[test]
fn attrs_are_copied_verbatim() {
    let parsed = parse(&nodes(json!([{
        "type": "heading",
        "attrs": {"level": 2, "anchor": null},
        "content": [{"type": "text", "text": "Title"}]
    }])));

    let heading = &parsed[0];
    assert_eq!(heading.heading_level(), Some(2));
    assert!(heading.attr("anchor").unwrap().is_null());
    assert_eq!(heading.children().len(), 1);
}

#[test]
fn text_only_kept_on_text_nodes() {
    let parsed = parse(&nodes(json!([{"type": "paragraph", "text": "stray"}])));
    assert_eq!(parsed[0].text, None);
}

#[test]
fn children_only_kept_on_container_nodes() {
    let parsed = parse(&nodes(json!([
        {"type": "text", "text": "x", "content": [{"type": "text", "text": "y"}]},
        {"type": "paragraph"}
    ])));
    assert_eq!(parsed[0].children, None);
    assert_eq!(parsed[1].children, None);
}

#[test]
fn non_array_content_leaves_children_absent() {
    let parsed = parse(&nodes(json!([{"type": "paragraph", "content": "oops"}])));
    assert_eq!(parsed[0].children, None);
}

// ── Nested documents ─────────────────────────────────────────────

#[test]
fn nested_lists_parse_recursively() {
    let parsed = parse(&nodes(json!([{
        "type": "bullet_list",
        "content": [
            {"type": "list_item", "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "one"}]},
                {"type": "ordered_list", "content": [
                    {"type": "list_item", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "inner"}]}
                    ]}
                ]}
            ]},
            {"type": "mystery"}
        ]
    }])));

    let list = &parsed[0];
    assert_eq!(list.kind, NodeKind::BulletList);
    assert_eq!(list.children().len(), 1);

    let item = &list.children()[0];
    assert_eq!(item.children()[1].kind, NodeKind::OrderedList);
    let inner_text = &item.children()[1].children()[0].children()[0].children()[0];
    assert_eq!(inner_text.text.as_deref(), Some("inner"));
}

#[test]
fn deep_nesting_is_handled() {
    let mut doc = json!({"type": "text", "text": "leaf"});
    for _ in 0..60 {
        doc = json!({"type": "list_item", "content": [doc]});
    }
    let parsed = parse(&nodes(json!([doc])));

    let mut depth = 0;
    let mut node = &parsed[0];
    while let Some(child) = node.children().first() {
        node = child;
        depth += 1;
    }
    assert_eq!(depth, 60);
    assert_eq!(node.text.as_deref(), Some("leaf"));
}

// ── Document envelope ────────────────────────────────────────────

#[test]
fn as_rich_text_document_accepts_doc_envelope() {
    let doc = value(json!({
        "type": "doc",
        "content": [{"type": "paragraph", "content": [{"type": "text", "text": "hello"}]}]
    }));
    let parsed = doc.as_rich_text_document().unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].children()[0].text.as_deref(), Some("hello"));
}

#[test]
fn as_rich_text_document_rejects_other_shapes() {
    assert!(value(json!({"type": "paragraph", "content": []}))
        .as_rich_text_document()
        .is_none());
    assert!(value(json!({"content": []})).as_rich_text_document().is_none());
    assert!(value(json!({"type": "doc"})).as_rich_text_document().is_none());
    assert!(value(json!("doc")).as_rich_text_document().is_none());
}

#[test]
fn parse_document_of_empty_doc_is_empty() {
    let parsed = parse_document(&value(json!({"type": "doc", "content": []}))).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn serializes_back_to_wire_names() {
    let parsed = parse(&nodes(json!([
        {"type": "ordered_list", "content": [{"type": "list_item"}]}
    ])));
    assert_eq!(
        serde_json::to_value(&parsed).unwrap(),
        json!([{"type": "ordered_list", "content": [{"type": "list_item"}]}])
    );
}
