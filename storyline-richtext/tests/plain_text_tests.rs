use pretty_assertions::assert_eq;
use serde_json::json;
use storyline_richtext::{RichTextExt, to_plain_text};
use storyline_types::DynamicValue;

fn render(doc: serde_json::Value) -> String {
    let value = DynamicValue::decode(&doc).unwrap();
    to_plain_text(&value.as_rich_text_document().unwrap())
}

#[test]
fn paragraph_joins_inline_text() {
    let text = render(json!({"type": "doc", "content": [
        {"type": "paragraph", "content": [
            {"type": "text", "text": "Hello, "},
            {"type": "text", "text": "world", "marks": [{"type": "bold"}]}
        ]}
    ]}));
    assert_eq!(text, "Hello, world\n");
}

#[test]
fn hard_break_and_rule() {
    let text = render(json!({"type": "doc", "content": [
        {"type": "paragraph", "content": [
            {"type": "text", "text": "a"},
            {"type": "hard_break"},
            {"type": "text", "text": "b"}
        ]},
        {"type": "horizontal_rule"}
    ]}));
    assert_eq!(text, "a\nb\n---\n");
}

#[test]
fn ordered_list_numbers_from_order_attr() {
    let text = render(json!({"type": "doc", "content": [
        {"type": "ordered_list", "attrs": {"order": 3}, "content": [
            {"type": "list_item", "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "three"}]}
            ]},
            {"type": "list_item", "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "four"}]}
            ]}
        ]}
    ]}));
    assert_eq!(text, "3. three\n4. four\n");
}

#[test]
fn ordered_list_numbering_saturates_at_max() {
    let item = json!({"type": "list_item", "content": [
        {"type": "paragraph", "content": [{"type": "text", "text": "x"}]}
    ]});
    let text = render(json!({"type": "doc", "content": [
        {"type": "ordered_list", "attrs": {"order": i64::MAX}, "content": [item.clone(), item]}
    ]}));
    let marker = format!("{}. x\n", i64::MAX);
    assert_eq!(text, marker.repeat(2));
}

#[test]
fn nested_bullets_are_indented() {
    let text = render(json!({"type": "doc", "content": [
        {"type": "bullet_list", "content": [
            {"type": "list_item", "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "outer"}]},
                {"type": "bullet_list", "content": [
                    {"type": "list_item", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "inner"}]}
                    ]}
                ]}
            ]}
        ]}
    ]}));
    assert_eq!(text, "- outer\n  - inner\n");
}

#[test]
fn empty_document_renders_empty_string() {
    assert_eq!(render(json!({"type": "doc", "content": []})), "");
}
