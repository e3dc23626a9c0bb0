use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use storyline_types::DynamicValue;

/// The closed set of node kinds understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Paragraph,
    Text,
    Heading,
    OrderedList,
    BulletList,
    ListItem,
    HardBreak,
    HorizontalRule,
}

impl NodeKind {
    /// Maps a wire `"type"` string to a kind.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "paragraph" => Some(Self::Paragraph),
            "text" => Some(Self::Text),
            "heading" => Some(Self::Heading),
            "ordered_list" => Some(Self::OrderedList),
            "bullet_list" => Some(Self::BulletList),
            "list_item" => Some(Self::ListItem),
            "hard_break" => Some(Self::HardBreak),
            "horizontal_rule" => Some(Self::HorizontalRule),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Text => "text",
            Self::Heading => "heading",
            Self::OrderedList => "ordered_list",
            Self::BulletList => "bullet_list",
            Self::ListItem => "list_item",
            Self::HardBreak => "hard_break",
            Self::HorizontalRule => "horizontal_rule",
        }
    }

    /// Container kinds are the only ones that carry children.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Self::Paragraph | Self::Heading | Self::OrderedList | Self::BulletList | Self::ListItem
        )
    }
}

/// Inline formatting applied to a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bold,
    Italic,
    Strike,
    Underline,
    Code,
}

impl Mark {
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Self::Bold),
            "italic" => Some(Self::Italic),
            "strike" => Some(Self::Strike),
            "underline" => Some(Self::Underline),
            "code" => Some(Self::Code),
            _ => None,
        }
    }
}

/// One node of a parsed rich-text document.
///
/// `text` is only ever set on [`NodeKind::Text`] nodes and `children` only on
/// container kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(rename = "content", skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RichTextNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<BTreeSet<Mark>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<BTreeMap<String, DynamicValue>>,
}

impl RichTextNode {
    /// Creates a bare node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: None,
            text: None,
            marks: None,
            attrs: None,
        }
    }

    /// Creates an unmarked text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(NodeKind::Text)
        }
    }

    #[must_use]
    pub fn has_mark(&self, mark: Mark) -> bool {
        self.marks.as_ref().is_some_and(|marks| marks.contains(&mark))
    }

    /// Returns an attribute by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&DynamicValue> {
        self.attrs.as_ref().and_then(|attrs| attrs.get(name))
    }

    /// Heading level from `attrs.level`, for heading nodes.
    #[must_use]
    pub fn heading_level(&self) -> Option<i64> {
        if self.kind != NodeKind::Heading {
            return None;
        }
        self.attr("level").and_then(DynamicValue::as_int)
    }

    /// Children as a slice; empty for leaf kinds.
    #[must_use]
    pub fn children(&self) -> &[RichTextNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}
