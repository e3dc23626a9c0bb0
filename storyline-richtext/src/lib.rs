//! Rich-text documents for Storyline.
//!
//! The CMS delivers long-form text as a nested document:
//!
//! ```json
//! {"type": "doc", "content": [
//!     {"type": "paragraph", "content": [
//!         {"type": "text", "text": "Hello", "marks": [{"type": "bold"}]}
//!     ]}
//! ]}
//! ```
//!
//! This crate turns that shape into a typed [`RichTextNode`] tree:
//! - [`parse`] / [`parse_document`]: pure recursive descent over a `DynamicValue`
//! - [`RichTextExt`]: `as_rich_text_document()` on any `DynamicValue`
//! - [`to_plain_text`]: flattens a parsed tree for text-only front ends
//!
//! Unknown node kinds and unknown marks are dropped, never reported as errors.

mod node;
mod parser;
mod plain;

pub use node::{Mark, NodeKind, RichTextNode};
pub use parser::{RichTextExt, parse, parse_document, parse_node};
pub use plain::to_plain_text;
