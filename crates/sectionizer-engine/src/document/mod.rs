//! # Input Document Model
//!
//! The externally authored rich-text tree, exactly as it arrives over the wire.
//!
//! Nodes are loosely typed records keyed by a `type` string. Every field is
//! optional on input so that partially filled or unfamiliar nodes still
//! deserialize; interpretation of the `type` string happens once, in the
//! flattener, and never again downstream.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Node type strings understood by the flattener.
pub mod node_types {
    pub const DOC: &str = "doc";
    pub const HEADING: &str = "heading";
    pub const PARAGRAPH: &str = "paragraph";
    pub const TEXT: &str = "text";
    pub const HARD_BREAK: &str = "hardBreak";
    pub const IMAGE: &str = "image";
    pub const VIDEO: &str = "video";
    pub const BULLET_LIST: &str = "bulletList";
    pub const ORDERED_LIST: &str = "orderedList";
    pub const LIST_ITEM: &str = "listItem";
    pub const HORIZONTAL_RULE: &str = "horizontalRule";
    pub const BLOCKQUOTE: &str = "blockquote";
    pub const CODE_BLOCK: &str = "codeBlock";
    pub const CARD_GROUP: &str = "card-group";
    pub const CARD: &str = "card";
    pub const DOCUMENT_GROUP: &str = "document-group";
    pub const DOCUMENT: &str = "document";
    pub const FORM_BLOCK: &str = "form-block";
}

/// Inline decoration type strings.
pub mod mark_types {
    pub const BOLD: &str = "bold";
    pub const ITALIC: &str = "italic";
    pub const LINK: &str = "link";
    pub const COLOR: &str = "color";
    pub const TEXT_STYLE: &str = "textStyle";
    pub const HIGHLIGHT: &str = "highlight";
    pub const BUTTON: &str = "button";
}

/// One node of the input tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocNode {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub attrs: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub content: Vec<DocNode>,
    #[serde(deserialize_with = "null_as_default")]
    pub marks: Vec<Mark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An inline decoration attached to a text leaf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mark {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub attrs: Map<String, Value>,
}

/// Explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl DocNode {
    /// Parse a node tree from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    pub fn is_text(&self) -> bool {
        self.is(node_types::TEXT)
    }

    /// String attribute, or `None` when absent, null, or not a string.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        attr_str(&self.attrs, name)
    }

    /// Owned string attribute, defaulting to empty.
    pub fn attr_string(&self, name: &str) -> String {
        self.attr_str(name).unwrap_or_default().to_string()
    }

    /// Truthiness of an attribute: `true`, non-zero numbers and non-empty
    /// strings count as set.
    pub fn attr_bool(&self, name: &str) -> bool {
        match self.attrs.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty() && s != "false",
            _ => false,
        }
    }

    /// Unsigned integer attribute; numeric strings are accepted.
    pub fn attr_u64(&self, name: &str) -> Option<u64> {
        match self.attrs.get(name)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The first decoration of the given type on this node.
    pub fn mark(&self, kind: &str) -> Option<&Mark> {
        self.marks.iter().find(|m| m.kind == kind)
    }

    pub fn has_mark(&self, kind: &str) -> bool {
        self.mark(kind).is_some()
    }

    /// Whether this is a text leaf carrying nothing but whitespace.
    pub fn is_blank_text(&self) -> bool {
        self.is_text() && self.text.as_deref().unwrap_or_default().trim().is_empty()
    }

    /// Concatenation of every text leaf below this node, undecorated.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

impl Mark {
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        attr_str(&self.attrs, name)
    }
}

fn attr_str<'a>(attrs: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    attrs.get(name).and_then(Value::as_str)
}

fn collect_text(node: &DocNode, out: &mut String) {
    if let Some(text) = &node.text {
        out.push_str(text);
    }
    for child in &node.content {
        collect_text(child, out);
    }
}
