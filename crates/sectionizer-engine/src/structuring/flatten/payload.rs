//! Embedded payloads: code block data, form data, and card/document
//! collections. Malformed payloads fall back to the raw value.

use serde_json::{Map, Value};

use crate::document::DocNode;

/// Best-effort structured parse of code block text.
pub fn parse_structured(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

/// Form data: textual payloads are parsed when possible, anything else is
/// passed through unchanged.
pub fn form_data(node: &DocNode) -> Value {
    match node.attrs.get("data") {
        Some(Value::String(raw)) => {
            parse_structured(raw).unwrap_or_else(|| Value::String(raw.clone()))
        }
        Some(other) => other.clone(),
        None => Value::Null,
    }
}

/// Visible children of the expected type, projected to their attributes.
pub fn project_children(node: &DocNode, child_type: &str) -> Vec<Map<String, Value>> {
    node.content
        .iter()
        .filter(|child| child.is(child_type) && !child.attrs.is_empty())
        .filter(|child| !child.attr_bool("hidden"))
        .map(|child| {
            child
                .attrs
                .iter()
                .filter(|(key, value)| key.as_str() != "hidden" && !value.is_null())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .collect()
}
