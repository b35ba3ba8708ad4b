//! # Sequence Flattening
//!
//! Depth-first walk of the input tree producing an ordered `Vec<Element>`.
//!
//! ## Modules
//!
//! - **`paragraph`**: single-child and styled-link classification of paragraphs
//! - **`render`**: inline text rendering with fixed decoration precedence
//! - **`payload`**: code block, form and card/document payload handling
//!
//! ## Key Invariants
//!
//! - Document order is preserved
//! - List items and blockquote contents stay nested as sub-sequences
//! - Flattening is total: unknown node types become `Element::Generic`
//! - Nesting deeper than `max_depth` is truncated, never an error

pub mod paragraph;
pub mod payload;
pub mod render;

use crate::document::{DocNode, node_types};
use crate::structuring::StructureOptions;
use crate::structuring::elements::{Element, List, ListItem};

use paragraph::{classify_paragraph, media, media_element};
use payload::{form_data, parse_structured, project_children};
use render::render_inline;

/// Flatten one document tree into a Sequence.
pub fn flatten(document: &DocNode, options: &StructureOptions) -> Vec<Element> {
    let flattener = Flattener { options };
    if document.is(node_types::DOC) {
        flattener.sequence(&document.content, 0)
    } else {
        flattener.sequence(std::slice::from_ref(document), 0)
    }
}

struct Flattener<'o> {
    options: &'o StructureOptions,
}

impl Flattener<'_> {
    fn sequence(&self, nodes: &[DocNode], depth: usize) -> Vec<Element> {
        let mut out = Vec::new();
        for node in nodes {
            self.push(node, depth, &mut out);
        }
        out
    }

    /// Append the element(s) a node flattens to. Paragraphs may yield none
    /// or several.
    fn push(&self, node: &DocNode, depth: usize, out: &mut Vec<Element>) {
        let element = match node.kind.as_str() {
            node_types::PARAGRAPH => {
                out.extend(classify_paragraph(node));
                return;
            }
            node_types::HEADING => Element::Heading {
                level: heading_level(node),
                text: render_inline(&node.content),
                alignment: node
                    .attr_str("textAlign")
                    .filter(|a| !a.is_empty())
                    .map(str::to_string),
            },
            node_types::IMAGE => media_element(node),
            node_types::VIDEO => Element::Video(media(node, "video")),
            node_types::BULLET_LIST | node_types::ORDERED_LIST => {
                Element::List(self.list(node, depth))
            }
            node_types::HORIZONTAL_RULE => Element::Divider,
            node_types::BLOCKQUOTE => Element::Blockquote {
                content: self.nested(&node.content, depth),
            },
            node_types::CODE_BLOCK => {
                let text = node.plain_text();
                let parsed = if self.options.parse_code_blocks {
                    parse_structured(&text)
                } else {
                    None
                };
                Element::CodeBlock { text, parsed }
            }
            node_types::CARD_GROUP => Element::CardGroup {
                cards: project_children(node, node_types::CARD),
            },
            node_types::DOCUMENT_GROUP => Element::DocumentGroup {
                documents: project_children(node, node_types::DOCUMENT),
            },
            node_types::FORM_BLOCK => Element::Form {
                data: form_data(node),
            },
            _ => Element::Generic {
                node_type: node.kind.clone(),
                text: render_inline(&node.content),
            },
        };
        out.push(element);
    }

    fn list(&self, node: &DocNode, depth: usize) -> List {
        let items = if depth >= self.options.max_depth {
            log::debug!(
                "list nesting exceeds {} levels, truncating",
                self.options.max_depth
            );
            Vec::new()
        } else {
            node.content
                .iter()
                .filter(|child| child.is(node_types::LIST_ITEM))
                .map(|item| self.list_item(item, depth + 1))
                .collect()
        };
        List {
            ordered: node.is(node_types::ORDERED_LIST),
            items,
        }
    }

    fn list_item(&self, item: &DocNode, depth: usize) -> ListItem {
        let mut content = Vec::new();
        let mut lists = Vec::new();
        for child in &item.content {
            if child.is(node_types::BULLET_LIST) || child.is(node_types::ORDERED_LIST) {
                lists.push(self.list(child, depth));
            } else {
                self.push(child, depth, &mut content);
            }
        }
        ListItem { content, lists }
    }

    fn nested(&self, nodes: &[DocNode], depth: usize) -> Vec<Element> {
        if depth >= self.options.max_depth {
            log::debug!(
                "blockquote nesting exceeds {} levels, truncating",
                self.options.max_depth
            );
            return Vec::new();
        }
        self.sequence(nodes, depth + 1)
    }
}

fn heading_level(node: &DocNode) -> u8 {
    node.attr_u64("level")
        .map(|l| l.clamp(1, u8::MAX as u64) as u8)
        .unwrap_or(1)
}
