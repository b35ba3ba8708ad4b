//! Paragraph classification.
//!
//! Authors express standalone images, icons, videos, buttons and links as a
//! paragraph wrapping a single child. The first matching rule wins:
//!
//! 1. single image with role `image` or `banner` (or no role) → image
//! 2. single image with role `icon` → icon
//! 3. single image with role `video` → video
//! 4. single text run with a button decoration → button
//! 5. single text run with a link decoration → link
//!
//! Two or more non-icon children that all share one link (same href) form a
//! styled link. Otherwise any image children are emitted as media elements,
//! in order, followed by the paragraph text when it is not blank.

use crate::document::{DocNode, mark_types, node_types};
use crate::structuring::elements::{Element, Media, TextRun};

use super::render::{render_inline, render_runs};

/// Classify a paragraph node into zero or more elements.
pub fn classify_paragraph(node: &DocNode) -> Vec<Element> {
    let eligible: Vec<&DocNode> = node.content.iter().filter(|c| !c.is_blank_text()).collect();

    if let [only] = eligible.as_slice()
        && let Some(element) = classify_single(only)
    {
        return vec![element];
    }

    if let Some(element) = styled_link(&eligible) {
        return vec![element];
    }

    let mut elements: Vec<Element> = eligible
        .iter()
        .filter(|c| c.is(node_types::IMAGE))
        .map(|c| media_element(c))
        .collect();
    let text = render_inline(&node.content);
    if !text.trim().is_empty() {
        elements.push(Element::Paragraph { text });
    }
    elements
}

/// Image-like node to element, by role.
pub fn media_element(node: &DocNode) -> Element {
    let info = media(node, "image");
    match info.role.as_str() {
        "icon" => Element::Icon(info),
        "video" => Element::Video(info),
        _ => Element::Image(info),
    }
}

/// Media fields of an image-like node.
pub fn media(node: &DocNode, default_role: &str) -> Media {
    Media {
        url: node.attr_string("src"),
        alt: node.attr_string("alt"),
        caption: node.attr_string("caption"),
        role: node
            .attr_str("role")
            .filter(|r| !r.is_empty())
            .unwrap_or(default_role)
            .to_string(),
    }
}

fn classify_single(child: &DocNode) -> Option<Element> {
    if child.is(node_types::IMAGE) {
        return Some(media_element(child));
    }
    if !child.is_text() {
        return None;
    }
    if let Some(button) = child.mark(mark_types::BUTTON) {
        return Some(Element::Button {
            label: render_runs(&[delinked(child)]),
            attrs: button.attrs.clone(),
        });
    }
    let link = child.mark(mark_types::LINK)?;
    Some(Element::Link {
        href: link.attr_str("href").unwrap_or_default().to_string(),
        label: render_runs(&[delinked(child)]),
        target: link.attr_str("target").map(str::to_string),
    })
}

fn styled_link(eligible: &[&DocNode]) -> Option<Element> {
    let (icons, texts): (Vec<&DocNode>, Vec<&DocNode>) = eligible
        .iter()
        .copied()
        .partition(|c| c.is(node_types::IMAGE) && c.attr_str("role") == Some("icon"));

    if texts.len() < 2 || !texts.iter().all(|c| c.is_text()) {
        return None;
    }

    let first = texts[0].mark(mark_types::LINK)?;
    let href = first.attr_str("href")?;
    let same_link = texts[1..].iter().all(|c| {
        c.mark(mark_types::LINK)
            .is_some_and(|m| m.attr_str("href") == Some(href))
    });
    if !same_link {
        return None;
    }

    Some(Element::StyledLink {
        href: href.to_string(),
        target: first.attr_str("target").map(str::to_string),
        runs: texts.iter().map(|c| delinked(c)).collect(),
        icons: icons.iter().map(|c| media(c, "icon")).collect(),
    })
}

/// The run with link and button decorations removed, other emphasis kept.
fn delinked(node: &DocNode) -> TextRun {
    TextRun {
        text: node.text.clone().unwrap_or_default(),
        marks: node
            .marks
            .iter()
            .filter(|m| m.kind != mark_types::LINK && m.kind != mark_types::BUTTON)
            .cloned()
            .collect(),
    }
}
