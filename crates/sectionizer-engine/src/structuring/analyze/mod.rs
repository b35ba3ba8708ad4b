//! # Group Analysis
//!
//! Turns one raw group into a [`Group`] by walking it left to right in an
//! explicit header/body mode.
//!
//! ## Header mode
//!
//! The walk starts here. A heading followed by a more important heading is a
//! pretitle; an image followed by a heading is the banner; other headings fill
//! title, subtitle and subtitle2 in that order. The title heading fixes
//! `metadata.level` and `header.alignment`. Filling subtitle2, or meeting any
//! other element, switches to body mode for good.
//!
//! ## Body mode
//!
//! Each element is appended to its body collection. Lists and blockquotes are
//! analyzed recursively, starting directly in body mode, and nested as
//! [`Body`] records. Headings overflow into `body.headings`. Dividers and
//! generic elements are dropped.

pub mod types;

pub use types::{Banner, Body, BodyHeading, ButtonRecord, Group, Header, LinkRecord, Metadata};

use serde_json::Value;

use crate::structuring::elements::{Element, ElementKind, List};
use crate::structuring::flatten::render::render_runs;
use crate::structuring::segment::RawGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Header,
    Body,
}

/// Analyze one raw group.
pub fn analyze_group(group: &RawGroup<'_>) -> Group {
    analyze_elements(group.elements)
}

/// Analyze a contiguous run of elements as one group.
pub fn analyze_elements(elements: &[Element]) -> Group {
    let mut analyzer = Analyzer::new(Mode::Header);
    analyzer.walk(elements);
    analyzer.finish(elements)
}

/// Analyze nested content (a list item or blockquote) into a body record.
fn analyze_nested(elements: &[Element]) -> Body {
    let mut analyzer = Analyzer::new(Mode::Body);
    analyzer.walk(elements);
    analyzer.body
}

/// Accumulates one group's analysis. Scoped to a single call.
struct Analyzer {
    mode: Mode,
    header: Header,
    banner: Option<Banner>,
    body: Body,
    level: Option<u8>,
}

impl Analyzer {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            header: Header::default(),
            banner: None,
            body: Body::default(),
            level: None,
        }
    }

    fn walk(&mut self, elements: &[Element]) {
        for (i, element) in elements.iter().enumerate() {
            let next = elements.get(i + 1);
            if self.mode == Mode::Header && self.header_element(element, next) {
                continue;
            }
            self.mode = Mode::Body;
            self.body_element(element);
        }
    }

    /// Try to place an element in the header. `false` means it belongs to
    /// the body.
    fn header_element(&mut self, element: &Element, next: Option<&Element>) -> bool {
        let next_level = next.and_then(Element::heading_level);
        match element {
            Element::Heading {
                level,
                text,
                alignment,
            } => {
                if text.trim().is_empty() {
                    return true;
                }
                if self.header.pretitle.is_empty()
                    && self.header.title.is_empty()
                    && next_level.is_some_and(|n| n < *level)
                {
                    self.header.pretitle = text.clone();
                } else if self.header.title.is_empty() {
                    self.header.title = text.clone();
                    self.header.alignment = alignment.clone();
                    self.level = Some(*level);
                } else if self.header.subtitle.is_empty() {
                    self.header.subtitle = text.clone();
                } else {
                    self.header.subtitle2 = text.clone();
                    self.mode = Mode::Body;
                }
                true
            }
            Element::Image(media)
                if self.banner.is_none()
                    && self.header.pretitle.is_empty()
                    && self.header.title.is_empty()
                    && next_level.is_some() =>
            {
                self.banner = Some(media.clone().into());
                true
            }
            _ => false,
        }
    }

    fn body_element(&mut self, element: &Element) {
        let body = &mut self.body;
        match element {
            Element::Heading { level, text, .. } => {
                if !text.trim().is_empty() {
                    body.headings.push(BodyHeading {
                        level: *level,
                        text: text.clone(),
                    });
                }
            }
            Element::Paragraph { text } => body.paragraphs.push(text.clone()),
            Element::Image(media) => body.imgs.push(media.clone()),
            Element::Video(media) => body.videos.push(media.clone()),
            Element::Icon(media) => body.icons.push(media.clone()),
            Element::Button { label, attrs } => body.buttons.push(ButtonRecord {
                label: label.clone(),
                attrs: attrs.clone(),
            }),
            Element::Link {
                href,
                label,
                target,
            } => body.links.push(LinkRecord {
                href: href.clone(),
                label: label.clone(),
                target: target.clone(),
            }),
            Element::StyledLink {
                href,
                target,
                runs,
                icons,
            } => {
                body.links.push(LinkRecord {
                    href: href.clone(),
                    label: render_runs(runs),
                    target: target.clone(),
                });
                body.icons.extend(icons.iter().cloned());
            }
            Element::List(list) => body.lists.push(list_records(list)),
            Element::Blockquote { content } => body.quotes.push(analyze_nested(content)),
            Element::CodeBlock { text, parsed } => {
                let value = parsed.clone().unwrap_or_else(|| Value::String(text.clone()));
                body.properties = Some(value.clone());
                body.property_blocks.push(value);
            }
            Element::CardGroup { cards } => body.cards.extend(cards.iter().cloned()),
            Element::DocumentGroup { documents } => {
                body.documents.extend(documents.iter().cloned())
            }
            Element::Form { data } => {
                body.form = Some(data.clone());
                body.forms.push(data.clone());
            }
            Element::Divider | Element::Generic { .. } => {
                log::trace!("dropping {:?} element from group body", element.kind());
            }
        }
    }

    fn finish(self, elements: &[Element]) -> Group {
        let mut header = self.header;
        header.description = if !header.subtitle2.is_empty() {
            header.subtitle2.clone()
        } else {
            self.body.paragraphs.first().cloned().unwrap_or_default()
        };

        Group {
            header,
            banner: self.banner,
            body: self.body,
            metadata: Metadata {
                level: self.level,
                content_types: content_types(elements),
            },
        }
    }
}

fn list_records(list: &List) -> Vec<Body> {
    list.items
        .iter()
        .map(|item| {
            let mut record = analyze_nested(&item.content);
            record.lists.extend(item.lists.iter().map(list_records));
            record
        })
        .collect()
}

fn content_types(elements: &[Element]) -> Vec<ElementKind> {
    let mut kinds: Vec<ElementKind> = Vec::new();
    for element in elements {
        let kind = element.kind();
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}
