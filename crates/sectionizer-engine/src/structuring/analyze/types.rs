use serde::Serialize;
use serde_json::{Map, Value};

use crate::structuring::elements::{ElementKind, Media};

/// A structured content group: classified header fields, optional banner,
/// and categorized body content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    pub header: Header,
    pub banner: Option<Banner>,
    pub body: Body,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Header {
    pub pretitle: String,
    pub title: String,
    pub subtitle: String,
    pub subtitle2: String,
    pub alignment: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Banner {
    pub url: String,
    pub caption: String,
    pub alt: String,
}

impl From<Media> for Banner {
    fn from(media: Media) -> Self {
        Self {
            url: media.url,
            caption: media.caption,
            alt: media.alt,
        }
    }
}

/// Categorized content. Also the record shape of analyzed list items and
/// blockquotes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub paragraphs: Vec<String>,
    /// Headings that did not fit into a header slot.
    pub headings: Vec<BodyHeading>,
    pub imgs: Vec<Media>,
    pub videos: Vec<Media>,
    /// One entry per list, one record per list item.
    pub lists: Vec<Vec<Body>>,
    pub links: Vec<LinkRecord>,
    pub icons: Vec<Media>,
    pub buttons: Vec<ButtonRecord>,
    pub cards: Vec<Map<String, Value>>,
    pub documents: Vec<Map<String, Value>>,
    pub forms: Vec<Value>,
    /// The last form seen.
    pub form: Option<Value>,
    pub quotes: Vec<Body>,
    /// The last code block's value.
    pub properties: Option<Value>,
    pub property_blocks: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BodyHeading {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkRecord {
    pub href: String,
    pub label: String,
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ButtonRecord {
    pub label: String,
    pub attrs: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Level of the title heading, `None` for a group without headings.
    pub level: Option<u8>,
    /// Element kinds present, in order of first appearance.
    pub content_types: Vec<ElementKind>,
}

impl Group {
    /// The most important heading level anywhere in the group: the title
    /// and any overflow headings in the body.
    pub fn min_heading_level(&self) -> Option<u8> {
        self.metadata
            .level
            .into_iter()
            .chain(self.body.headings.iter().map(|h| h.level))
            .min()
    }
}

impl Header {
    /// Title and subtitles only ever fill left to right.
    pub fn is_ordered(&self) -> bool {
        (self.subtitle.is_empty() || !self.title.is_empty())
            && (self.subtitle2.is_empty() || !self.subtitle.is_empty())
    }
}
