use serde::Serialize;
use serde_json::{Map, Value};

use crate::document::Mark;

/// Image-like payload shared by images, videos and icons.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Media {
    pub url: String,
    pub alt: String,
    pub caption: String,
    pub role: String,
}

/// A text leaf kept with its decorations so it can be re-rendered later.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub marks: Vec<Mark>,
}

/// A bullet or ordered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// One list entry: its own flattened content plus any nested lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListItem {
    pub content: Vec<Element>,
    pub lists: Vec<List>,
}

/// A flattened document element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    Heading {
        level: u8,
        text: String,
        alignment: Option<String>,
    },
    Paragraph {
        text: String,
    },
    Image(Media),
    Video(Media),
    Icon(Media),
    Button {
        label: String,
        attrs: Map<String, Value>,
    },
    Link {
        href: String,
        label: String,
        target: Option<String>,
    },
    /// A paragraph whose text runs all share one link. The runs keep their
    /// other decorations with the link itself removed.
    StyledLink {
        href: String,
        target: Option<String>,
        runs: Vec<TextRun>,
        icons: Vec<Media>,
    },
    List(List),
    Divider,
    Blockquote {
        content: Vec<Element>,
    },
    CodeBlock {
        text: String,
        parsed: Option<Value>,
    },
    CardGroup {
        cards: Vec<Map<String, Value>>,
    },
    DocumentGroup {
        documents: Vec<Map<String, Value>>,
    },
    Form {
        data: Value,
    },
    Generic {
        #[serde(rename = "nodeType")]
        node_type: String,
        text: String,
    },
}

/// Discriminant of [`Element`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Heading,
    Paragraph,
    Image,
    Video,
    Icon,
    Button,
    Link,
    StyledLink,
    List,
    Divider,
    Blockquote,
    CodeBlock,
    CardGroup,
    DocumentGroup,
    Form,
    Generic,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Heading { .. } => ElementKind::Heading,
            Element::Paragraph { .. } => ElementKind::Paragraph,
            Element::Image(_) => ElementKind::Image,
            Element::Video(_) => ElementKind::Video,
            Element::Icon(_) => ElementKind::Icon,
            Element::Button { .. } => ElementKind::Button,
            Element::Link { .. } => ElementKind::Link,
            Element::StyledLink { .. } => ElementKind::StyledLink,
            Element::List(_) => ElementKind::List,
            Element::Divider => ElementKind::Divider,
            Element::Blockquote { .. } => ElementKind::Blockquote,
            Element::CodeBlock { .. } => ElementKind::CodeBlock,
            Element::CardGroup { .. } => ElementKind::CardGroup,
            Element::DocumentGroup { .. } => ElementKind::DocumentGroup,
            Element::Form { .. } => ElementKind::Form,
            Element::Generic { .. } => ElementKind::Generic,
        }
    }

    /// Heading level, if this is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Element::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, Element::Divider)
    }

    /// Images that may act as a section banner (icons and videos never do).
    pub fn is_banner_candidate(&self) -> bool {
        matches!(self, Element::Image(_))
    }
}
