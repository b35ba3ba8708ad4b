//! End-to-end tests for the structuring pipeline.
//!
//! Element builders shared by the unit tests live here too.


use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::document::DocNode;
use crate::structuring::elements::{Element, Media};
use crate::structuring::{StructureOptions, structure};

pub fn h(level: u8, text: &str) -> Element {
    Element::Heading {
        level,
        text: text.to_string(),
        alignment: None,
    }
}

pub fn p(text: &str) -> Element {
    Element::Paragraph {
        text: text.to_string(),
    }
}

pub fn banner(url: &str) -> Element {
    Element::Image(Media {
        url: url.to_string(),
        role: "banner".to_string(),
        ..Media::default()
    })
}

fn heading(level: u8, text: &str) -> Value {
    json!({ "type": "heading", "attrs": { "level": level }, "content": [{ "type": "text", "text": text }] })
}

fn paragraph(text: &str) -> Value {
    json!({ "type": "paragraph", "content": [{ "type": "text", "text": text }] })
}

fn divider() -> Value {
    json!({ "type": "horizontalRule" })
}

fn run(content: Vec<Value>) -> crate::structuring::Structure {
    let doc: DocNode = serde_json::from_value(json!({ "type": "doc", "content": content })).unwrap();
    let structure = structure(&doc, &StructureOptions::default());
    invariants::check_structure(&structure);
    structure
}

#[test]
fn simple_title_and_paragraph_is_main() {
    let s = run(vec![heading(1, "Main Title"), paragraph("Intro")]);
    let main = s.main.expect("main group");
    assert_eq!(main.header.title, "Main Title");
    assert_eq!(main.body.paragraphs, vec!["Intro"]);
    assert!(s.items.is_empty());
}

#[test]
fn divider_separated_items() {
    let s = run(vec![
        heading(1, "Main"),
        paragraph("intro"),
        divider(),
        paragraph("first"),
        divider(),
        paragraph("second"),
    ]);
    assert!(s.main.is_some());
    assert_eq!(s.items.len(), 2);
    for item in &s.items {
        assert_eq!(item.body.paragraphs.len(), 1);
    }
}

#[test]
fn leading_divider_means_no_main() {
    let s = run(vec![divider(), heading(1, "A"), paragraph("a"), divider(), paragraph("b")]);
    assert!(s.main.is_none());
    assert_eq!(s.items.len(), 2);
}

#[test]
fn resume_pattern() {
    let s = run(vec![
        heading(1, "Academic Experience"),
        heading(2, "Ph.D. in CS"),
        heading(3, "2014-2018"),
        paragraph("MIT"),
        heading(2, "Masters in Data"),
        heading(3, "2012-2014"),
        paragraph("Berkeley"),
    ]);
    let main = s.main.expect("main group");
    assert_eq!(main.header.title, "Academic Experience");
    assert_ne!(main.header.subtitle, "Ph.D. in CS");
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.items[0].header.title, "Ph.D. in CS");
    assert_eq!(s.items[0].header.subtitle, "2014-2018");
    assert_eq!(s.items[0].body.paragraphs, vec!["MIT"]);
    assert_eq!(s.items[1].header.title, "Masters in Data");
    assert_eq!(s.items[1].header.subtitle, "2012-2014");
}

#[test]
fn leaf_then_branch() {
    let s = run(vec![
        heading(1, "Work History"),
        heading(2, "A summary of my roles."),
        heading(2, "Google"),
        heading(3, "2020-Present"),
        heading(2, "Facebook"),
        heading(3, "2018-2020"),
    ]);
    let main = s.main.expect("main group");
    assert_eq!(main.header.title, "Work History");
    assert_eq!(main.header.subtitle, "A summary of my roles.");
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.items[0].header.title, "Google");
    assert_eq!(s.items[0].header.subtitle, "2020-Present");
    assert_eq!(s.items[1].header.title, "Facebook");
}

#[test]
fn sibling_headings_without_enclosing_title() {
    let s = run(vec![heading(2, "First"), paragraph("a"), heading(2, "Second"), paragraph("b")]);
    assert!(s.main.is_none());
    let titles: Vec<_> = s.items.iter().map(|g| g.header.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[test]
fn pretitle_and_banner_at_document_start() {
    let s = run(vec![
        json!({ "type": "image", "attrs": { "src": "hero.jpg", "role": "banner", "alt": "Hero" } }),
        heading(3, "Welcome to"),
        heading(1, "Acme"),
        paragraph("We build things."),
        heading(2, "Rockets"),
        paragraph("Fast."),
        heading(2, "Roller skates"),
        paragraph("Also fast."),
    ]);
    let main = s.main.expect("main group");
    assert_eq!(main.header.pretitle, "Welcome to");
    assert_eq!(main.header.title, "Acme");
    assert_eq!(main.banner.expect("banner").alt, "Hero");
    assert_eq!(main.header.description, "We build things.");
    assert_eq!(s.items.len(), 2);
}

#[test]
fn empty_document() {
    let s = run(vec![]);
    assert!(s.main.is_none());
    assert!(s.items.is_empty());
}

#[test]
fn rich_body_content() {
    let s = run(vec![
        heading(2, "Features"),
        json!({ "type": "paragraph", "content": [
            { "type": "text", "text": "Learn more", "marks": [{ "type": "link", "attrs": { "href": "/more" } }] }
        ]}),
        json!({ "type": "bulletList", "content": [
            { "type": "listItem", "content": [paragraph("Fast")] },
            { "type": "listItem", "content": [paragraph("Safe")] }
        ]}),
        json!({ "type": "blockquote", "content": [paragraph("Wow.")] }),
        json!({ "type": "form-block", "attrs": { "data": "{\"fields\":[\"email\"]}" } }),
        json!({ "type": "card-group", "content": [
            { "type": "card", "attrs": { "title": "One" } },
            { "type": "card", "attrs": { "title": "Hidden", "hidden": true } }
        ]}),
    ]);
    let main = s.main.expect("main group");
    assert_eq!(main.body.links[0].href, "/more");
    assert_eq!(main.body.links[0].label, "Learn more");
    assert_eq!(main.body.lists[0].len(), 2);
    assert_eq!(main.body.quotes[0].paragraphs, vec!["Wow."]);
    assert_eq!(main.body.form, Some(json!({ "fields": ["email"] })));
    assert_eq!(main.body.cards.len(), 1);
    assert!(main.body.paragraphs.is_empty());
    assert_eq!(main.header.description, "");
}
