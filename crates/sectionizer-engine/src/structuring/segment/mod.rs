//! # Group Segmentation
//!
//! Partitions a flat Sequence into contiguous raw groups.
//!
//! ## Modes
//!
//! - **Divider mode** (any divider present): split strictly on dividers. Empty
//!   runs are dropped and the dividers themselves belong to no group.
//! - **Heading mode**: scan left to right with one open group. Each heading
//!   starts a heading run (see [`heading_run`]) which closes the open group
//!   and opens a new one. Non-heading elements extend the open group.
//!
//! At the very start of the document a banner image followed by a heading,
//! and a pretitle heading followed by a more important heading, pre-open the
//! first group: the heading run that follows extends it instead of closing
//! it. Elsewhere these shapes get no special treatment.
//!
//! ## Key Invariants
//!
//! - Concatenating all groups reproduces the non-divider elements exactly
//!   once each, in order
//! - No group is empty

pub mod heading_run;

use serde::Serialize;

use crate::structuring::elements::Element;

use heading_run::{SiblingIndex, is_pretitle, run_end};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentMode {
    Divider,
    Heading,
}

/// A contiguous slice of the Sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawGroup<'a> {
    /// Index of the first element within the Sequence.
    pub start: usize,
    pub elements: &'a [Element],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segmentation<'a> {
    pub mode: SegmentMode,
    /// The Sequence opened with a divider. No group may become main.
    pub starts_with_divider: bool,
    pub groups: Vec<RawGroup<'a>>,
}

/// Segment a Sequence into raw groups.
pub fn segment(seq: &[Element]) -> Segmentation<'_> {
    let segmentation = if seq.iter().any(Element::is_divider) {
        Segmentation {
            mode: SegmentMode::Divider,
            starts_with_divider: seq.first().is_some_and(Element::is_divider),
            groups: by_dividers(seq),
        }
    } else {
        Segmentation {
            mode: SegmentMode::Heading,
            starts_with_divider: false,
            groups: by_headings(seq),
        }
    };
    log::debug!(
        "segmented {} elements into {} groups ({:?} mode)",
        seq.len(),
        segmentation.groups.len(),
        segmentation.mode
    );
    segmentation
}

fn raw(seq: &[Element], start: usize, end: usize) -> RawGroup<'_> {
    RawGroup {
        start,
        elements: &seq[start..end],
    }
}

fn by_dividers(seq: &[Element]) -> Vec<RawGroup<'_>> {
    let mut groups = Vec::new();
    let mut start = 0;
    for (i, element) in seq.iter().enumerate() {
        if element.is_divider() {
            if i > start {
                groups.push(raw(seq, start, i));
            }
            start = i + 1;
        }
    }
    if seq.len() > start {
        groups.push(raw(seq, start, seq.len()));
    }
    groups
}

fn by_headings(seq: &[Element]) -> Vec<RawGroup<'_>> {
    let siblings = SiblingIndex::build(seq);
    let mut groups = Vec::new();
    let mut open: Option<usize> = None;
    let mut pre_opened = false;
    let mut i = 0;

    if seq.first().is_some_and(Element::is_banner_candidate)
        && seq.get(1).is_some_and(Element::is_heading)
    {
        open = Some(0);
        pre_opened = true;
        i = 1;
    }
    if is_pretitle(seq, i) {
        open.get_or_insert(i);
        pre_opened = true;
        i += 1;
    }

    while i < seq.len() {
        if seq[i].is_heading() {
            if !pre_opened && let Some(start) = open.replace(i) {
                groups.push(raw(seq, start, i));
            }
            pre_opened = false;
            i = run_end(seq, i, &siblings);
        } else {
            open.get_or_insert(i);
            i += 1;
        }
    }

    if let Some(start) = open {
        groups.push(raw(seq, start, seq.len()));
    }
    groups
}
