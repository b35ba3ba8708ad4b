//! # Document Structuring
//!
//! Four pure phases turn one document tree into a [`Structure`]:
//!
//! 1. **Flatten** (`flatten`): depth-first walk producing a typed Sequence
//! 2. **Segment** (`segment`): partition the Sequence into raw groups
//! 3. **Analyze** (`analyze`): classify each raw group's header and body
//! 4. **Classify** (`classify`): decide which group, if any, is main
//!
//! Every call allocates its own values and shares no state, so independent
//! callers may structure documents concurrently.

pub mod analyze;
pub mod classify;
pub mod elements;
pub mod flatten;
pub mod segment;

#[cfg(test)]
pub mod tests;

use serde::{Deserialize, Serialize};

use crate::document::DocNode;

pub use analyze::{Group, analyze_elements, analyze_group};
pub use classify::{Structure, classify};
pub use elements::Element;
pub use flatten::flatten;
pub use segment::{RawGroup, SegmentMode, Segmentation, segment};

pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum StructureError {
    #[error("Invalid document JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Options for a structuring call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureOptions {
    /// Parse code block text as structured data.
    pub parse_code_blocks: bool,
    /// Nesting depth for lists and blockquotes before content is truncated.
    pub max_depth: usize,
}

impl Default for StructureOptions {
    fn default() -> Self {
        Self {
            parse_code_blocks: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Structure one document tree.
pub fn structure(document: &DocNode, options: &StructureOptions) -> Structure {
    let sequence = flatten(document, options);
    let segmentation = segment(&sequence);
    let groups = segmentation.groups.iter().map(analyze_group).collect();
    classify(groups, segmentation.starts_with_divider)
}

/// Parse a JSON document and structure it.
pub fn structure_json(json: &str, options: &StructureOptions) -> Result<Structure, StructureError> {
    let document = DocNode::from_json(json)?;
    Ok(structure(&document, options))
}
