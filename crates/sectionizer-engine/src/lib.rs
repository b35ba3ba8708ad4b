pub mod document;
pub mod structuring;

// Re-export key types for easier usage
pub use document::{DocNode, Mark};
pub use structuring::{
    DEFAULT_MAX_DEPTH, Element, Group, RawGroup, SegmentMode, Segmentation, Structure,
    StructureError, StructureOptions, analyze::Body, analyze::Header, analyze_group, classify,
    flatten, segment, structure, structure_json,
};
