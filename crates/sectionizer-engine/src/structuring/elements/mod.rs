//! # Elements
//!
//! The closed set of typed elements produced by flattening. Each variant
//! carries exactly the payload its kind needs; downstream phases match on
//! the variant and never look at the source node's type string again.

pub mod types;

pub use types::{Element, ElementKind, List, ListItem, Media, TextRun};
