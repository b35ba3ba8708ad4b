//! Main/items classification.
//!
//! A single group is main. With several groups, the first is promoted only
//! when its heading level is strictly more important than every heading in
//! the other groups. A group without headings has no level: it can never be
//! promoted and never blocks promotion of the first group. A Sequence that
//! opened with a divider has no main at all.

use serde::Serialize;

use crate::structuring::analyze::Group;

/// The final output: an optional main group plus ordered items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Structure {
    pub main: Option<Group>,
    pub items: Vec<Group>,
}

/// Split analyzed groups into main and items.
pub fn classify(groups: Vec<Group>, starts_with_divider: bool) -> Structure {
    if starts_with_divider || !first_is_main(&groups) {
        return Structure {
            main: None,
            items: groups,
        };
    }

    let mut groups = groups.into_iter();
    let main = groups.next();
    Structure {
        main,
        items: groups.collect(),
    }
}

fn first_is_main(groups: &[Group]) -> bool {
    let Some((first, rest)) = groups.split_first() else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    let Some(first_level) = first.metadata.level else {
        return false;
    };
    match rest.iter().filter_map(Group::min_heading_level).min() {
        Some(others) => first_level < others,
        None => true,
    }
}
