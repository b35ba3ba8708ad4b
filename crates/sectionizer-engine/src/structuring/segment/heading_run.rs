use crate::structuring::elements::Element;

/// For every heading, whether a later heading of the same level follows
/// before any more important heading. Built in one right-to-left pass.
pub struct SiblingIndex {
    later_sibling: Vec<bool>,
}

impl SiblingIndex {
    pub fn build(seq: &[Element]) -> Self {
        let mut later_sibling = vec![false; seq.len()];
        // seen[level]: a heading of `level` lies ahead with nothing more
        // important in between.
        let mut seen: Vec<bool> = Vec::new();

        for (i, element) in seq.iter().enumerate().rev() {
            let Some(level) = element.heading_level() else {
                continue;
            };
            let level = level as usize;
            if seen.len() <= level {
                seen.resize(level + 1, false);
            }
            later_sibling[i] = seen[level];
            seen[level] = true;
            for deeper in seen.iter_mut().skip(level + 1) {
                *deeper = false;
            }
        }

        Self { later_sibling }
    }

    pub fn has_later_sibling(&self, index: usize) -> bool {
        self.later_sibling.get(index).copied().unwrap_or(false)
    }
}

/// Exclusive end of the heading run starting at `start`.
///
/// A run extends while each heading is less important (higher level number)
/// than the one before it. A branch heading with a later sibling ends the
/// run: it opens an entry of its own.
pub fn run_end(seq: &[Element], start: usize, siblings: &SiblingIndex) -> usize {
    let Some(mut prev) = seq.get(start).and_then(Element::heading_level) else {
        return start;
    };
    let mut end = start + 1;
    while let Some(level) = seq.get(end).and_then(Element::heading_level) {
        if level <= prev || (is_branch(seq, end) && siblings.has_later_sibling(end)) {
            break;
        }
        prev = level;
        end += 1;
    }
    end
}

/// A heading immediately followed by a subordinate heading.
pub fn is_branch(seq: &[Element], index: usize) -> bool {
    match (
        seq.get(index).and_then(Element::heading_level),
        seq.get(index + 1).and_then(Element::heading_level),
    ) {
        (Some(level), Some(next)) => next > level,
        _ => false,
    }
}

/// A heading immediately followed by a more important heading.
pub fn is_pretitle(seq: &[Element], index: usize) -> bool {
    match (
        seq.get(index).and_then(Element::heading_level),
        seq.get(index + 1).and_then(Element::heading_level),
    ) {
        (Some(level), Some(next)) => next < level,
        _ => false,
    }
}
