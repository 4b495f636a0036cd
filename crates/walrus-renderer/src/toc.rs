//! Table of contents builder.
//!
//! Turns the flat, ordered [`Section`] list of an article into a numbered
//! outline. Sections at level 1 or 2 are top-level items numbered `1`, `2`, …
//! Deeper sections nest under the closest preceding shallower item and are
//! numbered `<parent>.<n>`.
//!
//! Depth is relative rather than absolute: a run of deeper headings takes the
//! level of its first heading as its own level, so `##` followed directly by
//! `####` nests the `####` one step below the `##`.
//!
//! ```text
//! # A            1 A
//! ### B            1.1 B
//! ##### C            1.1.1 C
//! ### D            1.2 D
//! ## E           2 E
//! ```

use crate::sections::Section;

/// Highest heading level that is still a top-level entry.
const TOP_LEVEL_MAX: usize = 2;

/// One entry in the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocItem {
    /// Hierarchical number, e.g. `"2"` or `"2.1.3"`.
    pub number: String,
    /// Heading text.
    pub title: String,
    /// Link target including the leading `#`.
    pub href: String,
    /// Nested entries.
    pub children: Vec<TocItem>,
}

impl TocItem {
    fn new(number: String, section: &Section) -> Self {
        Self {
            number,
            title: section.title.clone(),
            href: format!("#{}", section.anchor()),
            children: Vec::new(),
        }
    }
}

/// Build the table of contents for a list of sections.
///
/// A deeper run that appears before any top-level heading has no parent to
/// nest under; its items are kept at the top level and numbered under `0`
/// (`0.1`, `0.2`, …).
///
/// # Examples
///
/// ```
/// use walrus_renderer::{Section, build_toc};
///
/// let sections = [
///     Section::new("Groups", 1),
///     Section::new("Axioms", 3),
///     Section::new("Examples", 3),
///     Section::new("Rings", 1),
/// ];
/// let toc = build_toc(&sections);
/// assert_eq!(toc.len(), 2);
/// assert_eq!(toc[0].children[1].number, "1.2");
/// assert_eq!(toc[1].number, "2");
/// ```
#[must_use]
pub fn build_toc(sections: &[Section]) -> Vec<TocItem> {
    let mut items: Vec<TocItem> = Vec::new();
    let mut numbering = 0usize;
    let mut cursor = 0;

    while cursor < sections.len() {
        if sections[cursor].level <= TOP_LEVEL_MAX {
            numbering += 1;
            items.push(TocItem::new(numbering.to_string(), &sections[cursor]));
            cursor += 1;
        } else if let Some(parent) = items.last_mut() {
            let offset = parent.children.len();
            let (run, next) = build_run(sections, cursor, &parent.number, offset);
            parent.children.extend(run);
            cursor = next;
        } else {
            let (run, next) = build_run(sections, cursor, "0", 0);
            items.extend(run);
            cursor = next;
        }
    }

    items
}

/// Build a contiguous run of entries sharing the level of `sections[start]`.
///
/// Entries deeper than the run level recurse and attach to the latest entry
/// of the run. The run ends at the first shallower section. `offset` is the
/// number of siblings the parent already has, so numbering continues across
/// runs under the same parent.
///
/// Returns the run and the index of the first section not consumed.
fn build_run(
    sections: &[Section],
    start: usize,
    prefix: &str,
    offset: usize,
) -> (Vec<TocItem>, usize) {
    let level = sections[start].level;
    let mut run: Vec<TocItem> = Vec::new();
    let mut cursor = start;

    while cursor < sections.len() && sections[cursor].level >= level {
        if sections[cursor].level == level {
            let number = format!("{prefix}.{}", offset + run.len() + 1);
            run.push(TocItem::new(number, &sections[cursor]));
            cursor += 1;
        } else {
            // The first entry is always at `level`, so `run` is non-empty here.
            let Some(parent) = run.last_mut() else {
                break;
            };
            let nested_offset = parent.children.len();
            let (nested, next) = build_run(sections, cursor, &parent.number, nested_offset);
            parent.children.extend(nested);
            cursor = next;
        }
    }

    (run, cursor)
}
