//! Batch updates for sectioned list views.
//!
//! A top-level diff describes sections; the children of its `Nested` entries
//! describe the rows inside them. [`ListUpdate`] sorts both levels into the
//! buckets a list widget animates, and [`perform_updates`] drives a
//! [`ListView`] through them in the order such widgets require.

use std::collections::BTreeSet;

use triff::Diff;

use crate::debug;

/// A row within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPath {
    /// Section index
    pub section: usize,
    /// Row index within the section
    pub row: usize,
}

impl IndexPath {
    /// Row `row` of section `section`.
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Section and row changes collected from a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUpdate {
    /// Sections removed, by source index
    pub deleted_sections: BTreeSet<usize>,
    /// Sections added, by destination index
    pub inserted_sections: BTreeSet<usize>,
    /// Sections to reload, by source index
    pub updated_sections: BTreeSet<usize>,
    /// Sections moved, as (source, destination)
    pub moved_sections: Vec<(usize, usize)>,
    /// Rows removed, in their source section
    pub deleted_rows: Vec<IndexPath>,
    /// Rows added, in their destination section
    pub inserted_rows: Vec<IndexPath>,
    /// Rows to reload, in their source section
    pub updated_rows: Vec<IndexPath>,
    /// Rows moved, as (source, destination)
    pub moved_rows: Vec<(IndexPath, IndexPath)>,
}

impl ListUpdate {
    /// Collect the changes described by `diffs`.
    ///
    /// Kept entries contribute nothing, at either level. Row changes only come
    /// from the children of `Nested` sections; deeper nesting is ignored.
    pub fn from_diffs<E>(diffs: &[Diff<E>]) -> Self {
        let mut update = Self::default();
        for diff in diffs {
            match *diff {
                Diff::Deleted { index, .. } => {
                    update.deleted_sections.insert(index);
                }
                Diff::Inserted { index, .. } => {
                    update.inserted_sections.insert(index);
                }
                Diff::Updated { from_index, .. } => {
                    update.updated_sections.insert(from_index);
                }
                Diff::Moved {
                    from_index,
                    to_index,
                    ..
                } => update.moved_sections.push((from_index, to_index)),
                Diff::Nested {
                    from_index,
                    to_index,
                    ref children,
                    ..
                } => update.collect_rows(from_index, to_index, children),
                Diff::Kept { .. } => {}
            }
        }
        update
    }

    fn collect_rows<E>(&mut self, source: usize, destination: usize, rows: &[Diff<E>]) {
        for row in rows {
            match *row {
                Diff::Deleted { index, .. } => self.deleted_rows.push(IndexPath::new(source, index)),
                Diff::Inserted { index, .. } => {
                    self.inserted_rows.push(IndexPath::new(destination, index))
                }
                Diff::Updated { from_index, .. } => {
                    self.updated_rows.push(IndexPath::new(source, from_index))
                }
                Diff::Moved {
                    from_index,
                    to_index,
                    ..
                } => self.moved_rows.push((
                    IndexPath::new(source, from_index),
                    IndexPath::new(destination, to_index),
                )),
                Diff::Kept { .. } | Diff::Nested { .. } => {}
            }
        }
    }

    /// Whether there is nothing to perform.
    pub fn is_empty(&self) -> bool {
        self.deleted_sections.is_empty()
            && self.inserted_sections.is_empty()
            && self.updated_sections.is_empty()
            && self.moved_sections.is_empty()
            && self.deleted_rows.is_empty()
            && self.inserted_rows.is_empty()
            && self.updated_rows.is_empty()
            && self.moved_rows.is_empty()
    }
}

/// A sectioned list that accepts batched structural updates.
pub trait ListView {
    /// Remove whole sections.
    fn delete_sections(&mut self, sections: &BTreeSet<usize>);

    /// Add whole sections.
    fn insert_sections(&mut self, sections: &BTreeSet<usize>);

    /// Remove rows.
    fn delete_rows(&mut self, rows: &[IndexPath]);

    /// Add rows.
    fn insert_rows(&mut self, rows: &[IndexPath]);

    /// Move one section.
    fn move_section(&mut self, from: usize, to: usize);

    /// Move one row.
    fn move_row(&mut self, from: IndexPath, to: IndexPath);

    /// Redraw rows in place.
    fn reload_rows(&mut self, rows: &[IndexPath]);

    /// Redraw sections in place.
    fn reload_sections(&mut self, sections: &BTreeSet<usize>);
}

/// Drive `view` through the changes in `diffs`, then call `on_index_updated`.
///
/// Operations run in this order, each skipped when it has nothing to do:
/// delete sections, insert sections, delete rows, insert rows, move sections,
/// move rows, reload rows, reload sections. `on_index_updated` runs last,
/// inside the same batch.
///
/// An empty `diffs` only calls `on_index_updated` and returns `false`.
pub fn perform_updates<V, E>(view: &mut V, diffs: &[Diff<E>], on_index_updated: impl FnOnce()) -> bool
where
    V: ListView + ?Sized,
{
    if diffs.is_empty() {
        on_index_updated();
        return false;
    }

    let update = ListUpdate::from_diffs(diffs);
    debug!(
        deleted_sections = update.deleted_sections.len(),
        inserted_sections = update.inserted_sections.len(),
        moved_sections = update.moved_sections.len(),
        deleted_rows = update.deleted_rows.len(),
        inserted_rows = update.inserted_rows.len(),
        moved_rows = update.moved_rows.len(),
        "performing list updates"
    );

    if !update.deleted_sections.is_empty() {
        view.delete_sections(&update.deleted_sections);
    }
    if !update.inserted_sections.is_empty() {
        view.insert_sections(&update.inserted_sections);
    }
    if !update.deleted_rows.is_empty() {
        view.delete_rows(&update.deleted_rows);
    }
    if !update.inserted_rows.is_empty() {
        view.insert_rows(&update.inserted_rows);
    }
    for &(from, to) in &update.moved_sections {
        view.move_section(from, to);
    }
    for &(from, to) in &update.moved_rows {
        view.move_row(from, to);
    }
    if !update.updated_rows.is_empty() {
        view.reload_rows(&update.updated_rows);
    }
    if !update.updated_sections.is_empty() {
        view.reload_sections(&update.updated_sections);
    }

    on_index_updated();
    true
}
