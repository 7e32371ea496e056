//! The screen read surface over a descriptor tree.
//!
//! A [`SettingsScreen`] binds a root group and answers the questions a
//! table-style renderer asks: how many sections, how many rows, what goes in
//! a row, what happens when a row is tapped. Indices address the *visible*
//! tree; hidden sections and cells do not occupy positions.

use std::fmt;

use murmur_ui_core::murmur_debug;

use super::cell::CellDescriptor;
use super::group::{GroupDescriptor, GroupStyle};
use super::labels::PropertyValue;
use super::section::SectionDescriptor;

/// Receives a cell's content when a row is bound.
pub trait RowView {
    /// Set the row's title text.
    fn set_title(&mut self, title: &str);

    /// Set the row's value text (the trailing detail label).
    fn set_value(&mut self, value: &str);
}

/// A plain-text [`RowView`], used by hosts that render text rows and by
/// tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRow {
    title: String,
    value: String,
}

impl TextRow {
    /// The bound title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The bound value text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl RowView for TextRow {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_owned();
    }
}

/// A settings screen bound to a root group.
#[derive(Clone)]
pub struct SettingsScreen {
    root: GroupDescriptor,
}

impl SettingsScreen {
    /// Create a screen presenting `root`.
    pub fn new(root: GroupDescriptor) -> Self {
        Self { root }
    }

    /// The root group.
    pub fn root(&self) -> &GroupDescriptor {
        &self.root
    }

    /// The screen title, taken from the root group.
    pub fn title(&self) -> &str {
        self.root.title()
    }

    /// The screen style, taken from the root group.
    pub fn style(&self) -> GroupStyle {
        self.root.style()
    }

    /// Number of visible sections.
    pub fn section_count(&self) -> usize {
        self.root.visible_items().len()
    }

    /// The visible section at `section`, if in range.
    pub fn section_at(&self, section: usize) -> Option<&SectionDescriptor> {
        self.root.visible_items().get(section).copied()
    }

    /// Number of visible rows in the visible section at `section`.
    pub fn row_count(&self, section: usize) -> Option<usize> {
        Some(self.section_at(section)?.visible_cell_descriptors().len())
    }

    /// The cell behind the visible row at (`section`, `row`).
    pub fn cell_at(&self, section: usize, row: usize) -> Option<&CellDescriptor> {
        self.section_at(section)?
            .visible_cell_descriptors()
            .get(row)
            .copied()
    }

    /// Bind the cell at (`section`, `row`) into `view`. Returns `false` if
    /// the position is out of range.
    pub fn bind_row(&self, section: usize, row: usize, view: &mut dyn RowView) -> bool {
        match self.cell_at(section, row) {
            Some(cell) => {
                cell.feature_cell(view);
                true
            }
            None => false,
        }
    }

    /// Activate the row at (`section`, `row`), delegating to the cell's
    /// `select`. Returns `false` if the position is out of range.
    pub fn activate_row(
        &self,
        section: usize,
        row: usize,
        value: Option<PropertyValue>,
    ) -> bool {
        let Some(cell) = self.cell_at(section, row) else {
            murmur_debug!(
                "row activation out of range: section={section} row={row} screen={}",
                self.title()
            );
            return false;
        };
        cell.select(value);
        true
    }
}

impl fmt::Debug for SettingsScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsScreen")
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::cell::PlainCell;

    fn screen() -> SettingsScreen {
        let root = GroupDescriptor::new(
            "Privacy",
            vec![
                SectionDescriptor::new(vec![
                    CellDescriptor::Plain(PlainCell::new("Read Receipts")),
                    CellDescriptor::Plain(PlainCell::new("Last Seen").with_visible(false)),
                    CellDescriptor::Plain(PlainCell::new("Typing Indicators")),
                ]),
                SectionDescriptor::new(vec![CellDescriptor::Plain(PlainCell::new("Hidden"))])
                    .with_predicate(|_| false),
                SectionDescriptor::new(vec![CellDescriptor::Plain(PlainCell::new("Passcode"))]),
            ],
        );
        SettingsScreen::new(root)
    }

    #[test]
    fn indices_address_the_visible_tree() {
        let screen = screen();
        assert_eq!(screen.section_count(), 2);
        assert_eq!(screen.row_count(0), Some(2));
        assert_eq!(screen.row_count(1), Some(1));
        assert_eq!(screen.row_count(2), None);

        // Hidden cell does not occupy a row position.
        assert_eq!(screen.cell_at(0, 1).map(|c| c.title()), Some("Typing Indicators"));
        assert_eq!(screen.cell_at(1, 0).map(|c| c.title()), Some("Passcode"));
    }

    #[test]
    fn bind_row_populates_the_view() {
        let screen = screen();
        let mut row = TextRow::default();
        assert!(screen.bind_row(0, 0, &mut row));
        assert_eq!(row.title(), "Read Receipts");

        assert!(!screen.bind_row(5, 0, &mut row));
    }

    #[test]
    fn activate_out_of_range_is_rejected() {
        let screen = screen();
        assert!(!screen.activate_row(0, 9, None));
        assert!(screen.activate_row(0, 0, None));
    }
}
