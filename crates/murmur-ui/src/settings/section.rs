//! Section descriptors.

use std::fmt;
use std::sync::Arc;

use super::cell::CellDescriptor;

/// A group of cells with optional header and footer text.
///
/// Sections are read-only: the tree is rebuilt when content changes, never
/// edited in place. Visibility comes from an optional predicate evaluated
/// against the section itself; a section without a predicate is always
/// visible.
#[derive(Clone)]
pub struct SectionDescriptor {
    cells: Vec<CellDescriptor>,
    header: Option<String>,
    footer: Option<String>,
    predicate: Option<Arc<dyn Fn(&SectionDescriptor) -> bool + Send + Sync>>,
}

impl SectionDescriptor {
    /// Create a section from its cells.
    pub fn new(cells: Vec<CellDescriptor>) -> Self {
        Self {
            cells,
            header: None,
            footer: None,
            predicate: None,
        }
    }

    /// Set the header text.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the footer text.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set the visibility predicate.
    pub fn with_predicate(
        mut self,
        predicate: impl Fn(&SectionDescriptor) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// The header text.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// The footer text.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Whether the section is currently shown.
    pub fn is_visible(&self) -> bool {
        match &self.predicate {
            Some(predicate) => predicate(self),
            None => true,
        }
    }

    /// All cells, in declaration order.
    pub fn cell_descriptors(&self) -> &[CellDescriptor] {
        &self.cells
    }

    /// The visible cells, in declaration order.
    pub fn visible_cell_descriptors(&self) -> Vec<&CellDescriptor> {
        self.cells.iter().filter(|cell| cell.is_visible()).collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellDescriptor] {
        &mut self.cells
    }
}

impl fmt::Debug for SectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionDescriptor")
            .field("cells", &self.cells)
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("has_predicate", &self.predicate.is_some())
            .finish()
    }
}
