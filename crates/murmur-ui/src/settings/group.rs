//! Group descriptors.
//!
//! A group is both a container (it holds the sections of a settings screen)
//! and a cell (it can sit inside another group's section as a drill-down
//! row). Selecting it generates a screen for its content and pushes that
//! screen through the group's navigator handle.

use std::fmt;
use std::sync::Arc;

use murmur_ui_core::{PerfSpan, murmur_debug};

use super::cell::CellDescriptor;
use super::navigator::{NavigatorId, resolve_navigator};
use super::screen::SettingsScreen;
use super::section::SectionDescriptor;

/// Visual style of a group's generated screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupStyle {
    /// Edge-to-edge rows.
    Plain,
    /// Inset, rounded row groups.
    #[default]
    Grouped,
}

/// A titled collection of sections that presents as its own screen.
///
/// Structure is fixed at construction; the tree is rebuilt to change it.
/// Group visibility is a stored flag, independent of what the sections
/// contain.
#[derive(Clone)]
pub struct GroupDescriptor {
    title: String,
    style: GroupStyle,
    items: Vec<SectionDescriptor>,
    identifier: Option<String>,
    visible: bool,
    owner: Option<String>,
    preview: Option<Arc<dyn Fn(&GroupDescriptor) -> Option<String> + Send + Sync>>,
    navigator: Option<NavigatorId>,
}

impl GroupDescriptor {
    /// Create a group from its title and sections.
    pub fn new(title: impl Into<String>, items: Vec<SectionDescriptor>) -> Self {
        Self {
            title: title.into(),
            style: GroupStyle::default(),
            items,
            identifier: None,
            visible: true,
            owner: None,
            preview: None,
            navigator: None,
        }
    }

    /// Set the screen style.
    pub fn with_style(mut self, style: GroupStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the group's identifier and stamp it onto every contained cell as
    /// the cell's owner, so a cell can name the group it belongs to without
    /// holding a reference to it.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        for section in &mut self.items {
            for cell in section.cells_mut() {
                cell.set_owner(identifier.clone());
            }
        }
        self.identifier = Some(identifier);
        self
    }

    /// Set the group's visibility flag.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the preview generator producing the value text shown on the
    /// group's drill-down row.
    pub fn with_preview(
        mut self,
        preview: impl Fn(&GroupDescriptor) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.preview = Some(Arc::new(preview));
        self
    }

    /// Set the navigator handle used when the group is selected.
    pub fn with_navigator(mut self, navigator: NavigatorId) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// The group title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The screen style.
    pub fn style(&self) -> GroupStyle {
        self.style
    }

    /// The group's identifier, if it has one.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Whether the group's drill-down row is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The identifier of the group this group belongs to, if nested.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub(crate) fn set_owner(&mut self, owner: Option<String>) {
        self.owner = owner;
    }

    /// All sections, in declaration order.
    pub fn items(&self) -> &[SectionDescriptor] {
        &self.items
    }

    /// The visible sections, in declaration order.
    pub fn visible_items(&self) -> Vec<&SectionDescriptor> {
        self.items.iter().filter(|section| section.is_visible()).collect()
    }

    /// Every cell of every section, in declaration order, regardless of
    /// visibility. This is the static enumeration surface used for search
    /// and indexing.
    pub fn all_cell_descriptors(&self) -> Vec<&CellDescriptor> {
        let _span = PerfSpan::new("all_cell_descriptors");
        self.items
            .iter()
            .flat_map(|section| section.cell_descriptors())
            .collect()
    }

    /// The preview text for the group's drill-down row, if the group has a
    /// preview generator and it produces one.
    pub fn preview(&self) -> Option<String> {
        self.preview.as_ref().and_then(|generate| generate(self))
    }

    /// Generate the screen presenting this group's content, bound to a
    /// clone of the group as its root. Returns `None` for a group with no
    /// sections.
    pub fn generate_screen(&self) -> Option<SettingsScreen> {
        if self.items.is_empty() {
            return None;
        }
        Some(SettingsScreen::new(self.clone()))
    }

    /// Handle the user selecting the group's drill-down row: generate the
    /// screen and push it, animated, through the navigator handle. If the
    /// handle does not resolve or generation fails, nothing happens.
    pub fn select(&self) {
        let Some(navigator) = self.navigator.and_then(resolve_navigator) else {
            murmur_debug!("group has no navigator: title={}", self.title);
            return;
        };
        let Some(screen) = self.generate_screen() else {
            murmur_debug!("group generated no screen: title={}", self.title);
            return;
        };
        navigator.push(screen, true);
    }
}

impl fmt::Debug for GroupDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupDescriptor")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("items", &self.items)
            .field("identifier", &self.identifier)
            .field("visible", &self.visible)
            .field("owner", &self.owner)
            .field("has_preview", &self.preview.is_some())
            .field("navigator", &self.navigator)
            .finish()
    }
}

/// Identifier-based equality, matching [`CellDescriptor`]'s contract:
/// groups without identifiers never compare equal.
impl PartialEq for GroupDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (&self.identifier, &other.identifier) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Like cells, groups carry live behavior and cannot be reconstructed from
/// data. Decoding always fails.
impl<'de> serde::Deserialize<'de> for GroupDescriptor {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Err(serde::de::Error::custom(
            "group descriptors cannot be decoded from serialized form",
        ))
    }
}
