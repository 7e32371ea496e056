//! Cell descriptors.
//!
//! A cell is one row of a settings screen. The four kinds are a closed sum
//! type: every operation dispatches by `match`, so a new kind forces every
//! call site to say what it does.

use std::fmt;
use std::sync::Arc;

use murmur_ui_core::murmur_debug;

use super::group::GroupDescriptor;
use super::labels::{PropertyId, PropertyValue, property_label};
use super::navigator::{NavigatorId, resolve_navigator};
use super::screen::RowView;

/// A static row with a fixed title.
#[derive(Debug, Clone)]
pub struct PlainCell {
    title: String,
    identifier: Option<String>,
    visible: bool,
    owner: Option<String>,
}

impl PlainCell {
    /// Create a plain cell with `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            identifier: None,
            visible: true,
            owner: None,
        }
    }

    /// Set the cell's identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the cell's visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// A row bound to a settings property.
///
/// The title comes from the property's label; selecting the row forwards
/// the selection value to the apply callback.
#[derive(Clone)]
pub struct PropertyCell {
    property: PropertyId,
    identifier: Option<String>,
    visible: bool,
    owner: Option<String>,
    apply: Arc<dyn Fn(PropertyValue) + Send + Sync>,
    value_provider: Option<Arc<dyn Fn() -> String + Send + Sync>>,
}

impl PropertyCell {
    /// Create a property cell applying selections through `apply`.
    pub fn new(
        property: PropertyId,
        apply: impl Fn(PropertyValue) + Send + Sync + 'static,
    ) -> Self {
        Self {
            property,
            identifier: None,
            visible: true,
            owner: None,
            apply: Arc::new(apply),
            value_provider: None,
        }
    }

    /// Set the cell's identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the cell's visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Provide the current value text shown next to the title.
    pub fn with_value_provider(
        mut self,
        provider: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        self.value_provider = Some(Arc::new(provider));
        self
    }

    /// The bound property.
    pub fn property(&self) -> PropertyId {
        self.property
    }
}

impl fmt::Debug for PropertyCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyCell")
            .field("property", &self.property)
            .field("identifier", &self.identifier)
            .field("visible", &self.visible)
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}

/// A row that leaves the settings tree for an external route.
#[derive(Debug, Clone)]
pub struct ExternalScreenCell {
    title: String,
    route: String,
    identifier: Option<String>,
    visible: bool,
    owner: Option<String>,
    navigator: Option<NavigatorId>,
}

impl ExternalScreenCell {
    /// Create an external-screen cell opening `route`.
    pub fn new(title: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            route: route.into(),
            identifier: None,
            visible: true,
            owner: None,
            navigator: None,
        }
    }

    /// Set the cell's identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the cell's visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the navigator handle used to open the route.
    pub fn with_navigator(mut self, navigator: NavigatorId) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// The external route.
    pub fn route(&self) -> &str {
        &self.route
    }
}

/// A settings row.
#[derive(Debug, Clone)]
pub enum CellDescriptor {
    /// A static row.
    Plain(PlainCell),
    /// A row bound to a settings property.
    Property(PropertyCell),
    /// A nested group presented as its own screen.
    Group(GroupDescriptor),
    /// A row leaving the settings tree.
    ExternalScreen(ExternalScreenCell),
}

impl CellDescriptor {
    /// The row title.
    pub fn title(&self) -> &str {
        match self {
            Self::Plain(cell) => &cell.title,
            Self::Property(cell) => property_label(cell.property),
            Self::Group(group) => group.title(),
            Self::ExternalScreen(cell) => &cell.title,
        }
    }

    /// The cell's identifier, if it has one.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Plain(cell) => cell.identifier.as_deref(),
            Self::Property(cell) => cell.identifier.as_deref(),
            Self::Group(group) => group.identifier(),
            Self::ExternalScreen(cell) => cell.identifier.as_deref(),
        }
    }

    /// Whether the row is currently shown.
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Plain(cell) => cell.visible,
            Self::Property(cell) => cell.visible,
            Self::Group(group) => group.is_visible(),
            Self::ExternalScreen(cell) => cell.visible,
        }
    }

    /// The identifier of the group this cell belongs to, if any.
    pub fn owner(&self) -> Option<&str> {
        match self {
            Self::Plain(cell) => cell.owner.as_deref(),
            Self::Property(cell) => cell.owner.as_deref(),
            Self::Group(group) => group.owner(),
            Self::ExternalScreen(cell) => cell.owner.as_deref(),
        }
    }

    pub(crate) fn set_owner(&mut self, owner: impl Into<String>) {
        let owner = Some(owner.into());
        match self {
            Self::Plain(cell) => cell.owner = owner,
            Self::Property(cell) => cell.owner = owner,
            Self::Group(group) => group.set_owner(owner),
            Self::ExternalScreen(cell) => cell.owner = owner,
        }
    }

    /// Handle the user selecting this row.
    ///
    /// Plain cells ignore selection. Property cells forward `value` to their
    /// apply callback. Groups push their generated screen through their
    /// navigator handle. External-screen cells open their route. A missing
    /// value or an unresolvable navigator is a silent no-op.
    pub fn select(&self, value: Option<PropertyValue>) {
        match self {
            Self::Plain(_) => {}
            Self::Property(cell) => {
                if let Some(value) = value {
                    (cell.apply)(value);
                } else {
                    murmur_debug!(
                        "property cell selected without a value: property={:?}",
                        cell.property
                    );
                }
            }
            Self::Group(group) => group.select(),
            Self::ExternalScreen(cell) => {
                let Some(navigator) = cell.navigator.and_then(resolve_navigator) else {
                    murmur_debug!("external route has no navigator: route={}", cell.route);
                    return;
                };
                navigator.open_external(&cell.route);
            }
        }
    }

    /// Populate a row view with this cell's content.
    ///
    /// The title is always set. The value text is set only when the cell has
    /// one to offer: a property cell's value provider, or a group's preview
    /// generator. Otherwise the view's value text is left untouched.
    pub fn feature_cell(&self, row: &mut dyn RowView) {
        row.set_title(self.title());
        match self {
            Self::Property(cell) => {
                if let Some(provider) = &cell.value_provider {
                    row.set_value(&provider());
                }
            }
            Self::Group(group) => {
                if let Some(preview) = group.preview() {
                    row.set_value(&preview);
                }
            }
            Self::Plain(_) | Self::ExternalScreen(_) => {}
        }
    }
}

/// Identifier-based equality.
///
/// Cells without identifiers never compare equal, not even to themselves.
impl PartialEq for CellDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self.identifier(), other.identifier()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Descriptors describe live behavior (callbacks, navigator handles) and
/// cannot be reconstructed from data. Decoding always fails.
impl<'de> serde::Deserialize<'de> for CellDescriptor {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Err(serde::de::Error::custom(
            "cell descriptors cannot be decoded from serialized form",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::screen::TextRow;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn identifier_equality() {
        let a = CellDescriptor::Plain(PlainCell::new("A").with_identifier("cell.a"));
        let b = CellDescriptor::Plain(PlainCell::new("B").with_identifier("cell.a"));
        let c = CellDescriptor::Plain(PlainCell::new("A").with_identifier("cell.c"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn missing_identifier_never_equal() {
        let anon = CellDescriptor::Plain(PlainCell::new("A"));
        let named = CellDescriptor::Plain(PlainCell::new("A").with_identifier("cell.a"));
        assert_ne!(anon, anon.clone());
        assert_ne!(anon, named);
    }

    #[test]
    fn property_cell_forwards_value_to_apply() {
        let applied = Arc::new(AtomicBool::new(false));
        let flag = applied.clone();
        let cell = CellDescriptor::Property(PropertyCell::new(
            PropertyId::ReadReceipts,
            move |value| {
                assert_eq!(value, PropertyValue::Bool(true));
                flag.store(true, Ordering::SeqCst);
            },
        ));

        cell.select(Some(PropertyValue::Bool(true)));
        assert!(applied.load(Ordering::SeqCst));
    }

    #[test]
    fn property_cell_without_value_is_a_no_op() {
        let applied = Arc::new(AtomicBool::new(false));
        let flag = applied.clone();
        let cell = CellDescriptor::Property(PropertyCell::new(
            PropertyId::ReadReceipts,
            move |_| flag.store(true, Ordering::SeqCst),
        ));

        cell.select(None);
        assert!(!applied.load(Ordering::SeqCst));
    }

    #[test]
    fn property_cell_title_is_the_label() {
        let cell = CellDescriptor::Property(PropertyCell::new(PropertyId::Theme, |_| {}));
        assert_eq!(cell.title(), "Theme");
    }

    #[test]
    fn feature_cell_sets_value_from_provider() {
        let cell = CellDescriptor::Property(
            PropertyCell::new(PropertyId::Theme, |_| {}).with_value_provider(|| "Dark".to_owned()),
        );

        let mut row = TextRow::default();
        cell.feature_cell(&mut row);
        assert_eq!(row.title(), "Theme");
        assert_eq!(row.value(), "Dark");
    }

    #[test]
    fn feature_cell_leaves_value_untouched_without_provider() {
        let cell = CellDescriptor::Plain(PlainCell::new("About"));

        let mut row = TextRow::default();
        row.set_value("stale");
        cell.feature_cell(&mut row);
        assert_eq!(row.title(), "About");
        assert_eq!(row.value(), "stale");
    }

    #[test]
    fn external_cell_without_navigator_is_a_no_op() {
        let cell = CellDescriptor::ExternalScreen(ExternalScreenCell::new(
            "Open Source Licenses",
            "murmur://licenses",
        ));
        cell.select(None);
    }

    #[test]
    fn deserializing_fails() {
        let result: Result<CellDescriptor, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
