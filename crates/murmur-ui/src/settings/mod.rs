//! The declarative settings descriptor tree.
//!
//! A settings screen is described, not built: cells make up sections,
//! sections make up groups, and a group generates the screen that presents
//! it. The tree is immutable after construction and rebuilt on change, so
//! rendering is a pure walk over descriptors.
//!
//! Descriptors never own their presenter. Navigation goes through
//! [`NavigatorId`] handles resolved against a host-registered table; a stale
//! handle turns navigation into a silent no-op instead of a dangling
//! reference.
//!
//! ```
//! use murmur_ui::settings::{
//!     CellDescriptor, GroupDescriptor, PlainCell, PropertyCell, PropertyId,
//!     SectionDescriptor,
//! };
//!
//! let group = GroupDescriptor::new(
//!     "Notifications",
//!     vec![SectionDescriptor::new(vec![
//!         CellDescriptor::Property(PropertyCell::new(
//!             PropertyId::NotificationsEnabled,
//!             |value| println!("apply {value:?}"),
//!         )),
//!         CellDescriptor::Plain(PlainCell::new("Notification Troubleshooting")),
//!     ])],
//! )
//! .with_identifier("group.notifications");
//!
//! let screen = group.generate_screen().unwrap();
//! assert_eq!(screen.section_count(), 1);
//! ```

pub mod cell;
pub mod group;
pub mod labels;
pub mod navigator;
pub mod screen;
pub mod section;

pub use cell::{CellDescriptor, ExternalScreenCell, PlainCell, PropertyCell};
pub use group::{GroupDescriptor, GroupStyle};
pub use labels::{DefaultLocalizer, Localizer, PropertyId, PropertyValue, property_label};
pub use navigator::{
    Navigator, NavigatorId, register_navigator, resolve_navigator, unregister_navigator,
};
pub use screen::{RowView, SettingsScreen, TextRow};
pub use section::SectionDescriptor;
