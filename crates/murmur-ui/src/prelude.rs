//! Convenient re-exports of the most commonly used types.
//!
//! ```
//! use murmur_ui::prelude::*;
//! ```

pub use crate::render::{Color, Point, Rect, Size};
pub use crate::settings::{
    CellDescriptor, ExternalScreenCell, GroupDescriptor, GroupStyle, Navigator, NavigatorId,
    PlainCell, PropertyCell, PropertyId, PropertyValue, RowView, SectionDescriptor,
    SettingsScreen, TextRow, property_label, register_navigator, unregister_navigator,
};
pub use crate::widget::{
    LoadingIndicator, PaintContext, Painter, RecordingPainter, SizeHint, SizePolicy, Widget,
    WidgetBase, WidgetEvent,
};

pub use murmur_ui_core::{
    AppLifecycle, Object, ObjectId, Signal, TimerId, TimerManager, init_global_registry,
};
