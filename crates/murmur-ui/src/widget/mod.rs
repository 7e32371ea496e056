//! The widget system.
//!
//! This module provides:
//! - The core [`Widget`] trait and [`WidgetBase`] implementation
//! - Widget events with accept/ignore semantics
//! - Size hints and policies for layout negotiation
//! - The [`Painter`](painting::Painter) seam to the host renderer
//! - Animation primitives and the built-in widgets

pub mod animation;
pub mod base;
pub mod events;
pub mod geometry;
pub mod painting;
pub mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{EventBase, HideEvent, ShowEvent, TimerEvent, WidgetEvent};
pub use geometry::{SizeHint, SizePolicy, SizePolicyPair};
pub use painting::{DrawCommand, Painter, RecordingPainter};
pub use traits::{PaintContext, Widget};
pub use widgets::LoadingIndicator;
