//! Murmur UI — the presentation layer of the Murmur messaging client.
//!
//! This crate provides:
//! - **Widgets**: a small widget system (base, events, size hints, painting
//!   seam) and the built-in [`LoadingIndicator`](widget::LoadingIndicator)
//! - **Animation**: easing functions and repeating keyframe tracks
//! - **Settings**: the declarative descriptor tree behind the settings
//!   screens, with property labels and the navigation seam
//!
//! Rendering and windowing stay on the host side: widgets describe
//! themselves against the [`Painter`](widget::Painter) trait, and screens
//! are pushed through the [`Navigator`](settings::Navigator) trait.
//!
//! # Quick start
//!
//! ```
//! use murmur_ui::widget::{LoadingIndicator, PaintContext, RecordingPainter, Widget, WidgetEvent};
//!
//! murmur_ui_core::init_global_registry();
//!
//! let mut indicator = LoadingIndicator::new();
//! indicator.set_geometry(murmur_ui::render::Rect::new(0.0, 0.0, 60.0, 20.0));
//! indicator.event(&mut WidgetEvent::show());
//! assert!(indicator.is_running());
//!
//! let mut painter = RecordingPainter::new();
//! let mut ctx = PaintContext::new(&mut painter, indicator.rect());
//! indicator.paint(&mut ctx);
//! assert_eq!(painter.commands().len(), 3);
//! ```

pub mod prelude;
pub mod render;
pub mod settings;
pub mod widget;

pub use murmur_ui_core::{
    AppLifecycle, ConnectionGuard, ConnectionId, Object, ObjectId, Signal, TimerId, TimerKind,
    TimerManager, global_registry, init_global_registry,
};
