//! Core widget trait definitions.

use murmur_ui_core::Object;

use crate::render::{Rect, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::{SizeHint, SizePolicyPair};
use super::painting::Painter;

/// Context provided during widget painting.
///
/// Wraps the host painter together with the widget's local rectangle.
pub struct PaintContext<'a> {
    painter: &'a mut dyn Painter,
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(painter: &'a mut dyn Painter, widget_rect: Rect) -> Self {
        Self {
            painter,
            widget_rect,
        }
    }

    /// Get the painter.
    #[inline]
    pub fn painter(&mut self) -> &mut dyn Painter {
        self.painter
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }
}

/// The core trait for all widgets.
///
/// Implementors provide access to their [`WidgetBase`], a [`SizeHint`] for
/// the host layout, and a `paint` description. Event handling defaults to
/// "not handled".
pub trait Widget: Object + Send + Sync {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget.
    ///
    /// The painter's coordinate system is widget-local: (0, 0) is the
    /// widget's top-left corner.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle an event. Return `true` if the event was consumed.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    /// Get the widget's geometry.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    /// Get the widget's size policy.
    fn size_policy(&self) -> SizePolicyPair {
        self.widget_base().size_policy()
    }

    /// Set the widget's size policy.
    fn set_size_policy(&mut self, policy: SizePolicyPair) {
        self.widget_base_mut().set_size_policy(policy);
    }

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    ///
    /// Delivers a `Show`/`Hide` event to the widget when the state actually
    /// changes, so widgets that animate can react.
    fn set_visible(&mut self, visible: bool) {
        if self.widget_base().is_visible() == visible {
            return;
        }
        self.widget_base_mut().set_visible(visible);
        let mut event = if visible {
            WidgetEvent::show()
        } else {
            WidgetEvent::hide()
        };
        self.event(&mut event);
    }

    /// Show the widget.
    fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the widget.
    fn hide(&mut self) {
        self.set_visible(false);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }
}
