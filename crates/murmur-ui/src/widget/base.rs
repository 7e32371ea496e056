//! Widget base implementation.
//!
//! `WidgetBase` carries the state every widget needs: the registry id,
//! geometry, visibility and enabled flags, and the change signals. Widget
//! implementations include it as a field and delegate to it.

use murmur_ui_core::{Object, ObjectBase, ObjectId, ObjectResult, Signal};

use crate::render::Rect;

use super::geometry::SizePolicyPair;

/// The base implementation for all widgets.
pub struct WidgetBase {
    /// The underlying object base for Object trait implementation.
    object_base: ObjectBase,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// The widget's size policy for layout.
    size_policy: SizePolicyPair,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled.
    enabled: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new widget base.
    ///
    /// # Panics
    ///
    /// Panics if the global object registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        Self {
            object_base: ObjectBase::new::<T>(),
            geometry: Rect::ZERO,
            size_policy: SizePolicyPair::default(),
            visible: true,
            enabled: true,
            needs_repaint: true,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    /// Get the widget's unique object id.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }

    /// Get the widget's name.
    pub fn name(&self) -> String {
        self.object_base.name()
    }

    /// Set the widget's name.
    pub fn set_name(&self, name: impl Into<String>) {
        self.object_base.set_name(name);
    }

    /// Get the parent widget's object id.
    pub fn parent_id(&self) -> Option<ObjectId> {
        self.object_base.parent()
    }

    /// Set the parent widget.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.object_base.set_parent(parent)
    }

    /// Get the widget's geometry.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry, emitting `geometry_changed` on change.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// The widget's local rectangle: origin (0, 0), the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height)
    }

    /// Get the widget's size policy.
    #[inline]
    pub fn size_policy(&self) -> SizePolicyPair {
        self.size_policy
    }

    /// Set the widget's size policy.
    pub fn set_size_policy(&mut self, policy: SizePolicyPair) {
        self.size_policy = policy;
    }

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible, emitting `visible_changed` on
    /// change.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled, emitting `enabled_changed` on
    /// change.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called after painting).
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

impl Object for WidgetBase {
    fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_ui_core::init_global_registry;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Dummy;
    impl Object for Dummy {
        fn object_id(&self) -> ObjectId {
            unreachable!()
        }
    }

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn visibility_signal_fires_on_change_only() {
        setup();
        let mut base = WidgetBase::new::<Dummy>();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        base.visible_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        base.set_visible(true); // already visible, no emit
        assert_eq!(count.load(Ordering::SeqCst), 0);

        base.set_visible(false);
        base.set_visible(true);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn geometry_change_marks_repaint() {
        setup();
        let mut base = WidgetBase::new::<Dummy>();
        base.clear_repaint_flag();
        assert!(!base.needs_repaint());

        base.set_geometry(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(base.needs_repaint());
        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }
}
