//! A three-dot pulsing loading indicator.
//!
//! Three dots sit in a row, each cycling between an active and an inactive
//! color. The dots share one pulse track, phase-shifted by one step per dot,
//! so the lit dot appears to travel along the row.
//!
//! The animation follows visibility: a `Show` event starts it, a `Hide`
//! event stops it, and when the application resumes from the background the
//! indicator restarts its cycle so the dots never freeze mid-pulse.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use murmur_ui_core::{AppLifecycle, ConnectionGuard, Object, ObjectId, TimerId, murmur_debug};

use crate::render::{Color, Point};
use crate::widget::animation::ColorKeyframes;
use crate::widget::base::WidgetBase;
use crate::widget::events::WidgetEvent;
use crate::widget::geometry::SizeHint;
use crate::widget::traits::{PaintContext, Widget};

/// Duration of one animation step. The full pulse cycle is four steps.
pub const STEP_DURATION: Duration = Duration::from_millis(350);

/// Number of dots in the indicator.
pub const DOT_COUNT: usize = 3;

const DEFAULT_DOT_RADIUS: f32 = 4.0;
const DEFAULT_SPACING: f32 = 6.0;

/// Animation state.
#[derive(Debug, Clone, Copy)]
enum IndicatorState {
    /// Not animating. All dots render in the inactive color.
    Stopped,
    /// Animating since `started`.
    Running { started: Instant },
}

/// A pulsing three-dot loading indicator.
pub struct LoadingIndicator {
    base: WidgetBase,

    dot_radius: f32,
    spacing: f32,
    active_color: Color,
    inactive_color: Color,

    state: IndicatorState,

    /// Set by the app-resumed observer; consumed on the next event.
    resume_pending: Arc<AtomicBool>,

    /// Repaint timer assigned by the host, if any.
    repaint_timer: Option<TimerId>,

    /// Keeps the app-resumed observer connected for the widget's lifetime.
    _resume_guard: ConnectionGuard<()>,
}

impl LoadingIndicator {
    /// Create a new loading indicator.
    ///
    /// The indicator observes application resume notifications for as long
    /// as it lives; the observer is disconnected on drop.
    ///
    /// # Panics
    ///
    /// Panics if the global object registry is not initialized.
    pub fn new() -> Self {
        let resume_pending = Arc::new(AtomicBool::new(false));
        let flag = resume_pending.clone();
        let resume_guard = AppLifecycle::instance()
            .resumed
            .connect_scoped(move |_| {
                flag.store(true, Ordering::SeqCst);
            });

        Self {
            base: WidgetBase::new::<Self>(),
            dot_radius: DEFAULT_DOT_RADIUS,
            spacing: DEFAULT_SPACING,
            active_color: Color::from_rgb8(0x4d, 0x8f, 0xd1),
            inactive_color: Color::from_rgb8(0xc8, 0xcc, 0xd2),
            state: IndicatorState::Stopped,
            resume_pending,
            repaint_timer: None,
            _resume_guard: resume_guard,
        }
    }

    /// Set the dot radius.
    pub fn with_dot_radius(mut self, radius: f32) -> Self {
        self.dot_radius = radius;
        self
    }

    /// Set the gap between adjacent dots.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the color of a dot at the peak of its pulse.
    pub fn with_active_color(mut self, color: Color) -> Self {
        self.active_color = color;
        self
    }

    /// Set the color of a dot at rest.
    pub fn with_inactive_color(mut self, color: Color) -> Self {
        self.inactive_color = color;
        self
    }

    /// Check whether the animation is currently running.
    pub fn is_running(&self) -> bool {
        matches!(self.state, IndicatorState::Running { .. })
    }

    /// Assign the repeating timer the host uses to drive repaints.
    ///
    /// Timer events for this id mark the widget for repaint; events for any
    /// other timer are ignored.
    pub fn set_repaint_timer(&mut self, timer: Option<TimerId>) {
        self.repaint_timer = timer;
    }

    /// The phase offset of dot `index` within the shared pulse cycle.
    pub fn phase_offset(index: usize) -> Duration {
        STEP_DURATION * index as u32
    }

    /// The colors of all dots at `elapsed` time into a running animation.
    pub fn dot_colors_at(&self, elapsed: Duration) -> [Color; DOT_COUNT] {
        let mut colors = [self.inactive_color; DOT_COUNT];
        for (index, slot) in colors.iter_mut().enumerate() {
            let track = ColorKeyframes::pulse(
                self.active_color,
                self.inactive_color,
                STEP_DURATION,
            )
            .with_phase(Self::phase_offset(index));
            *slot = track.sample(elapsed);
        }
        colors
    }

    fn start(&mut self) {
        if self.is_running() {
            return;
        }
        murmur_debug!("loading indicator started: id={:?}", self.base.object_id());
        self.state = IndicatorState::Running {
            started: Instant::now(),
        };
        self.base.update();
    }

    fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        murmur_debug!("loading indicator stopped: id={:?}", self.base.object_id());
        self.state = IndicatorState::Stopped;
        self.base.update();
    }

    /// Restart the cycle if a resume notification arrived since the last
    /// event. Resumes while hidden are discarded.
    fn apply_pending_resume(&mut self) {
        if !self.resume_pending.swap(false, Ordering::SeqCst) {
            return;
        }
        if !self.base.is_visible() {
            return;
        }
        self.state = IndicatorState::Running {
            started: Instant::now(),
        };
        self.base.update();
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for LoadingIndicator {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for LoadingIndicator {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let width = DOT_COUNT as f32 * self.dot_radius * 2.0
            + (DOT_COUNT - 1) as f32 * self.spacing;
        let height = self.dot_radius * 2.0;
        SizeHint::from_dimensions(width, height)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let colors = match self.state {
            IndicatorState::Stopped => [self.inactive_color; DOT_COUNT],
            IndicatorState::Running { started } => self.dot_colors_at(started.elapsed()),
        };

        let content_width = DOT_COUNT as f32 * self.dot_radius * 2.0
            + (DOT_COUNT - 1) as f32 * self.spacing;
        let first_center_x = (ctx.width() - content_width) / 2.0 + self.dot_radius;
        let center_y = ctx.height() / 2.0;
        let pitch = self.dot_radius * 2.0 + self.spacing;

        for (index, color) in colors.iter().enumerate() {
            let center = Point::new(first_center_x + index as f32 * pitch, center_y);
            ctx.painter().fill_circle(center, self.dot_radius, *color);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        self.apply_pending_resume();

        match event {
            WidgetEvent::Show(_) => {
                self.start();
                event.accept();
                true
            }
            WidgetEvent::Hide(_) => {
                self.stop();
                event.accept();
                true
            }
            WidgetEvent::Timer(timer) => {
                if self.repaint_timer == Some(timer.id) {
                    self.base.update();
                    event.accept();
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rect;
    use crate::widget::painting::{DrawCommand, RecordingPainter};
    use murmur_ui_core::init_global_registry;

    fn setup() -> LoadingIndicator {
        init_global_registry();
        let mut indicator = LoadingIndicator::new();
        indicator.set_geometry(Rect::new(0.0, 0.0, 60.0, 20.0));
        indicator
    }

    fn assert_color_near(actual: Color, expected: Color) {
        assert!(
            (actual.r - expected.r).abs() < 0.001
                && (actual.g - expected.g).abs() < 0.001
                && (actual.b - expected.b).abs() < 0.001,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn show_starts_and_hide_stops() {
        let mut indicator = setup();
        assert!(!indicator.is_running());

        assert!(indicator.event(&mut WidgetEvent::show()));
        assert!(indicator.is_running());

        assert!(indicator.event(&mut WidgetEvent::hide()));
        assert!(!indicator.is_running());
    }

    #[test]
    fn hide_via_widget_trait_stops_animation() {
        let mut indicator = setup();
        indicator.event(&mut WidgetEvent::show());
        assert!(indicator.is_running());

        indicator.hide();
        assert!(!indicator.is_running());

        indicator.show();
        assert!(indicator.is_running());
    }

    #[test]
    fn stopped_paints_all_dots_inactive() {
        let indicator = setup();
        let mut painter = RecordingPainter::new();
        let mut ctx = PaintContext::new(&mut painter, indicator.rect());
        indicator.paint(&mut ctx);

        let commands = painter.commands();
        assert_eq!(commands.len(), DOT_COUNT);
        for command in commands {
            match command {
                DrawCommand::FillCircle { color, .. } => {
                    assert_eq!(*color, Color::from_rgb8(0xc8, 0xcc, 0xd2));
                }
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }

    #[test]
    fn dots_are_phase_shifted_by_one_step() {
        let indicator = setup();
        let track = ColorKeyframes::pulse(
            Color::from_rgb8(0x4d, 0x8f, 0xd1),
            Color::from_rgb8(0xc8, 0xcc, 0xd2),
            STEP_DURATION,
        );

        let probe = STEP_DURATION / 2;
        let colors = indicator.dot_colors_at(probe);
        assert_color_near(colors[0], track.sample(probe));
        assert_color_near(colors[1], track.sample(probe + STEP_DURATION));
        assert_color_near(colors[2], track.sample(probe + STEP_DURATION * 2));
    }

    #[test]
    fn phase_offsets_are_multiples_of_the_step() {
        assert_eq!(LoadingIndicator::phase_offset(0), Duration::ZERO);
        assert_eq!(LoadingIndicator::phase_offset(1), STEP_DURATION);
        assert_eq!(LoadingIndicator::phase_offset(2), STEP_DURATION * 2);
    }

    #[test]
    fn first_dot_is_active_at_cycle_start() {
        let indicator = setup();
        let colors = indicator.dot_colors_at(Duration::ZERO);
        assert_color_near(colors[0], Color::from_rgb8(0x4d, 0x8f, 0xd1));
        assert_color_near(colors[1], Color::from_rgb8(0xc8, 0xcc, 0xd2));
        assert_color_near(colors[2], Color::from_rgb8(0xc8, 0xcc, 0xd2));
    }

    #[test]
    fn resume_while_hidden_does_not_start() {
        let mut indicator = setup();
        indicator.event(&mut WidgetEvent::hide());
        assert!(!indicator.is_running());

        indicator.resume_pending.store(true, Ordering::SeqCst);
        indicator.event(&mut WidgetEvent::timer(TimerId::default()));
        assert!(!indicator.is_running());
    }

    #[test]
    fn resume_while_visible_restarts() {
        let mut indicator = setup();
        indicator.event(&mut WidgetEvent::show());
        assert!(indicator.is_running());

        indicator.resume_pending.store(true, Ordering::SeqCst);
        indicator.event(&mut WidgetEvent::timer(TimerId::default()));
        assert!(indicator.is_running());
    }

    #[test]
    fn drop_disconnects_lifecycle_observer() {
        let indicator = setup();
        let flag = indicator.resume_pending.clone();
        drop(indicator);

        // The observer was the only other holder of the flag; after the
        // guard disconnects it, nothing can set it anymore.
        murmur_ui_core::AppLifecycle::instance().notify_resumed();
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[test]
    fn matching_timer_event_marks_repaint() {
        let mut indicator = setup();
        indicator.event(&mut WidgetEvent::show());
        indicator.widget_base_mut().clear_repaint_flag();

        // Unassigned timer: ignored.
        assert!(!indicator.event(&mut WidgetEvent::timer(TimerId::default())));
        assert!(!indicator.widget_base().needs_repaint());

        indicator.set_repaint_timer(Some(TimerId::default()));
        assert!(indicator.event(&mut WidgetEvent::timer(TimerId::default())));
        assert!(indicator.widget_base().needs_repaint());
    }

    #[test]
    fn size_hint_fits_three_dots() {
        let indicator = setup();
        let hint = indicator.size_hint();
        // 3 dots of radius 4 plus two 6px gaps.
        assert_eq!(hint.preferred.width, 36.0);
        assert_eq!(hint.preferred.height, 8.0);
    }
}

// Compile-time verification of thread safety traits
static_assertions::assert_impl_all!(LoadingIndicator: Send, Sync);
