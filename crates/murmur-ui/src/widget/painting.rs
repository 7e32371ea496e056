//! The painting seam between widgets and the host renderer.
//!
//! Widgets describe themselves as fill commands against a [`Painter`]; the
//! host supplies a real implementation backed by whatever it draws with. The
//! [`RecordingPainter`] implementation captures the commands so tests can
//! assert on exactly what a widget would draw.

use crate::render::{Color, Point, Rect};

/// Receives a widget's draw commands.
///
/// Coordinates are widget-local: (0, 0) is the widget's top-left corner.
pub trait Painter {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a circle with a solid color.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// A single captured draw command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    FillCircle { center: Point, radius: f32, color: Color },
}

/// A [`Painter`] that records commands instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    commands: Vec<DrawCommand>,
}

impl RecordingPainter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }
}
