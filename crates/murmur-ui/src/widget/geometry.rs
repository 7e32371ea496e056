//! Size hints and policies for layout negotiation.

use crate::render::Size;

/// How a widget behaves when a layout distributes space along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Cannot grow or shrink past its hint.
    Fixed,
    /// Can grow or shrink, but has a preferred size.
    #[default]
    Preferred,
    /// Actively wants more space.
    Expanding,
}

/// A horizontal/vertical pair of size policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    pub horizontal: SizePolicy,
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    pub const fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self { horizontal, vertical }
    }
}

/// A widget's preferred and minimum sizes, consulted by the host layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    pub preferred: Size,
    pub minimum: Size,
}

impl SizeHint {
    /// A hint with the given preferred dimensions and no minimum.
    pub const fn from_dimensions(width: f32, height: f32) -> Self {
        Self {
            preferred: Size::new(width, height),
            minimum: Size::ZERO,
        }
    }

    /// Set the minimum dimensions (builder pattern).
    pub const fn with_minimum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.minimum = Size::new(width, height);
        self
    }
}
