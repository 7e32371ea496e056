//! Animation support for widgets.
//!
//! This module provides:
//! - Easing functions for smooth animations
//! - Repeating keyframe tracks for cyclic effects

pub mod easing;
pub mod keyframes;

pub use easing::{Easing, ease, lerp_eased};
pub use keyframes::{ColorKeyframes, Keyframe};
