//! Built-in widget implementations.

pub mod loading_indicator;

pub use loading_indicator::{DOT_COUNT, LoadingIndicator, STEP_DURATION};
