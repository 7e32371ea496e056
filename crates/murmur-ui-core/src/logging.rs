//! Logging helpers for the Murmur UI layer.
//!
//! Thin wrappers around the `tracing` crate macros with consistent target
//! naming, plus a RAII span for timing descriptor-tree walks and other
//! coarse operations.

use std::time::Instant;

/// A guard that records the duration of an operation when dropped.
#[derive(Debug)]
pub struct PerfSpan {
    name: &'static str,
    start: Instant,
}

impl PerfSpan {
    /// Start timing `name`. The duration is logged at debug level on drop.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for PerfSpan {
    fn drop(&mut self) {
        tracing::debug!(
            target: "murmur_ui::perf",
            operation = self.name,
            elapsed_us = self.start.elapsed().as_micros() as u64,
            "operation finished"
        );
    }
}

/// Macros for common tracing patterns.
///
/// These are just wrappers around the `tracing` crate macros with consistent
/// target naming.
#[macro_export]
macro_rules! murmur_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "murmur_ui", $($arg)*)
    };
}

#[macro_export]
macro_rules! murmur_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "murmur_ui", $($arg)*)
    };
}

#[macro_export]
macro_rules! murmur_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "murmur_ui", $($arg)*)
    };
}

#[macro_export]
macro_rules! murmur_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "murmur_ui", $($arg)*)
    };
}

#[macro_export]
macro_rules! murmur_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "murmur_ui", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perf_span_drop_does_not_panic() {
        let span = PerfSpan::new("walk");
        drop(span);
    }

    #[test]
    fn macros_expand() {
        murmur_trace!("trace message");
        murmur_debug!(count = 3, "debug message");
        murmur_info!("info message");
        murmur_warn!("warn message");
        murmur_error!("error message");
    }
}
