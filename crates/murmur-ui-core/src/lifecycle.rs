//! App-lifecycle notifications.
//!
//! The host shell forwards platform lifecycle transitions here. The one that
//! matters to widgets is `resumed`: platform-driven animations are paused
//! while the app is backgrounded, so anything animating must restart when the
//! app comes back to the foreground.
//!
//! Observers connect with [`Signal::connect_scoped`] and keep the returned
//! [`ConnectionGuard`](crate::ConnectionGuard) alive for as long as they want
//! the subscription; dropping the guard deregisters on every teardown path.
//!
//! # Example
//!
//! ```
//! use murmur_ui_core::AppLifecycle;
//!
//! let _guard = AppLifecycle::instance().resumed.connect_scoped(|_| {
//!     // restart animations
//! });
//!
//! AppLifecycle::instance().notify_resumed();
//! ```

use std::sync::OnceLock;

use crate::signal::Signal;

/// Process-global lifecycle signal hub.
pub struct AppLifecycle {
    /// Emitted when the application returns to the foreground.
    pub resumed: Signal<()>,
    /// Emitted when the application is about to be backgrounded.
    pub suspended: Signal<()>,
}

static LIFECYCLE: OnceLock<AppLifecycle> = OnceLock::new();

impl AppLifecycle {
    /// Get the process-global instance, creating it on first use.
    pub fn instance() -> &'static AppLifecycle {
        LIFECYCLE.get_or_init(|| AppLifecycle {
            resumed: Signal::new(),
            suspended: Signal::new(),
        })
    }

    /// Notify observers that the application resumed.
    ///
    /// Called by the host shell on the UI thread.
    pub fn notify_resumed(&self) {
        tracing::debug!(target: "murmur_ui_core::lifecycle", "application resumed");
        self.resumed.emit(());
    }

    /// Notify observers that the application is suspending.
    pub fn notify_suspended(&self) {
        tracing::debug!(target: "murmur_ui_core::lifecycle", "application suspended");
        self.suspended.emit(());
    }
}

static_assertions::assert_impl_all!(AppLifecycle: Send, Sync);
