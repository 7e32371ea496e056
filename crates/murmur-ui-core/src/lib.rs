//! Core systems for the Murmur client UI.
//!
//! This crate provides the foundational components shared by the Murmur
//! widget and settings layers:
//!
//! - **Object Model**: Non-owning [`ObjectId`] handles and the parent-child
//!   registry behind every upward "back-reference" in the UI tree
//! - **Signal/Slot System**: Type-safe change notification with RAII
//!   connection guards
//! - **Timers**: One-shot and repeating timers for a host event loop to drive
//! - **App Lifecycle**: Resume/suspend notifications that animated widgets
//!   subscribe to
//!
//! # Signal/Slot Example
//!
//! ```
//! use murmur_ui_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
mod lifecycle;
pub mod logging;
pub mod object;
pub mod signal;
mod timer;

pub use error::{CoreError, Result, TimerError};
pub use lifecycle::AppLifecycle;
pub use logging::PerfSpan;
pub use object::{
    Object, ObjectBase, ObjectError, ObjectId, ObjectRegistry, ObjectResult, SharedObjectRegistry,
    global_registry, init_global_registry,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{SharedTimerManager, TimerId, TimerKind, TimerManager};
