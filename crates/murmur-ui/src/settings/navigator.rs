//! Navigation seam and the navigator handle table.
//!
//! Descriptors never own the controller that presents them. Instead a host
//! registers its navigator here and hands the returned [`NavigatorId`] to the
//! descriptors that need it. The id is a non-owning handle: once the host
//! unregisters, every descriptor still holding the id resolves to `None` and
//! its navigation requests become silent no-ops.

use std::sync::{Arc, OnceLock};

use murmur_ui_core::murmur_trace;
use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use super::screen::SettingsScreen;

new_key_type! {
    /// Handle to a registered [`Navigator`].
    pub struct NavigatorId;
}

/// Presents settings screens and external routes.
pub trait Navigator: Send + Sync {
    /// Push a settings screen onto the navigation stack.
    fn push(&self, screen: SettingsScreen, animated: bool);

    /// Open a route outside the settings tree (system screens, web pages).
    fn open_external(&self, _route: &str) {}
}

static NAVIGATORS: OnceLock<Mutex<SlotMap<NavigatorId, Arc<dyn Navigator>>>> = OnceLock::new();

fn table() -> &'static Mutex<SlotMap<NavigatorId, Arc<dyn Navigator>>> {
    NAVIGATORS.get_or_init(|| Mutex::new(SlotMap::with_key()))
}

/// Register a navigator, returning its handle.
pub fn register_navigator(navigator: Arc<dyn Navigator>) -> NavigatorId {
    let id = table().lock().insert(navigator);
    murmur_trace!("navigator registered: id={id:?}");
    id
}

/// Unregister a navigator. Returns `false` if the handle was already stale.
pub fn unregister_navigator(id: NavigatorId) -> bool {
    let removed = table().lock().remove(id).is_some();
    murmur_trace!("navigator unregistered: id={id:?} removed={removed}");
    removed
}

/// Resolve a handle to its navigator, or `None` if the handle is stale.
pub fn resolve_navigator(id: NavigatorId) -> Option<Arc<dyn Navigator>> {
    table().lock().get(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as TestMutex;

    #[derive(Default)]
    struct PushLog {
        pushed: TestMutex<Vec<String>>,
    }

    impl Navigator for PushLog {
        fn push(&self, screen: SettingsScreen, _animated: bool) {
            self.pushed.lock().push(screen.title().to_owned());
        }
    }

    #[test]
    fn register_resolve_unregister() {
        let navigator = Arc::new(PushLog::default());
        let id = register_navigator(navigator.clone());

        assert!(resolve_navigator(id).is_some());
        assert!(unregister_navigator(id));
        assert!(resolve_navigator(id).is_none());
        assert!(!unregister_navigator(id));
    }

    #[test]
    fn stale_default_handle_resolves_to_none() {
        assert!(resolve_navigator(NavigatorId::default()).is_none());
    }
}
