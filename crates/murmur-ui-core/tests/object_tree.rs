//! Integration tests driving the object registry, signals and timers
//! together, the way a widget layer composes them.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use murmur_ui_core::{
    Object, ObjectBase, ObjectId, Signal, TimerManager, global_registry, init_global_registry,
};

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    init_global_registry();
}

struct Panel {
    base: ObjectBase,
    shown: Signal<bool>,
}

impl Panel {
    fn new() -> Self {
        Self {
            base: ObjectBase::new::<Self>(),
            shown: Signal::new(),
        }
    }
}

impl Object for Panel {
    fn object_id(&self) -> ObjectId {
        self.base.id()
    }
}

#[test]
fn tree_with_signals() {
    setup();

    let window = Panel::new();
    let sidebar = Panel::new();
    let list = Panel::new();
    sidebar.base.set_parent(Some(window.object_id())).unwrap();
    list.base.set_parent(Some(sidebar.object_id())).unwrap();

    let registry = global_registry().unwrap();
    assert_eq!(
        registry.ancestors(list.object_id()).unwrap(),
        vec![sidebar.object_id(), window.object_id()]
    );

    let shown_count = Arc::new(AtomicUsize::new(0));
    let count = shown_count.clone();
    sidebar.shown.connect(move |&visible| {
        if visible {
            count.fetch_add(1, Ordering::SeqCst);
        }
    });

    sidebar.shown.emit(true);
    sidebar.shown.emit(false);
    sidebar.shown.emit(true);
    assert_eq!(shown_count.load(Ordering::SeqCst), 2);
}

#[test]
fn dropped_subtree_leaves_no_ids_behind() {
    setup();

    let parent_id;
    let child_id;
    {
        let parent = Panel::new();
        let child = Panel::new();
        child.base.set_parent(Some(parent.object_id())).unwrap();
        parent_id = parent.object_id();
        child_id = child.object_id();
    }

    let registry = global_registry().unwrap();
    assert!(!registry.contains(parent_id));
    assert!(!registry.contains(child_id));
}

#[test]
fn repeating_timer_drives_ticks() {
    setup();

    let mut timers = TimerManager::new();
    let tick = timers.start_repeating(Duration::ZERO);
    let one_shot = timers.start_one_shot(Duration::ZERO);

    let first = timers.process_expired();
    assert!(first.contains(&tick));
    assert!(first.contains(&one_shot));

    // Only the repeating timer survives the first drain.
    let second = timers.process_expired();
    assert_eq!(second, vec![tick]);
    assert_eq!(timers.active_count(), 1);
}
