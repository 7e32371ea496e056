//! End-to-end tests for the settings descriptor tree: a realistic settings
//! root driven the way a host screen controller would drive it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use murmur_ui::settings::{
    CellDescriptor, ExternalScreenCell, GroupDescriptor, GroupStyle, Navigator, PlainCell,
    PropertyCell, PropertyId, PropertyValue, SectionDescriptor, SettingsScreen, TextRow,
    property_label, register_navigator, unregister_navigator,
};

#[derive(Default)]
struct StackNavigator {
    pushed: Mutex<Vec<(String, bool)>>,
    external: Mutex<Vec<String>>,
}

impl Navigator for StackNavigator {
    fn push(&self, screen: SettingsScreen, animated: bool) {
        self.pushed.lock().push((screen.title().to_owned(), animated));
    }

    fn open_external(&self, route: &str) {
        self.external.lock().push(route.to_owned());
    }
}

fn notifications_group() -> (GroupDescriptor, Arc<AtomicUsize>) {
    let applied = Arc::new(AtomicUsize::new(0));
    let counter = applied.clone();

    let group = GroupDescriptor::new(
        "Notifications",
        vec![
            SectionDescriptor::new(vec![
                CellDescriptor::Property(
                    PropertyCell::new(PropertyId::NotificationsEnabled, move |value| {
                        assert!(matches!(value, PropertyValue::Bool(_)));
                        counter.fetch_add(1, Ordering::SeqCst);
                    })
                    .with_identifier("cell.notifications.enabled")
                    .with_value_provider(|| "On".to_owned()),
                ),
                CellDescriptor::Property(
                    PropertyCell::new(PropertyId::NotificationSound, |_| {})
                        .with_visible(false),
                ),
                CellDescriptor::Plain(PlainCell::new("Troubleshooting")),
            ])
            .with_header("Alerts"),
            SectionDescriptor::new(vec![CellDescriptor::Plain(PlainCell::new(
                "Muted Chats",
            ))])
            .with_predicate(|_| false),
            SectionDescriptor::new(vec![CellDescriptor::ExternalScreen(
                ExternalScreenCell::new("System Settings", "app-settings://murmur"),
            )]),
        ],
    )
    .with_identifier("group.notifications")
    .with_style(GroupStyle::Grouped)
    .with_preview(|group| Some(format!("{} sections", group.items().len())));

    (group, applied)
}

#[test]
fn visible_walk_skips_hidden_sections_and_cells() {
    let (group, _) = notifications_group();

    let visible_sections = group.visible_items();
    assert_eq!(visible_sections.len(), 2);
    assert_eq!(visible_sections[0].header(), Some("Alerts"));

    let first_rows = visible_sections[0].visible_cell_descriptors();
    let titles: Vec<&str> = first_rows.iter().map(|cell| cell.title()).collect();
    assert_eq!(titles, ["Notifications", "Troubleshooting"]);
}

#[test]
fn static_enumeration_covers_every_cell() {
    let (group, _) = notifications_group();

    let all: Vec<&str> = group
        .all_cell_descriptors()
        .iter()
        .map(|cell| cell.title())
        .collect();
    assert_eq!(
        all,
        [
            "Notifications",
            "Notification Sound",
            "Troubleshooting",
            "Muted Chats",
            "System Settings",
        ]
    );
}

#[test]
fn owner_stamps_reach_every_cell() {
    let (group, _) = notifications_group();
    for cell in group.all_cell_descriptors() {
        assert_eq!(cell.owner(), Some("group.notifications"));
    }
}

#[test]
fn screen_binds_and_activates_rows() {
    let (group, applied) = notifications_group();
    let screen = group.generate_screen().unwrap();

    assert_eq!(screen.title(), "Notifications");
    assert_eq!(screen.section_count(), 2);
    assert_eq!(screen.row_count(0), Some(2));

    let mut row = TextRow::default();
    assert!(screen.bind_row(0, 0, &mut row));
    assert_eq!(row.title(), "Notifications");
    assert_eq!(row.value(), "On");

    assert!(screen.activate_row(0, 0, Some(PropertyValue::Bool(false))));
    assert_eq!(applied.load(Ordering::SeqCst), 1);

    // Plain row: activation is accepted but does nothing.
    assert!(screen.activate_row(0, 1, None));
    assert_eq!(applied.load(Ordering::SeqCst), 1);
}

#[test]
fn drilldown_pushes_through_the_navigator_and_goes_stale_cleanly() {
    let navigator = Arc::new(StackNavigator::default());
    let id = register_navigator(navigator.clone());

    let (inner, _) = notifications_group();
    let root = GroupDescriptor::new(
        "Settings",
        vec![SectionDescriptor::new(vec![CellDescriptor::Group(
            inner.with_navigator(id),
        )])],
    );

    let screen = root.generate_screen().unwrap();
    assert!(screen.activate_row(0, 0, None));
    assert_eq!(*navigator.pushed.lock(), [("Notifications".to_owned(), true)]);

    unregister_navigator(id);
    assert!(screen.activate_row(0, 0, None));
    assert_eq!(navigator.pushed.lock().len(), 1);
}

#[test]
fn external_route_opens_through_its_navigator() {
    let navigator = Arc::new(StackNavigator::default());
    let id = register_navigator(navigator.clone());

    let cell = CellDescriptor::ExternalScreen(
        ExternalScreenCell::new("System Settings", "app-settings://murmur").with_navigator(id),
    );
    cell.select(None);

    assert_eq!(*navigator.external.lock(), ["app-settings://murmur".to_owned()]);
    unregister_navigator(id);
}

#[test]
fn labels_are_stable_across_resolutions() {
    for property in PropertyId::ALL {
        assert_eq!(property_label(property), property_label(property));
    }
}

#[test]
fn descriptors_refuse_to_decode() {
    assert!(serde_json::from_str::<CellDescriptor>("{}").is_err());
    assert!(serde_json::from_str::<GroupDescriptor>("null").is_err());
    assert!(
        serde_json::from_value::<GroupDescriptor>(serde_json::json!({
            "title": "Settings",
            "items": [],
        }))
        .is_err()
    );
}
