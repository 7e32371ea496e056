//! Walks a settings descriptor tree the way a host screen controller would:
//! build the tree, render its rows as text, activate a few of them, and
//! drive the loading indicator through its lifecycle.
//!
//! Run with:
//! ```sh
//! RUST_LOG=murmur_ui=debug cargo run --example settings_walkthrough
//! ```

use std::sync::Arc;

use murmur_ui::prelude::*;
use murmur_ui::widget::widgets::STEP_DURATION;

struct PrintingNavigator;

impl Navigator for PrintingNavigator {
    fn push(&self, screen: SettingsScreen, animated: bool) {
        println!("-> push screen \"{}\" (animated: {animated})", screen.title());
        render(&screen);
    }

    fn open_external(&self, route: &str) {
        println!("-> open external route {route}");
    }
}

fn render(screen: &SettingsScreen) {
    for section in 0..screen.section_count() {
        if let Some(header) = screen.section_at(section).and_then(|s| s.header()) {
            println!("  [{header}]");
        }
        for row in 0..screen.row_count(section).unwrap_or(0) {
            let mut view = TextRow::default();
            screen.bind_row(section, row, &mut view);
            if view.value().is_empty() {
                println!("    {}", view.title());
            } else {
                println!("    {}  ({})", view.title(), view.value());
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    init_global_registry();
    let navigator_id = register_navigator(Arc::new(PrintingNavigator));

    let notifications = GroupDescriptor::new(
        "Notifications",
        vec![
            SectionDescriptor::new(vec![
                CellDescriptor::Property(
                    PropertyCell::new(PropertyId::NotificationsEnabled, |value| {
                        println!("   apply {value:?}");
                    })
                    .with_value_provider(|| "On".to_owned()),
                ),
                CellDescriptor::Property(PropertyCell::new(PropertyId::NotificationSound, |_| {})),
            ])
            .with_header("Alerts"),
            SectionDescriptor::new(vec![CellDescriptor::ExternalScreen(
                ExternalScreenCell::new("System Settings", "app-settings://murmur")
                    .with_navigator(navigator_id),
            )]),
        ],
    )
    .with_identifier("group.notifications")
    .with_preview(|_| Some("On".to_owned()))
    .with_navigator(navigator_id);

    let root = GroupDescriptor::new(
        "Settings",
        vec![SectionDescriptor::new(vec![CellDescriptor::Group(notifications)])],
    )
    .with_identifier("group.root");

    let screen = root.generate_screen().expect("root group has sections");
    println!("screen \"{}\"", screen.title());
    render(&screen);

    // Drill into the notifications group, then toggle the first property.
    screen.activate_row(0, 0, None);
    screen.activate_row(0, 0, Some(PropertyValue::Bool(false)));

    // The indicator paints its traveling pulse from sampled keyframes.
    let mut indicator = LoadingIndicator::new();
    indicator.set_geometry(Rect::new(0.0, 0.0, 60.0, 20.0));
    indicator.event(&mut WidgetEvent::show());

    for step in 0..4 {
        let colors = indicator.dot_colors_at(STEP_DURATION * step);
        let brightness: Vec<String> = colors.iter().map(|c| format!("{:.2}", c.r)).collect();
        println!("t = {:?}: dot red channels {:?}", STEP_DURATION * step, brightness);
    }

    indicator.event(&mut WidgetEvent::hide());
    println!("indicator running after hide: {}", indicator.is_running());

    unregister_navigator(navigator_id);
}
