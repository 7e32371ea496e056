//! Settings property identifiers and label resolution.
//!
//! Every user-facing settings property has a `PropertyId`. Labels are
//! resolved through a single exhaustive `match` so that adding a variant
//! without a label is a compile error, not a runtime surprise.

/// A user-facing settings property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    DisplayName,
    StatusMessage,
    NotificationsEnabled,
    NotificationSound,
    MessagePreview,
    ReadReceipts,
    TypingIndicators,
    LastSeenVisibility,
    Passcode,
    BlockedContacts,
    MediaAutoDownload,
    Theme,
    FontSize,
}

impl PropertyId {
    /// Every property, in display order.
    pub const ALL: [PropertyId; 13] = [
        PropertyId::DisplayName,
        PropertyId::StatusMessage,
        PropertyId::NotificationsEnabled,
        PropertyId::NotificationSound,
        PropertyId::MessagePreview,
        PropertyId::ReadReceipts,
        PropertyId::TypingIndicators,
        PropertyId::LastSeenVisibility,
        PropertyId::Passcode,
        PropertyId::BlockedContacts,
        PropertyId::MediaAutoDownload,
        PropertyId::Theme,
        PropertyId::FontSize,
    ];
}

/// The English display label for a property.
///
/// Pure and total: no default arm, so the compiler rejects an unmapped
/// variant.
pub fn property_label(property: PropertyId) -> &'static str {
    match property {
        PropertyId::DisplayName => "Display Name",
        PropertyId::StatusMessage => "Status Message",
        PropertyId::NotificationsEnabled => "Notifications",
        PropertyId::NotificationSound => "Notification Sound",
        PropertyId::MessagePreview => "Message Preview",
        PropertyId::ReadReceipts => "Read Receipts",
        PropertyId::TypingIndicators => "Typing Indicators",
        PropertyId::LastSeenVisibility => "Last Seen",
        PropertyId::Passcode => "Passcode",
        PropertyId::BlockedContacts => "Blocked Contacts",
        PropertyId::MediaAutoDownload => "Auto-Download Media",
        PropertyId::Theme => "Theme",
        PropertyId::FontSize => "Font Size",
    }
}

/// A value carried by a property selection.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Resolves property labels for a locale.
///
/// Resolution must be deterministic: the same property always yields the
/// identical string.
pub trait Localizer: Send + Sync {
    /// The display label for `property`.
    fn label(&self, property: PropertyId) -> String;
}

/// The built-in English localizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocalizer;

impl Localizer for DefaultLocalizer {
    fn label(&self, property: PropertyId) -> String {
        property_label(property).to_owned()
    }
}
