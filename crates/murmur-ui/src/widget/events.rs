//! Widget events.
//!
//! The host shell delivers lifecycle and timer events to widgets through
//! [`WidgetEvent`]. A widget returns `true` from
//! [`Widget::event`](super::Widget::event) and calls
//! [`WidgetEvent::accept`] when it has consumed an event.

use murmur_ui_core::TimerId;

/// State common to all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Mark the event as handled.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Mark the event as not handled, letting it propagate.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Check whether the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// The widget became visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowEvent {
    pub base: EventBase,
}

/// The widget was hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct HideEvent {
    pub base: EventBase,
}

/// A widget-owned timer fired.
#[derive(Debug, Clone, Copy)]
pub struct TimerEvent {
    pub base: EventBase,
    /// The timer that fired.
    pub id: TimerId,
}

/// Events delivered to widgets.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    /// Show event.
    Show(ShowEvent),
    /// Hide event.
    Hide(HideEvent),
    /// Timer event.
    Timer(TimerEvent),
}

impl WidgetEvent {
    /// A fresh show event.
    pub fn show() -> Self {
        Self::Show(ShowEvent::default())
    }

    /// A fresh hide event.
    pub fn hide() -> Self {
        Self::Hide(HideEvent::default())
    }

    /// A fresh timer event for `id`.
    pub fn timer(id: TimerId) -> Self {
        Self::Timer(TimerEvent {
            base: EventBase::default(),
            id,
        })
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::Show(e) => e.base.is_accepted(),
            Self::Hide(e) => e.base.is_accepted(),
            Self::Timer(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::Show(e) => e.base.accept(),
            Self::Hide(e) => e.base.accept(),
            Self::Timer(e) => e.base.accept(),
        }
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        match self {
            Self::Show(e) => e.base.ignore(),
            Self::Hide(e) => e.base.ignore(),
            Self::Timer(e) => e.base.ignore(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_and_ignore() {
        let mut event = WidgetEvent::show();
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }
}
