// src/views/toggle.rs
use serde::Serialize;

use crate::types::ConnectionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleKind {
    Connection,
    Application,
    Mentorship,
    Seminar,
}

/// A primary action that moves `none` to `pending` once and then stays put.
///
/// `connected` is never reached through `activate`; it only comes from seeded
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusToggle {
    kind: ToggleKind,
    status: ConnectionStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleView {
    pub kind: ToggleKind,
    pub status: ConnectionStatus,
    pub label: &'static str,
    pub enabled: bool,
    pub can_message: bool,
}

impl StatusToggle {
    pub fn new(kind: ToggleKind) -> Self {
        Self::seeded(kind, ConnectionStatus::None)
    }

    pub fn seeded(kind: ToggleKind, status: ConnectionStatus) -> Self {
        Self { kind, status }
    }

    pub fn kind(&self) -> ToggleKind {
        self.kind
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Returns true when this call changed the status
    pub fn activate(&mut self) -> bool {
        if self.status == ConnectionStatus::None {
            self.status = ConnectionStatus::Pending;
            true
        } else {
            false
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.status == ConnectionStatus::None
    }

    pub fn can_message(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    pub fn label(&self) -> &'static str {
        use ConnectionStatus::*;

        match (self.kind, self.status) {
            (ToggleKind::Connection, None) => "Connect",
            (ToggleKind::Connection, Pending) => "Pending",
            (ToggleKind::Application, None) => "Apply for this Position",
            (ToggleKind::Application, _) => "Application Submitted",
            (ToggleKind::Mentorship, None) => "Request Mentorship",
            (ToggleKind::Mentorship, Pending) => "Pending",
            (ToggleKind::Seminar, None) => "Request to Join",
            (ToggleKind::Seminar, Pending) => "Requested",
            (_, Connected) => "Connected",
        }
    }

    pub fn view(&self) -> ToggleView {
        ToggleView {
            kind: self.kind,
            status: self.status,
            label: self.label(),
            enabled: self.is_enabled(),
            can_message: self.can_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_activation_moves_to_pending() {
        let mut toggle = StatusToggle::new(ToggleKind::Connection);
        assert_eq!(toggle.label(), "Connect");
        assert!(toggle.is_enabled());

        assert!(toggle.activate());
        assert_eq!(toggle.status(), ConnectionStatus::Pending);
        assert_eq!(toggle.label(), "Pending");
        assert!(!toggle.is_enabled());
    }

    #[test]
    fn test_pending_never_advances() {
        let mut toggle = StatusToggle::new(ToggleKind::Seminar);
        toggle.activate();
        for _ in 0..5 {
            assert!(!toggle.activate());
        }
        assert_eq!(toggle.status(), ConnectionStatus::Pending);
        assert_eq!(toggle.label(), "Requested");
    }

    #[test]
    fn test_seeded_connected_is_inert_and_allows_messaging() {
        let mut toggle = StatusToggle::seeded(ToggleKind::Connection, ConnectionStatus::Connected);
        assert!(!toggle.activate());
        assert_eq!(toggle.status(), ConnectionStatus::Connected);
        assert_eq!(toggle.label(), "Connected");
        assert!(toggle.can_message());
    }

    #[test]
    fn test_labels_per_kind() {
        let mut apply = StatusToggle::new(ToggleKind::Application);
        assert_eq!(apply.label(), "Apply for this Position");
        apply.activate();
        assert_eq!(apply.label(), "Application Submitted");

        let mut mentorship = StatusToggle::new(ToggleKind::Mentorship);
        assert_eq!(mentorship.label(), "Request Mentorship");
        mentorship.activate();
        assert_eq!(mentorship.view().label, "Pending");
        assert!(!mentorship.view().can_message);
    }
}
