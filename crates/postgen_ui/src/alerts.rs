//! Transient, auto-dismissing status messages.

use std::time::{Duration, Instant};

/// How long an alert stays visible unless dismissed earlier.
pub const DEFAULT_ALERT_TTL: Duration = Duration::from_secs(5);

/// Visual class of an alert.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum AlertKind {
    /// Operation succeeded
    #[default]
    Success,
    /// Operation failed
    Danger,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Identifier used for early dismissal
    pub id: u64,
    /// Text shown to the user
    pub message: String,
    /// Visual class
    pub kind: AlertKind,
    /// When the alert appeared
    pub shown_at: Instant,
}

/// Stack of visible alerts. Each alert expires on its own clock.
#[derive(Debug, Clone)]
pub struct Alerts {
    items: Vec<Alert>,
    next_id: u64,
    ttl: Duration,
}

impl Default for Alerts {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_TTL)
    }
}

impl Alerts {
    /// Create an empty stack whose alerts live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            ttl,
        }
    }

    /// Show an alert now.
    pub fn push(&mut self, message: impl Into<String>, kind: AlertKind) -> u64 {
        self.push_at(message, kind, Instant::now())
    }

    /// Show an alert as of `at`.
    pub fn push_at(&mut self, message: impl Into<String>, kind: AlertKind, at: Instant) -> u64 {
        let message = message.into();
        tracing::debug!(%kind, %message, "Showing alert");
        self.next_id += 1;
        self.items.push(Alert {
            id: self.next_id,
            message,
            kind,
            shown_at: at,
        });
        self.next_id
    }

    /// Remove one alert before it expires. Returns whether it was visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id != id);
        self.items.len() != before
    }

    /// Drop every alert older than the TTL. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.items.len();
        self.items
            .retain(|a| now.saturating_duration_since(a.shown_at) < ttl);
        before - self.items.len()
    }

    /// Visible alerts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.items.iter()
    }

    /// Most recent alert.
    pub fn latest(&self) -> Option<&Alert> {
        self.items.last()
    }

    /// Number of visible alerts.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no alert is visible.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_expire_independently() {
        let start = Instant::now();
        let mut alerts = Alerts::default();
        alerts.push_at("first", AlertKind::Success, start);
        alerts.push_at("second", AlertKind::Danger, start + Duration::from_secs(3));

        assert_eq!(alerts.expire(start + Duration::from_secs(4)), 0);
        assert_eq!(alerts.expire(start + Duration::from_secs(5)), 1);
        assert_eq!(alerts.latest().unwrap().message, "second");
        assert_eq!(alerts.expire(start + Duration::from_secs(8)), 1);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut alerts = Alerts::default();
        let a = alerts.push("a", AlertKind::Success);
        alerts.push("b", AlertKind::Success);

        assert!(alerts.dismiss(a));
        assert!(!alerts.dismiss(a));
        assert_eq!(alerts.len(), 1);
    }

    #[test]
    fn test_kind_css_name() {
        assert_eq!(AlertKind::Danger.to_string(), "danger");
        assert_eq!(AlertKind::default(), AlertKind::Success);
    }
}
