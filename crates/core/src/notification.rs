//! Transient user notifications ("toasts").

use serde::Serialize;

use crate::validation::ValidationError;

/// How long a notification stays on screen before fading out.
pub const NOTIFICATION_DISMISS_MS: u64 = 4_000;

/// Visual kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// A purely informational message with a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

impl From<ValidationError> for Notification {
    fn from(err: ValidationError) -> Self {
        Self::error(err.title(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in [NotificationKind::Success, NotificationKind::Error] {
            assert_eq!(NotificationKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(NotificationKind::from_name("warning"), None);
    }

    #[test]
    fn validation_errors_become_error_notifications() {
        let n = Notification::from(ValidationError::InvalidEmail);

        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.title, "Invalid Email");
        assert_eq!(n.message, "Please enter a valid email address.");
    }
}
