//! Transient messages reporting the outcome of admin calls.

use std::fmt::Display;
use std::time::Duration;

/// How long a success toast stays on screen.
pub const SUCCESS_DURATION: Duration = Duration::from_secs(3);
/// How long an error toast stays on screen.
pub const ERROR_DURATION: Duration = Duration::from_secs(20);

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The call went through.
    Success,
    /// The call failed.
    Error,
}

/// Transient message shown to the operator after an admin call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity, selecting the toast style.
    pub kind: NotificationKind,
    /// Text shown to the operator.
    pub message: String,
    /// How long the toast stays up.
    pub duration: Duration,
}

impl Notification {
    /// Success notification shown for [`SUCCESS_DURATION`].
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            duration: SUCCESS_DURATION,
        }
    }

    /// Error notification shown for [`ERROR_DURATION`].
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            duration: ERROR_DURATION,
        }
    }

    /// Outcome message for a router settings persist call.
    #[must_use]
    pub fn for_save_result<E: Display>(result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::success("router settings updated successfully"),
            Err(err) => Self::error(format!("Failed to update router settings: {err}")),
        }
    }

    /// Whether the notification reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    /// Display duration in whole milliseconds, saturating at `u32::MAX`.
    #[must_use]
    pub fn duration_millis(&self) -> u32 {
        u32::try_from(self.duration.as_millis()).unwrap_or(u32::MAX)
    }
}
