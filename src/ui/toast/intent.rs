use std::time::Instant;

use crate::ui::mvi::Intent;

use super::state::Severity;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    /// Show a notification, replacing any visible one.
    Show {
        message: String,
        severity: Severity,
        expires_at: Instant,
    },
    /// User dismissed the notification.
    Dismiss,
    /// Clock tick; hides the toast once `now` reaches its deadline.
    Tick { now: Instant },
}

impl Intent for ToastIntent {}
