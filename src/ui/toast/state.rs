use std::time::Instant;

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible {
        message: String,
        severity: Severity,
        /// Instant after which the next tick hides the toast.
        expires_at: Instant,
    },
}

impl UiState for ToastState {}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible { message, .. } => Some(message),
            Self::Hidden => None,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Visible { severity, .. } => Some(*severity),
            Self::Hidden => None,
        }
    }
}
