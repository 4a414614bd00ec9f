use crate::ui::mvi::UiState;

/// Where the current shorten request stands.
///
/// There is exactly one of these per form. `Succeeded` and `Failed` are not
/// terminal: a fresh submit moves either back to `Pending`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A call is in flight. The submit control is disabled.
    Pending {
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// The service returned a short link.
    Succeeded { short_url: String },

    /// The call failed; `message` is what the user sees.
    Failed { message: String },
}

impl UiState for RequestState {}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Whether the submit control accepts activation.
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    pub fn short_url(&self) -> Option<&str> {
        match self {
            Self::Succeeded { short_url } => Some(short_url),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn animation_tick(&self) -> u8 {
        match self {
            Self::Pending { animation_tick } => *animation_tick,
            _ => 0,
        }
    }
}
