use crate::shorten::{ShortenError, ShortenResult, FALLBACK_ERROR_MESSAGE};
use crate::ui::field::UrlField;
use crate::ui::mvi::Reducer;
use crate::ui::request::{RequestIntent, RequestReducer, RequestState};
use crate::ui::toast::{Severity, ToastIntent, ToastReducer, ToastState};
use crate::validate::validate;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Text of the notification shown after a successful shorten.
pub const SUCCESS_MESSAGE: &str = "URL shortened successfully!";

/// Work the UI hands to the background worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Shorten { url: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// State of the shortener screen. Owned and mutated by the UI loop only.
pub struct App {
    should_quit: bool,
    field: UrlField,
    /// Inline validation message under the field. Set on a rejected submit,
    /// cleared on an accepted one.
    field_error: Option<String>,
    request: RequestState,
    toast: ToastState,
    toast_duration: Duration,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            should_quit: false,
            field: UrlField::new(),
            field_error: None,
            request: RequestState::default(),
            toast: ToastState::default(),
            toast_duration,
            command_sender: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn field(&self) -> &UrlField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut UrlField {
        &mut self.field
    }

    pub fn field_error(&self) -> Option<&str> {
        self.field_error.as_deref()
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    /// Short link of the last successful request, if the form is showing one.
    pub fn short_url(&self) -> Option<&str> {
        self.request.short_url()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.request.can_submit()
    }

    /// Submit the current field contents.
    ///
    /// Ignored while a request is pending. An invalid URL only sets the
    /// inline message. Returns `true` when a shorten call was issued.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            tracing::debug!("Submit ignored, request already pending");
            return false;
        }

        let validation = validate(self.field.text());
        if !validation.valid {
            tracing::debug!(input = %self.field.text(), "Submit rejected by validation");
            self.field_error = validation.message;
            return false;
        }
        self.field_error = None;

        let url = self.field.text().to_string();
        self.dispatch_request(RequestIntent::Submit);

        if !self.send_command(UiCommand::Shorten { url }) {
            // Without a worker the call can never complete; fail it here so
            // the form does not stay pending forever.
            self.fail(FALLBACK_ERROR_MESSAGE.to_string());
            return false;
        }
        true
    }

    /// Completion of the in-flight call.
    pub fn on_shorten_finished(&mut self, result: Result<ShortenResult, ShortenError>) {
        if !self.request.is_pending() {
            tracing::warn!("Shorten result arrived with no request pending, dropping it");
            return;
        }

        match result {
            Ok(result) => {
                self.dispatch_request(RequestIntent::Resolve { result });
                self.show_toast(SUCCESS_MESSAGE.to_string(), Severity::Success);
            }
            Err(err) => self.fail(err.user_message()),
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.dispatch_request(RequestIntent::AnimationTick);
        self.dispatch_toast(ToastIntent::Tick { now });
    }

    pub fn dismiss_toast(&mut self) {
        self.dispatch_toast(ToastIntent::Dismiss);
    }

    pub fn on_paste(&mut self, text: &str) {
        self.field.insert_str(text);
    }

    /// Outcome of copying the short link to the clipboard.
    pub fn on_copy_result(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => self.show_toast("Link copied to clipboard".to_string(), Severity::Success),
            Err(message) => {
                tracing::warn!(error = %message, "Clipboard copy failed");
                self.show_toast(message, Severity::Error);
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.dispatch_request(RequestIntent::Reject {
            message: message.clone(),
        });
        self.show_toast(message, Severity::Error);
    }

    fn show_toast(&mut self, message: String, severity: Severity) {
        let expires_at = Instant::now() + self.toast_duration;
        self.dispatch_toast(ToastIntent::Show {
            message,
            severity,
            expires_at,
        });
    }

    fn send_command(&self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::error!("No worker attached, cannot issue shorten request");
            return false;
        };
        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "Failed to hand shorten request to worker");
                false
            }
        }
    }

    fn dispatch_request(&mut self, intent: RequestIntent) {
        dispatch_mvi!(self, request, RequestReducer, intent);
    }

    fn dispatch_toast(&mut self, intent: ToastIntent) {
        dispatch_mvi!(self, toast, ToastReducer, intent);
    }
}
