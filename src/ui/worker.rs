//! Background side of the form: runs shorten calls off the UI thread.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

use crate::shorten::Shortener;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Spawn the worker on `handle`.
pub fn spawn_worker(
    handle: &Handle,
    shortener: Arc<dyn Shortener>,
    commands: Receiver<UiCommand>,
    events: Sender<AppEvent>,
) -> JoinHandle<()> {
    handle.spawn(run_worker(shortener, commands, events))
}

/// Process commands until the UI side hangs up.
///
/// Calls run one after another and each runs to completion; there is no
/// cancellation. Every outcome, success or failure, is posted back as
/// [`AppEvent::ShortenFinished`].
pub async fn run_worker(
    shortener: Arc<dyn Shortener>,
    mut commands: Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Shorten { url } => {
                let result = shortener.shorten(&url).await;
                if let Err(err) = &result {
                    tracing::warn!(
                        error = %err,
                        transport = err.is_transport(),
                        status = ?err.status(),
                        "Shorten request failed"
                    );
                }
                if events.send(AppEvent::ShortenFinished(result)).is_err() {
                    tracing::debug!("UI loop gone, stopping worker");
                    break;
                }
            }
        }
    }
}
