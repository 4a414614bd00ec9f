//! Composition root: terminal, worker, event loop.

use crate::clipboard::{copy_text, ClipboardHandler};
use crate::config::Settings;
use crate::shorten::Shortener;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Room for queued commands. The form never has more than one in flight.
const COMMAND_BUFFER: usize = 4;

/// Run the shortener screen until the user quits.
///
/// The UI loop stays on the calling thread; shorten calls run on `handle`.
pub fn run(settings: &Settings, shortener: Arc<dyn Shortener>, handle: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = settings.tick_rate;
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    // Detached. It stops when `app` drops its sender, or is dropped along
    // with the runtime, abandoning any call still in flight.
    spawn_worker(handle, shortener, command_rx, events.sender());

    let mut app = App::new(settings.toast_duration);
    app.set_command_sender(command_tx);
    let mut clipboard: Option<ClipboardHandler> = None;

    tracing::info!(base_url = %settings.base_url, "Shortener UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::CopyLink(url) = handle_key(&mut app, key) {
                    let result = copy_text(&mut clipboard, &url);
                    app.on_copy_result(result);
                }
            }
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::ShortenFinished(result)) => app.on_shorten_finished(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Shortener UI stopped");
    Ok(())
}
