//! System clipboard access for handing the short link to other apps.

use arboard::Clipboard;

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Open the system clipboard.
    ///
    /// Fails on headless sessions with no clipboard provider.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to copy link: {}", e))
    }
}

/// Copy `text`, opening the clipboard lazily on first use.
///
/// The handler is kept in `slot` so later copies reuse the connection.
pub fn copy_text(slot: &mut Option<ClipboardHandler>, text: &str) -> Result<(), String> {
    if slot.is_none() {
        let handler =
            ClipboardHandler::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
        *slot = Some(handler);
    }
    match slot.as_mut() {
        Some(handler) => handler.set_text(text),
        None => Err("Clipboard unavailable".to_string()),
    }
}
