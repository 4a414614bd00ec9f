use crate::ui::request::RequestState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar: request status on the left, the keys that act right now in the
/// middle, version on the right.
pub struct Footer<'a> {
    request: &'a RequestState,
}

impl<'a> Footer<'a> {
    pub fn new(request: &'a RequestState) -> Self {
        Self { request }
    }

    /// Short status word and its color.
    pub fn status(&self) -> (&'static str, Color) {
        match self.request {
            RequestState::Idle => ("Ready", MUTED_TEXT),
            RequestState::Pending { .. } => ("Shortening", STATUS_OK),
            RequestState::Succeeded { .. } => ("Done", STATUS_OK),
            RequestState::Failed { .. } => ("Failed", STATUS_ERROR),
        }
    }

    /// Key hints for the current state. Submit is hidden while pending and
    /// copy only shows once there is a link.
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::with_capacity(4);
        if self.request.can_submit() {
            hints.push(("Enter", "Shorten"));
        }
        if self.request.short_url().is_some() {
            hints.push(("Ctrl+Y", "Copy link"));
        }
        hints.push(("Ctrl+U", "Clear"));
        hints.push(("Ctrl+Q", "Quit"));
        hints
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (status, status_color) = self.status();

        let mut spans = vec![
            Span::styled(" ● ", Style::default().fg(status_color)),
            Span::styled(status, Style::default().fg(status_color)),
        ];
        for (key, action) in self.hints() {
            spans.push(Span::styled(" │ ", text_style));
            spans.push(Span::styled(key, text_style.add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(": {action}"), text_style));
        }

        // Char count, not byte count: the separators are multi-byte.
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let version = format!("v{VERSION} ");
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
