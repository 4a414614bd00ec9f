use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_rect, layout_regions};
use crate::ui::request::RequestState;
use crate::ui::theme::{
    BRAND, BUTTON_BG, BUTTON_DISABLED_BG, BUTTON_TEXT, CARD_BORDER, HEADER_TEXT, INPUT_FOCUS,
    LINK, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use crate::ui::toast::render_toast;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const SUBMIT_LABEL: &str = "Shorten URL";
pub const SUBMIT_PENDING_LABEL: &str = "Shortening...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);
    draw_card(frame, app, card_rect(body));
    frame.render_widget(Footer::new(app.request_state()).widget(footer), footer);

    render_toast(frame, app.toast(), body);
}

fn draw_card(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if area.width < 8 || area.height < 3 {
        return;
    }

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CARD_BORDER))
        .title(Span::styled(
            " LinkSnap ",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    // Rows inside the card, top to bottom.
    let label = row(inner, 1, 1);
    let input = row(inner, 2, 3);
    let helper = row(inner, 5, 1);
    let button = row(inner, 7, 1);
    let result = row(inner, 9, inner.height.saturating_sub(9));

    let has_error = app.field_error().is_some();
    let accent = if has_error { STATUS_ERROR } else { INPUT_FOCUS };

    frame.render_widget(
        Paragraph::new(Span::styled("Enter URL", Style::default().fg(accent))),
        label,
    );
    draw_input(frame, app, input, accent);

    if let Some(message) = app.field_error() {
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(STATUS_ERROR))),
            helper,
        );
    }

    frame.render_widget(
        Paragraph::new(submit_line(app.request_state())).alignment(Alignment::Center),
        button,
    );

    if let Some(short_url) = app.short_url() {
        let line = Line::from(vec![
            Span::styled("Shortened URL: ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                short_url,
                Style::default().fg(LINK).add_modifier(Modifier::UNDERLINED),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: false }), result);
    }
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: Rect, accent: ratatui::style::Color) {
    if area.height < 3 || area.width < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let pending = app.request_state().is_pending();
    // Keep two columns for the spinner while a request is in flight.
    let text_width = if pending {
        inner.width.saturating_sub(2)
    } else {
        inner.width
    };

    let (window, cursor_col) = app.field().visible_window(text_width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(window, Style::default().fg(HEADER_TEXT))),
        Rect {
            width: text_width,
            ..inner
        },
    );

    if pending {
        let spinner = spinner_frame(app.request_state().animation_tick());
        frame.render_widget(
            Paragraph::new(Span::styled(spinner, Style::default().fg(STATUS_OK))),
            Rect {
                x: inner.x + inner.width.saturating_sub(1),
                width: 1.min(inner.width),
                ..inner
            },
        );
    }

    if text_width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor_col as u16, inner.y));
    }
}

fn submit_line(state: &RequestState) -> Line<'static> {
    if state.can_submit() {
        Line::from(Span::styled(
            format!("  {}  ", SUBMIT_LABEL),
            Style::default()
                .fg(BUTTON_TEXT)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {}  ", SUBMIT_PENDING_LABEL),
            Style::default()
                .fg(MUTED_TEXT)
                .bg(BUTTON_DISABLED_BG)
                .add_modifier(Modifier::DIM),
        ))
    }
}

fn spinner_frame(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Slice `height` rows starting `offset` rows into `area`, clipped to it.
fn row(area: Rect, offset: u16, height: u16) -> Rect {
    let y = area.y + offset.min(area.height);
    let bottom = area.y + area.height;
    Rect {
        x: area.x,
        y,
        width: area.width,
        height: height.min(bottom - y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_clips_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(row(area, 2, 3), Rect::new(0, 2, 10, 3));
        assert_eq!(row(area, 4, 3), Rect::new(0, 4, 10, 1));
        assert_eq!(row(area, 9, 1), Rect::new(0, 5, 10, 0));
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(10), "⠋");
        assert_eq!(spinner_frame(1), "⠙");
    }

    #[test]
    fn submit_label_reflects_pending() {
        let idle = submit_line(&RequestState::Idle);
        assert!(idle.to_string().contains(SUBMIT_LABEL));
        let pending = submit_line(&RequestState::Pending { animation_tick: 0 });
        assert!(pending.to_string().contains(SUBMIT_PENDING_LABEL));
    }
}
