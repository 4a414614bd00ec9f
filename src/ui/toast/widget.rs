use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::{Severity, ToastState};

const TOAST_MAX_WIDTH: u16 = 60;
const TOAST_HEIGHT: u16 = 3;

fn severity_style(severity: Severity) -> (&'static str, Style) {
    match severity {
        Severity::Success => ("✓", Style::default().fg(STATUS_OK)),
        Severity::Error => ("✗", Style::default().fg(STATUS_ERROR)),
    }
}

/// Draw the toast along the bottom edge of `area`, if one is visible.
pub fn render_toast(frame: &mut Frame, state: &ToastState, area: Rect) {
    let ToastState::Visible {
        message, severity, ..
    } = state
    else {
        return;
    };

    let toast_area = toast_rect(area);
    if toast_area.width < 4 || toast_area.height == 0 {
        return;
    }

    let (icon, style) = severity_style(*severity);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(" Esc ", Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)))
        .title_alignment(Alignment::Right);

    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), style.add_modifier(Modifier::BOLD)),
        Span::styled(message.as_str(), Style::default().fg(HEADER_TEXT)),
    ]);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(
        Paragraph::new(line).block(block).wrap(Wrap { trim: true }),
        toast_area,
    );
}

fn toast_rect(area: Rect) -> Rect {
    let width = area.width.min(TOAST_MAX_WIDTH);
    let height = area.height.min(TOAST_HEIGHT);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height - height,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_sits_at_bottom_center() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = toast_rect(area);
        assert_eq!(rect, Rect::new(20, 27, 60, 3));
    }

    #[test]
    fn toast_shrinks_to_small_areas() {
        let area = Rect::new(2, 1, 40, 2);
        let rect = toast_rect(area);
        assert_eq!(rect, Rect::new(2, 1, 40, 2));
    }
}
