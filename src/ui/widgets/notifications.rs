//! Error line shown under the main view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// The most recent failure, with a reminder of how to dismiss it.
pub struct ErrorLine;

impl ErrorLine {
    pub fn render(frame: &mut Frame, area: Rect, message: &str, dismiss_key: &str) {
        if area.height == 0 {
            return;
        }

        let text = Line::from(vec![
            Span::styled(
                "! ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message, Style::default().fg(Color::White)),
            Span::styled(
                format!("   {dismiss_key} to dismiss"),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .title(" Error ")
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::Red)),
            ),
            area,
        );
    }
}
