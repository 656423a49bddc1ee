//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{InputMode, Store};

/// Top line: backend in use, input mode, work in flight, last refresh.
pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        if area.height == 0 {
            return;
        }

        let mode = match store.app.input_mode {
            InputMode::Normal => "NORMAL",
            InputMode::Form => "FORM",
            InputMode::Sign => "SIGN",
        };

        let mut left = vec![
            Span::styled(
                " betboard ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("@ {} ", store.app.endpoint),
                Style::default().fg(Color::Green),
            ),
            Span::styled(format!("[{mode}] "), Style::default().fg(Color::Yellow)),
        ];

        match store.operations.len() {
            0 => {}
            1 => left.push(busy_span("1 request in flight".to_string())),
            n => left.push(busy_span(format!("{n} requests in flight"))),
        }

        let mut right = Vec::new();
        if let Some(updated) = store.bets.last_updated {
            right.push(Span::styled(
                format!("synced {} ", updated.format("%H:%M:%S")),
                Style::default().fg(Color::Gray),
            ));
        }
        right.push(Span::styled(
            "? help ",
            Style::default().fg(Color::DarkGray),
        ));

        let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
        let gap = (area.width as usize).saturating_sub(used);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.extend(right);

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
            area,
        );
    }
}

fn busy_span(text: String) -> Span<'static> {
    Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    )
}
