//! Bet list widget.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::state::{OperationKind, Store};
use crate::ui::layout::truncate;

/// Bet list widget.
pub struct BetList;

impl BetList {
    /// Render the bet list.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(format!(" Active Bets ({}) ", store.bets.bets.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if store.shows_empty_state() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No bets created yet",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header_cells = ["Topic", "Participants", "Signed"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = store.bets.bets.iter().map(|bet| {
            let signed = bet.signatures.len();
            let expected = bet.participants.len();
            let signed_style = if expected > 0 && bet.awaiting_signature().is_empty() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };

            let cells = vec![
                Cell::from(truncate(&bet.topic, 30)),
                Cell::from(truncate(&bet.participants_line(), 30)),
                Cell::from(format!("{signed}/{expected}")).style(signed_style),
            ];

            Row::new(cells).height(1)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(45),
                Constraint::Percentage(40),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(store.bets.selected_index);

        frame.render_stateful_widget(table, area, &mut state);

        if store.operations.is_pending(&OperationKind::LoadBets) {
            render_loading(frame, area);
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Line::from(vec![Span::styled(
        "Loading...",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    )]);

    let inner = Block::default().borders(Borders::ALL).inner(area);
    if inner.width < 12 || inner.height == 0 {
        return;
    }

    // Render at bottom right
    let loading_area = Rect {
        x: inner.x + inner.width - 12,
        y: inner.y + inner.height - 1,
        width: 12,
        height: 1,
    };

    frame.render_widget(Paragraph::new(loading), loading_area);
}
