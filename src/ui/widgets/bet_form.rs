//! New bet form widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{FormField, InputMode, OperationKind, Store};

/// Form for creating a bet.
pub struct BetForm;

impl BetForm {
    /// Render the form.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let outer = Block::default()
            .title(" Create New Bet ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let editing = store.app.input_mode == InputMode::Form;
        for (i, field) in FormField::ALL.into_iter().enumerate() {
            let focused = editing && store.form.focus == field;
            render_field(frame, chunks[i], field, store.form.draft.field(field), focused);
        }

        let creating = store.operations.is_pending(&OperationKind::CreateBet);
        let button = if creating {
            Span::styled(
                " Creating... ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )
        } else if store.form.draft.is_complete() {
            Span::styled(
                " [Enter] Create Bet ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                " Fill in every field to create the bet ",
                Style::default().fg(Color::DarkGray),
            )
        };

        let footer = Line::from(vec![
            button,
            Span::styled(
                "  Tab: next field  Esc: back to bets",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(footer), chunks[3]);
    }
}

fn render_field(frame: &mut Frame, area: Rect, field: FormField, value: &str, focused: bool) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let mut content = vec![Span::raw(value)];
    if focused {
        content.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);
}
