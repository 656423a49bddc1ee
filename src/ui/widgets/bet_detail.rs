//! Selected bet detail pane with the signature prompt.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{Bet, InputMode, OperationKind, Store};

/// Detail pane for the selected bet.
pub struct BetDetail;

impl BetDetail {
    /// Render the selected bet, or a hint when nothing is selected.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, sign_key: &str) {
        let Some(bet) = store.bets.selected_bet() else {
            let hint = Paragraph::new("Select a bet to see its details").block(
                Block::default()
                    .title(" Bet ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(hint, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let detail = Paragraph::new(detail_lines(bet))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!(" {} ", bet.topic))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(detail, chunks[0]);

        render_sign_prompt(frame, chunks[1], store, bet, sign_key);
    }
}

fn label(text: &str) -> Span<'_> {
    Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn detail_lines(bet: &Bet) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(label("Terms")),
        Line::from(bet.terms.as_str()),
        Line::from(""),
        Line::from(vec![label("Participants: "), Span::raw(bet.participants_line())]),
        Line::from(""),
        Line::from(label("Signatures")),
    ];

    if bet.signatures.is_empty() {
        lines.push(Line::from(Span::styled(
            "  none yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (name, signed_at) in &bet.signatures {
        lines.push(Line::from(vec![
            Span::styled(format!("  {name}"), Style::default().fg(Color::Green)),
            Span::raw(format!(" - {}", signed_at.date_label())),
        ]));
    }

    let awaiting = bet.awaiting_signature();
    if !awaiting.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  awaiting: ", Style::default().fg(Color::DarkGray)),
            Span::styled(awaiting.join(", "), Style::default().fg(Color::Yellow)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        label("Shareable Link: "),
        Span::styled(
            bet.shareable_link.as_str(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        ),
    ]));

    lines
}

fn render_sign_prompt(frame: &mut Frame, area: Rect, store: &Store, bet: &Bet, sign_key: &str) {
    let editing = store.app.input_mode == InputMode::Sign;
    let signing = store
        .operations
        .is_pending(&OperationKind::SignBet(bet.id.clone()));

    let title = if signing {
        " Signing... ".to_string()
    } else if editing {
        " Your initials (Enter to sign, Esc to cancel) ".to_string()
    } else {
        format!(" Press {sign_key} to sign ")
    };

    let mut content = vec![Span::raw(store.signature.text.as_str())];
    if editing {
        content.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }

    let border = if editing { Color::Cyan } else { Color::DarkGray };
    let prompt = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(prompt, area);
}
