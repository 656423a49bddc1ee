//! View switcher.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::KeyBindings;
use crate::state::{Store, View};

/// One entry per view, with the key that opens it.
pub struct TabBar;

impl TabBar {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let unsigned = store
            .bets
            .bets
            .iter()
            .filter(|bet| !bet.awaiting_signature().is_empty())
            .count();

        let bets_label = match (store.bets.bets.len(), unsigned) {
            (0, _) => "Bets".to_string(),
            (total, 0) => format!("Bets ({total})"),
            (total, open) => format!("Bets ({total}, {open} unsigned)"),
        };

        let tabs = [
            (keys.bets.as_str(), bets_label, View::Bets),
            (keys.new_bet.as_str(), "New Bet".to_string(), View::NewBet),
        ];

        let spans: Vec<Span> = tabs
            .into_iter()
            .flat_map(|(key, label, view)| {
                let style = if store.app.current_view == view {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::White)
                };
                [
                    Span::styled(format!(" {key}:"), Style::default().fg(Color::DarkGray)),
                    Span::styled(label, style),
                    Span::raw(" "),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
