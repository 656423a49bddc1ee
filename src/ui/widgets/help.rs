//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let mut help_text = section("Navigation");
        help_text.extend([
            entry(&format!("{}/↑", keys.up), "Move up"),
            entry(&format!("{}/↓", keys.down), "Move down"),
            entry("Home/End", "First/last bet"),
            entry(&keys.bets, "Bets view"),
            entry(&keys.new_bet, "New bet form"),
        ]);
        help_text.extend(section("Bets"));
        help_text.extend([
            entry(&keys.refresh, "Reload all bets"),
            entry(&keys.select, "Refresh selected bet"),
            entry(&keys.sign, "Sign selected bet"),
            entry(&keys.back, "Dismiss error"),
        ]);
        help_text.extend(section("Editing"));
        help_text.extend([
            entry("Tab", "Next field"),
            entry("Enter", "Submit"),
            entry("Esc", "Cancel"),
        ]);
        help_text.extend(section("General"));
        help_text.extend([
            entry(&keys.help, "Toggle help"),
            entry(&keys.quit, "Quit"),
        ]);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

fn section(title: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

fn entry(key: &str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
