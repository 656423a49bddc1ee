//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top). Zero height when hidden.
    pub status_area: Rect,
    /// Tab bar area.
    pub tab_area: Rect,
    /// Main content area.
    pub main_area: Rect,
    /// Error line area (bottom). Zero height when there is no error.
    pub error_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, show_status_bar: bool, show_error: bool) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(u16::from(show_status_bar)), // Status bar
                Constraint::Length(1),                          // Tab bar
                Constraint::Min(0),                             // Main content
                Constraint::Length(if show_error { 3 } else { 0 }), // Error line
            ])
            .split(area);

        Self {
            status_area: chunks[0],
            tab_area: chunks[1],
            main_area: chunks[2],
            error_area: chunks[3],
        }
    }

    /// Split the main area into the bet list and the detail pane.
    pub fn split_main(&self) -> (Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(self.main_area);
        (chunks[0], chunks[1])
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Shorten `s` to at most `max_len` characters, marking the cut with "...".
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_area_only_when_needed() {
        let area = Rect::new(0, 0, 80, 24);

        let layout = Layout::new(area, true, false);
        assert_eq!(layout.error_area.height, 0);
        assert_eq!(layout.main_area.height, 22);

        let layout = Layout::new(area, false, true);
        assert_eq!(layout.status_area.height, 0);
        assert_eq!(layout.error_area.height, 3);
        assert_eq!(layout.main_area.height, 20);
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long topic name", 10), "a long ...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
