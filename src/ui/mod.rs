//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{BetDetail, BetForm, BetList, ErrorLine, HelpPanel, StatusBar, TabBar};

use crate::config::{KeyBindings, UiConfig};
use crate::state::{Store, View};
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui {
    show_status_bar: bool,
    keybindings: KeyBindings,
}

impl Ui {
    pub fn new(config: &UiConfig, keybindings: KeyBindings) -> Self {
        Self {
            show_status_bar: config.show_status_bar,
            keybindings,
        }
    }

    /// Render the entire UI.
    pub fn render(&self, frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area(), self.show_status_bar, store.app.error.is_some());

        StatusBar::render(frame, layout.status_area, store);
        TabBar::render(frame, layout.tab_area, store, &self.keybindings);

        match store.app.current_view {
            View::Bets => {
                let (list_area, detail_area) = layout.split_main();
                BetList::render(frame, list_area, store);
                BetDetail::render(frame, detail_area, store, &self.keybindings.sign);
            }
            View::NewBet => BetForm::render(frame, layout.main_area, store),
        }

        if let Some(error) = &store.app.error {
            ErrorLine::render(frame, layout.error_area, error, &self.keybindings.back);
        }

        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), &self.keybindings);
        }
    }
}
