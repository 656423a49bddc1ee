//! TUI widgets.

mod bet_detail;
mod bet_form;
mod bet_list;
mod help;
mod notifications;
mod status_bar;
mod tab_bar;

pub use bet_detail::BetDetail;
pub use bet_form::BetForm;
pub use bet_list::BetList;
pub use help::HelpPanel;
pub use notifications::ErrorLine;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
