//! Application-level state.

/// The current view/screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Bets,
    NewBet,
}

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands.
    #[default]
    Normal,
    /// Keys edit the new bet form.
    Form,
    /// Keys edit the signature prompt.
    Sign,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view.
    pub current_view: View,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Most recent failure message. Only replaced by a newer failure or
    /// dismissed by the user.
    pub error: Option<String>,
    /// Label of the backend in use.
    pub endpoint: String,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create a new application state for the given backend label.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Check if keystrokes are being captured as text.
    pub fn is_editing(&self) -> bool {
        matches!(self.input_mode, InputMode::Form | InputMode::Sign)
    }
}
