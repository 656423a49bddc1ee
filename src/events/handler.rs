//! Event handler for processing input events.

use super::Keymap;
use crate::error::{Error, Result};
use crate::state::{Action, BetId, InputMode, Store, View};
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEvent, MouseEventKind,
};
use futures::StreamExt;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Terminal event stream, opened on first read.
    events: Option<EventStream>,
    /// Parsed key bindings.
    keymap: Keymap,
    /// Whether mouse scrolling moves the selection.
    mouse_support: bool,
    /// Store snapshot for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone, Default)]
struct StoreSnapshot {
    input_mode: InputMode,
    current_view: View,
    show_help: bool,
    has_error: bool,
    selected_bet_id: Option<BetId>,
    can_sign_selected: bool,
    draft_complete: bool,
    can_submit_draft: bool,
    can_refresh: bool,
}

impl StoreSnapshot {
    fn capture(store: &Store) -> Self {
        let selected_bet_id = store.bets.selected_bet().map(|b| b.id.clone());
        Self {
            input_mode: store.app.input_mode,
            current_view: store.app.current_view,
            show_help: store.app.show_help,
            has_error: store.app.error.is_some(),
            can_sign_selected: selected_bet_id
                .as_ref()
                .is_some_and(|id| store.can_sign(id)),
            selected_bet_id,
            draft_complete: store.form.draft.is_complete(),
            can_submit_draft: store.can_submit_draft(),
            can_refresh: !store
                .operations
                .is_pending(&crate::state::OperationKind::LoadBets),
        }
    }
}

impl EventHandler {
    /// Create a new event handler with the given key bindings.
    pub fn new(keymap: Keymap, mouse_support: bool) -> Self {
        Self {
            events: None,
            keymap,
            mouse_support,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = Some(StoreSnapshot::capture(store));
    }

    /// Wait for the next terminal event and translate it into an action.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        let events = self.events.get_or_insert_with(EventStream::new);
        match events.next().await {
            Some(Ok(CrosstermEvent::Key(key))) => Ok(self.handle_key(key)),
            Some(Ok(CrosstermEvent::Mouse(mouse))) => Ok(self.handle_mouse(mouse)),
            // Resize and focus changes only need a redraw.
            Some(Ok(_)) => Ok(None),
            Some(Err(e)) => Err(e.into()),
            None => Err(Error::terminal("terminal event stream closed")),
        }
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        let snapshot = self.store_snapshot.as_ref()?;

        match snapshot.input_mode {
            InputMode::Normal => self.handle_normal_mode(key, snapshot),
            InputMode::Form => self.handle_form_mode(key, snapshot),
            InputMode::Sign => self.handle_sign_mode(key, snapshot),
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        if !self.mouse_support {
            return None;
        }
        // The selection is pinned while a prompt is open so the initials go
        // to the bet the prompt was opened on.
        let snapshot = self.store_snapshot.as_ref()?;
        if snapshot.input_mode != InputMode::Normal {
            return None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let keys = &self.keymap;

        if keys.quit.matches(&key) {
            return Some(Action::Quit);
        }

        if keys.help.matches(&key) || (snapshot.show_help && keys.back.matches(&key)) {
            return Some(Action::ToggleHelp);
        }

        if keys.bets.matches(&key) {
            return Some(Action::SetView(View::Bets));
        }
        if keys.new_bet.matches(&key) {
            return Some(Action::SetView(View::NewBet));
        }

        match snapshot.current_view {
            View::Bets => self.handle_bets_view(key, snapshot),
            View::NewBet => None,
        }
    }

    fn handle_bets_view(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let keys = &self.keymap;

        if keys.up.matches(&key) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if keys.down.matches(&key) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }

        match key.code {
            KeyCode::PageUp => return Some(Action::PageUp),
            KeyCode::PageDown => return Some(Action::PageDown),
            KeyCode::Home => return Some(Action::GoToTop),
            KeyCode::End => return Some(Action::GoToBottom),
            _ => {}
        }

        if keys.refresh.matches(&key) {
            return snapshot.can_refresh.then_some(Action::LoadBets);
        }

        if keys.select.matches(&key) {
            return snapshot.selected_bet_id.clone().map(Action::FetchBet);
        }

        if keys.sign.matches(&key) {
            return snapshot
                .selected_bet_id
                .as_ref()
                .map(|_| Action::SetInputMode(InputMode::Sign));
        }

        if keys.back.matches(&key) && snapshot.has_error {
            return Some(Action::ClearError);
        }

        None
    }

    fn handle_form_mode(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::SetView(View::Bets)),
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Enter if snapshot.can_submit_draft => Some(Action::SubmitDraft),
            // Required fields: keep moving through the form until all are filled.
            KeyCode::Enter if !snapshot.draft_complete => Some(Action::NextField),
            KeyCode::Enter => None,
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::InputChar(c))
            }
            _ => None,
        }
    }

    fn handle_sign_mode(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::SetInputMode(InputMode::Normal)),
            KeyCode::Enter if snapshot.can_sign_selected => {
                snapshot.selected_bet_id.clone().map(Action::SignBet)
            }
            KeyCode::Enter => None,
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::InputChar(c))
            }
            _ => None,
        }
    }
}
