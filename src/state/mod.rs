//! State management for betboard.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture. Request outcomes
//! arrive as actions and are folded into the [`Store`] by [`Store::reduce`].

mod app_state;
mod bet_state;
mod form_state;
mod operations;

pub use app_state::{AppState, InputMode, View};
pub use bet_state::{Bet, BetId, BetState, SignedAt};
pub use form_state::{DraftBet, FormField, FormState, SignatureInput};
pub use operations::{OperationId, OperationKind, PendingOperations};

use crate::error::Result;
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),
    SetInputMode(InputMode),
    ToggleHelp,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,

    // Text entry
    InputChar(char),
    InputBackspace,
    NextField,
    PrevField,

    // Intents, routed to the controller
    LoadBets,
    SubmitDraft,
    SignBet(BetId),
    FetchBet(BetId),

    // Request outcomes
    BetsLoaded { op: OperationId, bets: Vec<Bet> },
    BetCreated { op: OperationId, bet: Bet },
    BetSigned { op: OperationId, bet: Bet },
    BetFetched { op: OperationId, bet: Bet },
    RequestFailed { op: OperationId, kind: OperationKind },

    // Error handling
    ClearError,

    // Quit
    Quit,
}

impl Action {
    /// Whether the controller, not the reducer, handles this action.
    pub fn is_intent(&self) -> bool {
        matches!(
            self,
            Self::LoadBets | Self::SubmitDraft | Self::SignBet(_) | Self::FetchBet(_)
        )
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Cached bets.
    pub bets: BetState,
    /// New bet form.
    pub form: FormState,
    /// Signature prompt.
    pub signature: SignatureInput,
    /// Outstanding requests.
    pub operations: PendingOperations,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, endpoint: impl Into<String>) -> Self {
        Self {
            app: AppState::new(endpoint),
            bets: BetState::default(),
            form: FormState::default(),
            signature: SignatureInput::default(),
            operations: PendingOperations::default(),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Whether any request is in flight.
    pub fn is_loading(&self) -> bool {
        self.operations.is_loading()
    }

    /// Whether the "no bets" placeholder should be shown.
    pub fn shows_empty_state(&self) -> bool {
        self.bets.is_empty() && !self.operations.is_pending(&OperationKind::LoadBets)
    }

    /// Whether the form may be submitted right now.
    pub fn can_submit_draft(&self) -> bool {
        self.form.draft.is_complete() && !self.operations.is_pending(&OperationKind::CreateBet)
    }

    /// Whether the given bet may be signed right now.
    pub fn can_sign(&self, id: &BetId) -> bool {
        !self
            .operations
            .is_pending(&OperationKind::SignBet(id.clone()))
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetView(view) => {
                self.app.current_view = view;
                self.app.input_mode = match view {
                    View::Bets => InputMode::Normal,
                    View::NewBet => InputMode::Form,
                };
            }
            Action::SetInputMode(mode) => self.app.input_mode = mode,
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ScrollUp => self.bets.scroll(-1),
            Action::ScrollDown => self.bets.scroll(1),
            Action::PageUp => self.bets.scroll(-10),
            Action::PageDown => self.bets.scroll(10),
            Action::GoToTop => self.bets.go_to_top(),
            Action::GoToBottom => self.bets.go_to_bottom(),

            // Text entry
            Action::InputChar(c) => match self.app.input_mode {
                InputMode::Form => self.form.push_char(c),
                InputMode::Sign => self.signature.push_char(c),
                InputMode::Normal => {}
            },
            Action::InputBackspace => match self.app.input_mode {
                InputMode::Form => self.form.pop_char(),
                InputMode::Sign => self.signature.pop_char(),
                InputMode::Normal => {}
            },
            Action::NextField => self.form.focus_next(),
            Action::PrevField => self.form.focus_prev(),

            // Intents carry no state change of their own
            Action::LoadBets | Action::SubmitDraft | Action::SignBet(_) | Action::FetchBet(_) => {
                tracing::debug!(?action, "intent reached the reducer, ignoring");
            }

            // Request outcomes
            Action::BetsLoaded { op, bets } => {
                self.operations.finish(op);
                tracing::info!(count = bets.len(), "bets loaded");
                self.bets.replace_all(bets);
            }
            Action::BetCreated { op, bet } => {
                self.operations.finish(op);
                tracing::info!(id = %bet.id, "bet created");
                self.bets.append(bet);
                self.bets.go_to_bottom();
                self.form.reset();
                if self.app.current_view == View::NewBet {
                    self.app.current_view = View::Bets;
                    self.app.input_mode = InputMode::Normal;
                }
            }
            Action::BetSigned { op, bet } => {
                let id = match self.operations.finish(op) {
                    Some(OperationKind::SignBet(id)) => id,
                    _ => bet.id.clone(),
                };
                tracing::info!(%id, "bet signed");
                self.bets.replace(&id, bet);
                self.signature.clear();
                if self.app.input_mode == InputMode::Sign {
                    self.app.input_mode = InputMode::Normal;
                }
            }
            Action::BetFetched { op, bet } => {
                let id = match self.operations.finish(op) {
                    Some(OperationKind::FetchBet(id)) => id,
                    _ => bet.id.clone(),
                };
                self.bets.replace(&id, bet);
            }
            Action::RequestFailed { op, kind } => {
                self.operations.finish(op);
                self.app.error = Some(kind.failure_message().to_string());
            }

            // Error handling
            Action::ClearError => {
                self.app.error = None;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx, "local")
    }

    fn bet(id: &str) -> Bet {
        Bet {
            id: BetId::new(id),
            topic: "topic".to_string(),
            terms: "terms".to_string(),
            participants: vec!["ann".to_string()],
            signatures: BTreeMap::new(),
            shareable_link: String::new(),
        }
    }

    #[test]
    fn test_set_view_switches_input_mode() {
        let mut store = store();
        store.reduce(Action::SetView(View::NewBet));
        assert_eq!(store.app.input_mode, InputMode::Form);
        assert!(store.app.is_editing());

        store.reduce(Action::SetView(View::Bets));
        assert_eq!(store.app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_input_routes_by_mode() {
        let mut store = store();
        store.reduce(Action::InputChar('x'));
        assert_eq!(store.form.draft.topic, "");
        assert_eq!(store.signature.text, "");

        store.reduce(Action::SetInputMode(InputMode::Sign));
        store.reduce(Action::InputChar('A'));
        store.reduce(Action::InputChar('B'));
        store.reduce(Action::InputBackspace);
        assert_eq!(store.signature.text, "A");

        store.reduce(Action::SetView(View::NewBet));
        store.reduce(Action::InputChar('t'));
        assert_eq!(store.form.draft.topic, "t");
    }

    #[test]
    fn test_empty_state_hidden_while_loading() {
        let mut store = store();
        assert!(store.shows_empty_state());

        let op = store.operations.begin(OperationKind::LoadBets);
        assert!(!store.shows_empty_state());

        store.reduce(Action::BetsLoaded { op, bets: vec![] });
        assert!(store.shows_empty_state());
        assert!(!store.is_loading());

        let op = store.operations.begin(OperationKind::LoadBets);
        store.reduce(Action::BetsLoaded {
            op,
            bets: vec![bet("1")],
        });
        assert!(!store.shows_empty_state());
    }

    #[test]
    fn test_failure_keeps_cache_and_sets_message() {
        let mut store = store();
        let op = store.operations.begin(OperationKind::LoadBets);
        store.reduce(Action::BetsLoaded {
            op,
            bets: vec![bet("1")],
        });

        let op = store.operations.begin(OperationKind::SignBet(BetId::new("1")));
        store.reduce(Action::RequestFailed {
            op,
            kind: OperationKind::SignBet(BetId::new("1")),
        });

        assert_eq!(store.bets.bets, vec![bet("1")]);
        assert_eq!(store.app.error.as_deref(), Some("Failed to sign bet"));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_success_does_not_clear_error() {
        let mut store = store();
        let failed = store.operations.begin(OperationKind::LoadBets);
        store.reduce(Action::RequestFailed {
            op: failed,
            kind: OperationKind::LoadBets,
        });

        let op = store.operations.begin(OperationKind::LoadBets);
        store.reduce(Action::BetsLoaded { op, bets: vec![] });
        assert_eq!(store.app.error.as_deref(), Some("Failed to fetch bets"));

        store.reduce(Action::ClearError);
        assert_eq!(store.app.error, None);
    }

    #[test]
    fn test_per_operation_gating() {
        let mut store = store();
        store.form.draft = DraftBet {
            topic: "t".to_string(),
            terms: "x".to_string(),
            participants: "a".to_string(),
        };
        assert!(store.can_submit_draft());

        let create = store.operations.begin(OperationKind::CreateBet);
        assert!(!store.can_submit_draft());
        assert!(store.can_sign(&BetId::new("1")));

        store.operations.begin(OperationKind::SignBet(BetId::new("1")));
        assert!(!store.can_sign(&BetId::new("1")));
        assert!(store.can_sign(&BetId::new("2")));

        store.reduce(Action::RequestFailed {
            op: create,
            kind: OperationKind::CreateBet,
        });
        assert!(store.can_submit_draft());
        assert!(store.is_loading());
    }

    #[test]
    fn test_dispatch_sends_on_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let store = Store::new(tx, "remote");
        store.dispatch(Action::LoadBets).unwrap();
        assert!(matches!(rx.try_recv(), Ok(Action::LoadBets)));
    }

    #[test]
    fn test_intents_are_flagged() {
        assert!(Action::SubmitDraft.is_intent());
        assert!(Action::SignBet(BetId::new("1")).is_intent());
        assert!(!Action::Quit.is_intent());
    }
}
