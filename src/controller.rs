//! Intent orchestration.
//!
//! The controller turns user intents into gateway requests. Each intent runs
//! in two halves: `begin_*` registers an operation in the [`Store`] and
//! captures what to send, and [`ViewController::execute`] performs the
//! exchange and returns the completion [`Action`] to reduce. The app runs the
//! second half on a spawned task so requests can overlap; [`ViewController::handle`]
//! runs both halves back to back.

use crate::api::{BetGateway, NewBet};
use crate::error::Error;
use crate::state::{Action, BetId, OperationId, OperationKind, Store};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A gateway call waiting to be executed.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    ListBets,
    CreateBet(NewBet),
    SignBet { id: BetId, initials: String },
    GetBet(BetId),
}

impl Request {
    /// The operation kind this request is tracked under.
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::ListBets => OperationKind::LoadBets,
            Self::CreateBet(_) => OperationKind::CreateBet,
            Self::SignBet { id, .. } => OperationKind::SignBet(id.clone()),
            Self::GetBet(id) => OperationKind::FetchBet(id.clone()),
        }
    }
}

/// A request together with the token it was registered under.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub op: OperationId,
    pub request: Request,
}

/// Drives gateway calls on behalf of the UI.
#[derive(Clone)]
pub struct ViewController {
    gateway: Arc<dyn BetGateway>,
}

impl ViewController {
    pub fn new(gateway: Arc<dyn BetGateway>) -> Self {
        Self { gateway }
    }

    /// Register the request an intent calls for.
    ///
    /// Returns `None` when the intent is a no-op right now, or when the action
    /// is not an intent.
    pub fn begin(&self, store: &mut Store, intent: &Action) -> Option<PendingRequest> {
        match intent {
            Action::LoadBets => self.begin_load(store),
            Action::SubmitDraft => self.begin_create(store),
            Action::SignBet(id) => self.begin_sign(store, id),
            Action::FetchBet(id) => self.begin_fetch(store, id),
            _ => None,
        }
    }

    /// Start loading the full bet list.
    pub fn begin_load(&self, store: &mut Store) -> Option<PendingRequest> {
        Self::register(store, Request::ListBets)
    }

    /// Start creating a bet from the current draft.
    ///
    /// Field presence is checked by the form, not here.
    pub fn begin_create(&self, store: &mut Store) -> Option<PendingRequest> {
        let new_bet = NewBet::from(&store.form.draft);
        Self::register(store, Request::CreateBet(new_bet))
    }

    /// Start signing bet `id` with the typed initials.
    ///
    /// Empty or whitespace-only input does nothing. Otherwise the text is
    /// sent exactly as typed, since the backend keys signatures by it.
    pub fn begin_sign(&self, store: &mut Store, id: &BetId) -> Option<PendingRequest> {
        if store.signature.is_blank() {
            return None;
        }
        let initials = store.signature.text.clone();
        Self::register(
            store,
            Request::SignBet {
                id: id.clone(),
                initials,
            },
        )
    }

    /// Start re-fetching a single bet.
    pub fn begin_fetch(&self, store: &mut Store, id: &BetId) -> Option<PendingRequest> {
        Self::register(store, Request::GetBet(id.clone()))
    }

    fn register(store: &mut Store, request: Request) -> Option<PendingRequest> {
        let kind = request.kind();
        if store.operations.is_pending(&kind) {
            tracing::debug!(%kind, "already in flight, ignoring");
            return None;
        }
        let op = store.operations.begin(kind);
        Some(PendingRequest { op, request })
    }

    /// Perform the exchange and produce the completion action.
    pub async fn execute(&self, pending: PendingRequest) -> Action {
        let PendingRequest { op, request } = pending;
        let kind = request.kind();

        let outcome = match request {
            Request::ListBets => self
                .gateway
                .list_bets()
                .await
                .map(|bets| Action::BetsLoaded { op, bets }),
            Request::CreateBet(new_bet) => self
                .gateway
                .create_bet(&new_bet)
                .await
                .map(|bet| Action::BetCreated { op, bet }),
            Request::SignBet { id, initials } => self
                .gateway
                .sign_bet(&id, &initials)
                .await
                .map(|bet| Action::BetSigned { op, bet }),
            Request::GetBet(id) => self
                .gateway
                .get_bet(&id)
                .await
                .map(|bet| Action::BetFetched { op, bet }),
        };

        outcome.unwrap_or_else(|e| {
            log_failure(&kind, &e);
            Action::RequestFailed { op, kind }
        })
    }

    /// Execute on a background task and send the completion to `action_tx`.
    pub fn spawn(
        &self,
        pending: PendingRequest,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            let action = controller.execute(pending).await;
            if action_tx.send(action).is_err() {
                tracing::debug!("action channel closed, dropping completion");
            }
        })
    }

    /// Run an intent to completion against `store`.
    pub async fn handle(&self, store: &mut Store, intent: Action) {
        if let Some(pending) = self.begin(store, &intent) {
            let completion = self.execute(pending).await;
            store.reduce(completion);
        }
    }
}

fn log_failure(kind: &OperationKind, error: &Error) {
    if error.is_gateway() {
        tracing::error!(%kind, %error, "{}", kind.failure_message());
    } else {
        tracing::error!(%kind, ?error, "unexpected failure");
    }
}
