//! Backend API integration.
//!
//! [`BetGateway`] is the seam between the controller and the network. Every
//! operation is a single HTTP exchange; none retries, caches, or keeps state.

mod client;
mod payload;

pub use client::{ApiClient, ApiClientBuilder};
pub use payload::{NewBet, SignRequest};

use crate::error::Result;
use crate::state::{Bet, BetId};
use async_trait::async_trait;

/// Operations offered by the bet backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BetGateway: Send + Sync {
    /// `POST /bets/`: create a bet and return it with its generated fields.
    async fn create_bet(&self, bet: &NewBet) -> Result<Bet>;

    /// `GET /bets/{id}`.
    async fn get_bet(&self, id: &BetId) -> Result<Bet>;

    /// `GET /bets/`: the whole collection.
    async fn list_bets(&self) -> Result<Vec<Bet>>;

    /// `POST /bets/{id}/sign`: return the bet with the new signature.
    async fn sign_bet(&self, id: &BetId, initials: &str) -> Result<Bet>;
}
