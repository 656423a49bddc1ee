//! # betboard - a terminal client for tracking bets
//!
//! Create bets with a topic, terms and participants, browse them, and sign
//! them. Storage, identifiers, shareable links and signature timestamps are
//! all owned by the backend service; this crate only issues requests and
//! keeps a local view of the results.
//!
//! ## Architecture
//!
//! - **App**: terminal lifecycle and the main event loop
//! - **API**: the [`BetGateway`](api::BetGateway) trait and its HTTP client
//! - **Controller**: turns user intents into tracked backend requests
//! - **State**: the store and its reducer
//! - **Events**: key handling
//! - **UI**: layout and widgets
//! - **Config**: configuration management

pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use controller::ViewController;
pub use error::{Error, Result};
