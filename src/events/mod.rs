//! Event handling for betboard.
//!
//! Terminal input is read from crossterm's async event stream and mapped to
//! [`Action`](crate::state::Action)s according to the current input mode and
//! the configured key bindings.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{KeyBinding, Keymap};
