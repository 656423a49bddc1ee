//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::api::ApiClient;
use crate::config::Config;
use crate::controller::ViewController;
use crate::error::Result;
use crate::events::{EventHandler, Keymap};
use crate::state::{Action, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action sender, handed to request tasks.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Issues backend requests.
    controller: ViewController,
    /// Renderer.
    ui: Ui,
    /// Redraw interval.
    tick_rate: Duration,
    /// Whether mouse capture was enabled.
    mouse_capture: bool,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Validate everything that can fail before touching the terminal
        let keymap = Keymap::from_config(&config.keybindings)?;
        let api_client = ApiClient::new(&config.api)?;
        tracing::info!(
            endpoint = %config.api.endpoint,
            base_url = %api_client.base_url(),
            "using backend"
        );

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.ui.mouse_support {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let store = Store::new(
            action_tx.clone(),
            format!("{} ({})", config.api.endpoint, api_client.base_url()),
        );
        let event_handler = EventHandler::new(keymap, config.ui.mouse_support);

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_tx,
            action_rx,
            controller: ViewController::new(Arc::new(api_client)),
            ui: Ui::new(&config.ui, config.keybindings.clone()),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms.max(16)),
            mouse_capture: config.ui.mouse_support,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Initial load
        self.store.dispatch(Action::LoadBets)?;

        let mut tick = tokio::time::interval(self.tick_rate);

        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                self.ui.render(frame, &self.store);
            })?;

            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action);
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                _ = tick.tick() => {}
            }

            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) {
        if action.is_intent() {
            if let Some(pending) = self.controller.begin(&mut self.store, &action) {
                self.controller.spawn(pending, self.action_tx.clone());
            }
        } else {
            self.store.reduce(action);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        if self.mouse_capture {
            let _ = execute!(
                self.terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            );
        } else {
            let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        }
        let _ = self.terminal.show_cursor();
    }
}
