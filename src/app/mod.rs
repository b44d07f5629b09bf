//! Application orchestration.
//!
//! [`App`] owns the view-state store and the gateway, reacts to user
//! intents, spawns at most one gateway call at a time, and applies
//! completion messages back onto the store. This is the only place state is
//! mutated.

mod handlers;
mod intents;
mod messages;

pub use intents::{Intent, CHAT_FALLBACK_REPLY, DEFAULT_QUIZ_LABEL};
pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::gateway::MathGateway;
use crate::state::AppState;

/// Top-level application: store + gateway + completion channel.
pub struct App {
    pub state: AppState,
    pub(crate) gateway: Arc<dyn MathGateway>,
    /// Sender cloned into spawned gateway tasks.
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop (ownership needed for `select!`).
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Animation counter driven by the event-loop tick.
    pub tick_count: u64,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(gateway: Arc<dyn MathGateway>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            gateway,
            message_tx,
            message_rx: Some(message_rx),
            tick_count: 0,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        // Spinner and typing indicator animate only while busy.
        if self.state.busy {
            self.needs_redraw = true;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}
