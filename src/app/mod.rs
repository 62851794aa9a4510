//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`dispatch`]: One transition plus its file-system side effects
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Document, Model, Prompt, PromptKind};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    start_path: Option<PathBuf>,
    sidebar_visible: bool,
}

impl App {
    /// Create a new application, optionally opening a file or folder.
    pub const fn new(start_path: Option<PathBuf>) -> Self {
        Self {
            start_path,
            sidebar_visible: false,
        }
    }

    /// Start with the directory sidebar visible.
    pub const fn with_sidebar(mut self, visible: bool) -> Self {
        self.sidebar_visible = visible;
        self
    }
}

/// Run one message through the pure update and then its side effects.
///
/// This is the single stable command path: every save, open, and listing
/// goes through here, parameterized by the current state - no handler is
/// ever registered per selection or per file.
pub fn dispatch(model: &mut Model, msg: Message) {
    let side = msg.clone();
    *model = update(std::mem::take(model), msg);
    effects::apply(model, &side);
}

#[cfg(test)]
mod tests;
