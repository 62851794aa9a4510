use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, dispatch, input};
use crate::files;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure. File-system errors from user actions are
    /// logged and never propagate here.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - scrawl requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new((size.width, size.height));
        self.bootstrap(&mut model);

        execute!(stdout(), EnableMouseCapture)?;
        let result = Self::event_loop(&mut terminal, &mut model);

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        result
    }

    /// Apply the CLI startup state: open the given file or folder, and
    /// populate the sidebar when requested. Failures are logged and leave
    /// the empty document in place.
    fn bootstrap(&self, model: &mut Model) {
        match &self.start_path {
            Some(path) if path.is_dir() => match files::list_entries(path) {
                Ok(entries) => model.show_listing(path.clone(), entries),
                Err(err) => {
                    tracing::error!(path = %path.display(), %err, "folder listing failed");
                }
            },
            Some(path) => match files::read_file(path) {
                Ok(text) => model.open_document(path.clone(), &text),
                Err(err) => {
                    tracing::error!(path = %path.display(), %err, "open failed");
                }
            },
            None => {}
        }

        if self.sidebar_visible && model.sidebar_dir.is_none() {
            let dir = model
                .document
                .path
                .as_deref()
                .and_then(std::path::Path::parent)
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| std::path::PathBuf::from("."), std::path::Path::to_path_buf);
            match files::list_entries(&dir) {
                Ok(entries) => model.show_listing(dir, entries),
                Err(err) => {
                    tracing::error!(path = %dir.display(), %err, "folder listing failed");
                }
            }
        }

        // Opening a file is an editing session; start focused on the editor.
        if model.document.path.is_some() {
            model.sidebar_focused = false;
        }
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_notice(Instant::now()) {
                needs_render = true;
            }

            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = input::translate(&event::read()?, model) {
                    dispatch(model, msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = input::translate(&event::read()?, model) {
                        dispatch(model, msg);
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
