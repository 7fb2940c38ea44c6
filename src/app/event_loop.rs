use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, ToastLevel, update};
use crate::highlight::MarkdownHighlighter;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the terminal cannot be
    /// initialized, or the event loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let text = match std::fs::read_to_string(&self.file_path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.file_path.display(), "new file");
                String::new()
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read {}", self.file_path.display()));
            }
        };

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: mdbar requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = self.build_model(&text, (size.width, size.height));
        tracing::debug!(
            path = %model.file_path.display(),
            lines = model.buffer.line_count(),
            "editor ready"
        );

        let result = execute!(stdout(), EnableMouseCapture)
            .map_err(anyhow::Error::from)
            .and_then(|()| Self::event_loop(&mut terminal, &mut model));

        // Restore terminal
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    /// The initial model for `text`, with this app's settings applied.
    pub(super) fn build_model(&self, text: &str, size: (u16, u16)) -> Model {
        let highlighter = if self.highlight_enabled {
            MarkdownHighlighter::new(self.background)
        } else {
            MarkdownHighlighter::disabled()
        };
        let mut model = Model::new(self.file_path.clone(), text, size)
            .with_highlighter(highlighter)
            .with_link_detector(self.link_detector.clone())
            .with_toolbar(self.toolbar_visible, self.toolbar_position);
        for warning in &self.startup_warnings {
            model.show_toast(ToastLevel::Warning, warning.clone());
        }
        model
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                Self::dispatch(&event::read()?, model);
                needs_render = true;

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    Self::dispatch(&event::read()?, model);
                }
            }
        }
        Ok(())
    }

    fn dispatch(event: &event::Event, model: &mut Model) {
        let Some(msg) = Self::handle_event(event, model) else {
            return;
        };
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }
}
