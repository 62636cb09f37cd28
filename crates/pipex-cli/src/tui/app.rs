//! Explorer application: terminal lifecycle and event loop.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pipex_core::explorer::StageExplorer;
use ratatui::{backend::CrosstermBackend, Terminal};

use super::event::{handle_key_event, KeyAction};
use super::view;

pub struct ExplorerApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    explorer: StageExplorer,
    /// Row index of the focus cursor in the stage list.
    focus: usize,
    /// One-line message shown in the footer (e.g. a failed stage jump).
    notice: Option<String>,
    /// Prevents double cleanup in Drop.
    cleaned_up: bool,
}

impl ExplorerApp {
    pub fn new(explorer: StageExplorer) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

        install_panic_hook();

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to create terminal")?;

        Ok(Self {
            terminal,
            explorer,
            focus: 0,
            notice: None,
            cleaned_up: false,
        })
    }

    /// Run the event loop; the terminal is restored on every exit path.
    pub fn run(&mut self) -> Result<()> {
        let result = self.run_event_loop();
        self.cleanup_terminal();
        result
    }

    fn run_event_loop(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(key.code, key.modifiers) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::FocusUp => {
                            self.focus = self.focus.saturating_sub(1);
                        }
                        KeyAction::FocusDown => {
                            let last = self.explorer.catalog().len() - 1;
                            self.focus = (self.focus + 1).min(last);
                        }
                        KeyAction::ToggleFocused => {
                            if let Some(id) = self.focused_stage_id() {
                                self.select(id);
                            }
                        }
                        KeyAction::Select(id) => self.select(id),
                        KeyAction::Ignore => {}
                    }
                }
                // Resize is handled by the redraw at the top of the loop
                _ => {}
            }
        }
    }

    fn focused_stage_id(&self) -> Option<u32> {
        self.explorer.catalog().iter().nth(self.focus).map(|s| s.id)
    }

    /// Toggle a stage. A failed select leaves the explorer untouched and
    /// only surfaces a footer notice.
    fn select(&mut self, id: u32) {
        match self.explorer.select(id) {
            Ok(_) => self.notice = None,
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn draw(&mut self) -> Result<()> {
        let explorer = &self.explorer;
        let focus = self.focus;
        let notice = self.notice.clone();
        self.terminal
            .draw(|frame| view::draw(frame, explorer, focus, notice.as_deref()))?;
        Ok(())
    }

    /// Leave the alternate screen and disable raw mode, exactly once.
    fn cleanup_terminal(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;

        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Drop for ExplorerApp {
    fn drop(&mut self) {
        self.cleanup_terminal();
    }
}

/// Restore the terminal before the default panic output, so a panic inside
/// the draw loop doesn't leave the shell in raw mode.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
