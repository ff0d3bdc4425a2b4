//! Terminal frontend for the driver
//!
//! Draws the board with ratatui on the alternate screen and lets a human
//! pick points with the keyboard. The terminal is restored on drop.

pub mod board;
pub mod cursor;

use std::io::{self, Stdout};
use std::thread;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, instrument};

use crate::board::Pos;
use crate::driver::{Frontend, Pause};
use crate::engine::Renju;

pub use board::View;
pub use cursor::{Action, Cursor};

const SELECT_HINT: &str = "[Select] arrows/hjkl move, enter places, q quits";
const CONTINUE_HINT: &str = "[Continue] press enter";

/// Keyboard-driven frontend on the real terminal
pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    cursor: Cursor,
}

impl TerminalFrontend {
    /// Switch the terminal to raw mode and the alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            cursor: Cursor::new(),
        })
    }

    fn render(&mut self, view: View) -> Result<()> {
        self.terminal.draw(|frame| board::draw(frame, &view))?;
        Ok(())
    }
}

/// Next key press; repeats and releases are skipped.
fn next_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

impl Frontend for TerminalFrontend {
    fn show(&mut self, renju: &Renju, pause: Pause) -> Result<()> {
        let hint = match pause {
            Pause::Delay(_) => "",
            Pause::UntilEnter => CONTINUE_HINT,
        };
        self.render(View {
            renju,
            cursor: None,
            hint,
        })?;

        match pause {
            Pause::Delay(delay) => thread::sleep(delay),
            Pause::UntilEnter => loop {
                let key = next_key()?;
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                    break;
                }
            },
        }
        Ok(())
    }

    #[instrument(skip_all, fields(turn = renju.turn(), putter = %renju.putter()))]
    fn prompt(&mut self, renju: &Renju) -> Result<Option<Pos>> {
        loop {
            self.render(View {
                renju,
                cursor: Some(self.cursor.pos()),
                hint: SELECT_HINT,
            })?;

            match Action::from_key(next_key()?) {
                Some(Action::Step(dr, dc)) => self.cursor.step(dr, dc),
                Some(Action::Confirm) => {
                    if let Some(pos) = self.cursor.confirm(renju) {
                        debug!(%pos, "Point selected");
                        return Ok(Some(pos));
                    }
                }
                Some(Action::Quit) => return Ok(None),
                None => {}
            }
        }
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

