use std::io::{stdout, Stdout, Write};

use anyhow::Result;
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use log::warn;

use crate::board::GameState;
use crate::coords::Coordinate;

const SNAKE_CELL: &str = "o ";
const FOOD_CELL: &str = "x ";
const EMPTY_CELL: &str = "  ";

/// Raw mode plus alternate screen for as long as the value lives.
/// Dropping it puts the terminal back the way it was.
pub struct TermSession {
    stdout: Stdout,
    active: bool,
}

impl TermSession {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;

        // From here on Drop takes care of undoing whatever did get set up
        let mut session = TermSession { stdout: stdout(), active: true };
        execute!(session.stdout, EnterAlternateScreen, cursor::Hide, terminal::Clear(ClearType::All))?;

        Ok(session)
    }

    pub fn draw(&mut self, lines: &[String]) -> Result<()> {
        for (row, line) in lines.iter().enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, row as u16),
                style::Print(line),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
        }

        self.stdout.flush()?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for TermSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("could not restore terminal: {}", e);
        }
    }
}

/// Restores the terminal before the panic message is printed, so it doesn't
/// land on the alternate screen in raw mode.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        let mut out = stdout();
        let _ = execute!(out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        default_hook(info);
    }));
}

/// Bordered text picture of the board followed by the score line.
pub fn frame_lines(state: &GameState) -> Vec<String> {
    let top_line = format!("+-{}+", "--".repeat(state.width() as usize));
    let snake = state.snake();

    let mut lines = Vec::with_capacity(state.height() as usize + 3);
    lines.push(top_line.clone());

    for y in 0..state.height() {
        let mut row = String::from("| ");

        for x in 0..state.width() {
            let coord = Coordinate::new(x, y);
            let cell = if snake.is_occupied(coord) {
                SNAKE_CELL
            } else if state.food() == Some(coord) {
                FOOD_CELL
            } else {
                EMPTY_CELL
            };
            row.push_str(cell);
        }

        row.push('|');
        lines.push(row);
    }

    lines.push(top_line);
    lines.push(format!("Score: {}", state.score()));
    lines
}
