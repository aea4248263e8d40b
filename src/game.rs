use std::thread::sleep;

use anyhow::{Context, Result};
use log::info;

use crate::board::{GameState, StepResult};
use crate::config::GameConfig;
use crate::input::{spawn_input_thread, QuitSignal};
use crate::keys::{key_channel, KeyReceiver};
use crate::term::{frame_lines, TermSession};

/// How a session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Crashed { score: u32 },
    Won { score: u32 },
    Quit { score: u32 },
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Crashed { score } => format!("Game over.\nScore: {}", score),
            Outcome::Won { score } => format!("You won!\nScore: {}", score),
            Outcome::Quit { score } => format!("Quit.\nScore: {}", score),
        }
    }
}

pub struct SnakeGame {
    config: GameConfig,
    state: GameState,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self> {
        let state = GameState::new(&config).context("invalid game configuration")?;
        Ok(SnakeGame { config, state })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Takes over the terminal, starts the input thread and plays until the
    /// snake crashes, the board fills up or the player quits.
    pub fn run(&mut self) -> Result<Outcome> {
        let quit = QuitSignal::new();
        quit.register_signals().context("failed to register signal handlers")?;

        let mut term = TermSession::enter()?;
        let (keys_tx, keys_rx) = key_channel();
        // Never joined; it stays blocked on the terminal until the process exits
        spawn_input_thread(keys_tx, quit.clone()).context("failed to start input thread")?;

        info!("starting {}x{} game", self.config.width, self.config.height);
        term.draw(&frame_lines(&self.state))?;

        let outcome = self.play(&mut term, &keys_rx, &quit)?;
        term.restore()?;

        info!("session ended: {:?}", outcome);
        Ok(outcome)
    }

    fn play(&mut self, term: &mut TermSession, keys: &KeyReceiver, quit: &QuitSignal) -> Result<Outcome> {
        loop {
            sleep(self.config.tick);

            if let Some(outcome) = self.tick(keys, quit) {
                return Ok(outcome);
            }

            term.draw(&frame_lines(&self.state))?;
        }
    }

    /// One game-loop iteration without any drawing. Returns the outcome once
    /// the session is over.
    pub fn tick(&mut self, keys: &KeyReceiver, quit: &QuitSignal) -> Option<Outcome> {
        let score = self.state.score();

        if quit.is_requested() {
            return Some(Outcome::Quit { score });
        }

        let result = self.state.step(keys);
        if !result.is_over() {
            return None;
        }

        match result {
            StepResult::Won => Some(Outcome::Won { score: self.state.score() }),
            _ => Some(Outcome::Crashed { score }),
        }
    }
}
