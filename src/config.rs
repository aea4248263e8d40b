use std::time::Duration;

use crate::error::ConfigError;

pub const MIN_BOARD_SIDE: i32 = 8;
pub const DEFAULT_WIDTH: i32 = 20;
pub const DEFAULT_HEIGHT: i32 = 15;
pub const TICK_INTERVAL_MS: u64 = 100;

/// Startup parameters for one game.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub tick: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }
}

impl GameConfig {
    pub fn with_size(width: i32, height: i32) -> Self {
        GameConfig { width, height, ..Default::default() }
    }

    /// Anything smaller than 8x8 can't safely hold the starting snake.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_BOARD_SIDE || self.height < MIN_BOARD_SIDE {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_BOARD_SIDE,
            });
        }

        if self.tick.as_millis() == 0 {
            return Err(ConfigError::ZeroTick);
        }

        Ok(())
    }
}
