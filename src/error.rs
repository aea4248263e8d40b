use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least {min}x{min}, got {width}x{height}")]
    BoardTooSmall { width: i32, height: i32, min: i32 },

    #[error("tick interval must be non-zero")]
    ZeroTick,
}
