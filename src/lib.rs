//! Terminal snake: a grid model advanced one tick at a time, steered by key
//! presses captured on a separate thread.

pub mod board;
pub mod config;
pub mod coords;
pub mod error;
pub mod game;
pub mod input;
pub mod keys;
pub mod logging;
pub mod snake;
pub mod term;
