use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub const LOG_FILE: &str = "tick-snake.log";

/// The board owns the terminal, so log records go to `LOG_FILE` instead of
/// stderr, and only when `RUST_LOG` asks for them.
pub fn init() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = open_log_file(Path::new(LOG_FILE))?;
    builder(file).try_init().context("failed to install logger")?;
    Ok(())
}

pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

pub fn builder(file: File) -> Builder {
    let mut builder = Builder::from_env(Env::default());
    builder.target(Target::Pipe(Box::new(file)));
    builder
}
