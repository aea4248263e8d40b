use anyhow::Result;

use tick_snake::config::GameConfig;
use tick_snake::game::SnakeGame;
use tick_snake::logging;
use tick_snake::term::install_panic_hook;

fn main() -> Result<()> {
    logging::init()?;
    install_panic_hook();

    let mut game = SnakeGame::new(GameConfig::default())?;

    // The terminal is back to normal by the time run() returns, on any path
    let outcome = game.run()?;
    println!("{}", outcome.message());

    Ok(())
}
