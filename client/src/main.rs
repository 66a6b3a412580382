use std::process::ExitCode;

use log::{error, info};

use client::{run::run_client_loop, window_conf};
use common::{GameConfig, GameEngine, GameError};

fn main() -> ExitCode {
    env_logger::init();

    let engine = match GameConfig::from_env()
        .map_err(GameError::from)
        .and_then(GameEngine::new)
    {
        Ok(engine) => engine,
        Err(e) => {
            error!("failed to set up the game: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "starting a {}x{} maze with {} coins",
        engine.config().cols,
        engine.config().rows,
        engine.initial_coin_count()
    );

    macroquad::Window::from_config(window_conf(engine.config()), run_client_loop(engine));

    ExitCode::SUCCESS
}
