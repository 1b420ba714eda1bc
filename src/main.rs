mod config;
mod error;
mod game;
mod terminal;

use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use config::GameConfig;
use error::GameError;
use terminal::InputSession;

fn main() -> ExitCode {
    // Logs go to stderr, which shares the screen with the game. Redirect it:
    //   RUST_LOG=info   nothing-to-hide 2>run.log   # days, branches, endings
    //   RUST_LOG=debug  nothing-to-hide 2>run.log   # + every judgment and plan
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    match play() {
        Ok(()) => {
            println!("Thanks for your service, Inspector.");
            ExitCode::SUCCESS
        }
        Err(err) if matches!(err.downcast_ref::<GameError>(), Some(GameError::Interrupted)) => {
            println!("\n[SYSTEM] Connection terminated.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("\n[ERROR] {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn play() -> Result<()> {
    let config = GameConfig::from_env();
    let campaign = config.load_campaign()?;

    let mut rng = match config.seed {
        Some(seed) => {
            info!("Shuffling with fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut session = InputSession::acquire().context("failed to prepare the terminal")?;
    let result = terminal::run(&mut session, &campaign, &config, &mut rng);
    let released = session.release();

    if let Err(err) = result {
        if let Err(release_err) = released {
            warn!("Failed to restore the terminal after an error: {release_err}");
        }
        return Err(err.into());
    }
    released.context("failed to restore the terminal")?;
    Ok(())
}
