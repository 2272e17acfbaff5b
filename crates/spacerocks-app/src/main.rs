use std::process::ExitCode;

use spacerocks_app::config::AppConfig;
use spacerocks_app::control;
use spacerocks_app::input::{Autopilot, Idle, InputSource};
use spacerocks_app::services::Services;
use spacerocks_app::state::AppState;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path),
        None => Ok(AppConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), control::ControlError> {
    log::info!("Starting SPACE ROCKS (seed {})", config.sim.seed);

    let state = AppState::new();
    let input: Box<dyn InputSource> = if config.autopilot {
        Box::new(Autopilot::default())
    } else {
        Box::new(Idle)
    };
    control::start_simulation(&state, config, input, Services::logging(config.report_every))?;
    control::wait_for_finish(&state)?;

    if let Some(last) = control::get_snapshot(&state)? {
        log::info!(
            "finished at tick {}: {:?}, {} asteroids left",
            last.time.tick,
            last.phase,
            last.asteroid_count()
        );
    }
    Ok(())
}
