use anyhow::Context;
use env_logger::Env;
use great_wall::algo_core::AlgoCore;
use great_wall::settings::AlgoSettings;
use great_wall::strategy::build_strategy;
use log::*;
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = AlgoSettings::from_env().context("loading algo settings")?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    info!("Random seed: {}", seed);

    let mut strategy = build_strategy(&settings, seed);
    info!("Starting {} strategy with {:?}", strategy.name(), settings);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = AlgoCore::run(strategy.as_mut(), stdin.lock(), stdout.lock())?;
    info!("Played {} turns over {} action frames", stats.turns, stats.action_frames);

    Ok(())
}
