mod config;
mod simulation;

use chrono::Local;
use config::SimulationConfig;
use env_logger::Env;
use log::info;
use simulation::SeasonSimulation;
use squad_core::utils::TimeEstimation;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = SimulationConfig::from_env();

    info!(
        "season simulation: seed {}, {} weeks, {}, squad of {}",
        config.seed, config.weeks, config.formation, config.squad_size
    );

    let mut simulation = SeasonSimulation::new(config, Local::now().date_naive())?;

    let (result, estimated) = TimeEstimation::estimate(|| simulation.run());

    info!("simulation finished: {} ms", estimated);

    result
}
