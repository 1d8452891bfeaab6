//! Run a random soup on a background thread and follow it from the main
//! thread via generation reports.
//!
//! Run with:
//!   cargo run --example background

use life_engine::{BackgroundRun, SimConfig, Simulation, SimulationController};
use life_patterns::{PatternLoader, RandomSoupLoader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SimConfig::from_json(
        r#"{"width": 64, "height": 64, "generations": 500, "delay_secs": 0.005, "workers": 4}"#,
    )?;
    let soup = RandomSoupLoader::new(config.height, config.width, 0.35, 2024).load()?;
    let grid = soup.place(config.width, config.height, config.offset)?;

    let sim = Simulation::from_config(&config, grid)?;
    let controller = SimulationController::from_config(&config)?;
    let run = BackgroundRun::spawn(controller, sim, None)?;

    for report in run.reports().iter() {
        if report.generation.0 % 50 == 0 {
            println!(
                "generation {:>4}: {} alive",
                report.generation,
                report.alive_count()
            );
        }
    }

    match run.join() {
        Some(state) => println!(
            "finished: {} at generation {} ({} alive)",
            state.termination,
            state.generation,
            state.grid.alive_count()
        ),
        None => println!("simulation thread panicked"),
    }
    Ok(())
}
