//! Life Quickstart: a complete, minimal simulation from scratch.
//!
//! Demonstrates:
//!   1. Loading a pattern from plain text
//!   2. Placing it on a grid with an offset
//!   3. Stepping a lockstep Simulation and reading verdicts
//!   4. Running the controller loop with a console renderer
//!   5. Swapping in a different rule
//!
//! Run with:
//!   cargo run --example quickstart

use std::time::Duration;

use life_engine::{
    ConsoleRenderer, Engine, RunOptions, Simulation, SimulationController, Termination,
    DEFAULT_HISTORY_CAPACITY,
};
use life_patterns::{library, PatternLoader, PlainTextLoader};
use life_rules::{ConwayRules, LifeLikeRule};

// ─── Grid parameters ────────────────────────────────────────────

const WIDTH: u32 = 24;
const HEIGHT: u32 = 12;

const TOAD: &str = "
! Toad
.***
***.
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Life Quickstart ===\n");

    // 1-2. Load and place.
    let toad = PlainTextLoader::new(TOAD).load()?;
    let grid = toad.place(WIDTH, HEIGHT, (5, 10))?;
    println!(
        "Toad: {} cells on a {}x{} grid",
        grid.alive_count(),
        WIDTH,
        HEIGHT
    );

    // 3. Lockstep stepping.
    let mut sim = Simulation::new(
        grid,
        Engine::new(),
        Box::new(ConwayRules),
        DEFAULT_HISTORY_CAPACITY,
    );
    for _ in 0..3 {
        let verdict = sim.step();
        println!(
            "  generation {}: {} alive, verdict {:?}",
            sim.generation(),
            sim.grid().alive_count(),
            verdict
        );
    }

    // 4. Controller loop with rendering.
    let glider = library::get("glider").ok_or("glider missing from library")?;
    let start = glider.place(WIDTH, HEIGHT, (1, 1))?;
    let controller = SimulationController::new(RunOptions {
        max_generations: Some(40),
        delay: Duration::from_millis(50),
        ..RunOptions::default()
    });
    let mut console = ConsoleRenderer::stdout();
    let state = controller.run(start, Engine::new(), Box::new(ConwayRules), Some(&mut console));
    match state.termination {
        Termination::Stabilized if state.is_extinct() => {
            println!("\nAll cells died at generation {}", state.generation)
        }
        Termination::Stabilized => println!("\nStable at generation {}", state.generation),
        Termination::Oscillating { period } => println!(
            "\nOscillating with period {period} at generation {}",
            state.generation
        ),
        other => println!("\nStopped at generation {}: {other}", state.generation),
    }

    // 5. HighLife on the same start.
    let highlife = SimulationController::new(RunOptions {
        max_generations: Some(40),
        ..RunOptions::default()
    });
    let start = glider.place(WIDTH, HEIGHT, (1, 1))?;
    let state = highlife.run(start, Engine::new(), Box::new(LifeLikeRule::highlife()), None);
    println!(
        "HighLife: {} after {} generations",
        state.termination, state.generation
    );

    println!("Done.");
    Ok(())
}
