//! Benchmark profiles for the Life simulation crates.
//!
//! Provides pre-built starting grids and engines for benchmarks and
//! examples:
//!
//! - [`reference_profile`]: 256x256 random soup at 35% density
//! - [`stress_profile`]: 1024x1024 random soup, stepped on all available cores
//! - [`gun_profile`]: the Gosper glider gun on a 200x200 grid
//! - [`sparse_profile`]: a handful of gliders on a 100,000 x 100,000 grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::thread;

use life_engine::Engine;
use life_patterns::{library, Pattern, PatternError, PatternLoader, RandomSoupLoader};
use life_space::Grid;

/// A starting grid paired with the engine it should be stepped on.
#[derive(Clone, Debug)]
pub struct BenchProfile {
    /// Short identifier used in benchmark names.
    pub name: &'static str,
    /// Generation 0.
    pub grid: Grid,
    /// Engine to step with.
    pub engine: Engine,
}

/// Worker count for the parallel profiles.
pub fn available_workers() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

fn soup(side: u32, density: f64, seed: u64) -> Result<Grid, PatternError> {
    RandomSoupLoader::new(side, side, density, seed)
        .load()?
        .place(side, side, (0, 0))
}

/// Build the reference profile: 256x256 soup, sequential engine.
pub fn reference_profile(seed: u64) -> Result<BenchProfile, PatternError> {
    Ok(BenchProfile {
        name: "soup_256",
        grid: soup(256, 0.35, seed)?,
        engine: Engine::new(),
    })
}

/// Build the stress profile: 1024x1024 soup (~370K alive cells).
///
/// Same density as [`reference_profile`] at 16x the area, with one worker
/// per available core and a low parallel threshold so every step splits.
pub fn stress_profile(seed: u64) -> Result<BenchProfile, PatternError> {
    Ok(BenchProfile {
        name: "soup_1024",
        grid: soup(1024, 0.35, seed)?,
        engine: Engine::with_workers(available_workers(), 1024),
    })
}

/// The glider gun in the top-left corner of a 200x200 grid.
pub fn gun_profile() -> Result<BenchProfile, PatternError> {
    let gun = library::get("glider-gun").unwrap_or_default();
    Ok(BenchProfile {
        name: "glider_gun",
        grid: gun.place(200, 200, (5, 5))?,
        engine: Engine::new(),
    })
}

/// `count` gliders spread along the diagonal of a very large grid.
///
/// The step cost here should track the 5-cell gliders, not the
/// 10^10-cell area.
pub fn sparse_profile(count: usize) -> Result<BenchProfile, PatternError> {
    const SIDE: u32 = 100_000;
    let glider = library::get("glider").unwrap_or_default();
    let spacing = (SIDE as usize / (count + 1)) as i32;
    let pattern = (1..=count as i32)
        .flat_map(|i| glider.translate(i * spacing, i * spacing).iter().collect::<Vec<_>>())
        .collect::<Pattern>();
    Ok(BenchProfile {
        name: "sparse_gliders",
        grid: pattern.place(SIDE, SIDE, (0, 0))?,
        engine: Engine::new(),
    })
}
