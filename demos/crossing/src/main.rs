//! crossing — a four-way intersection with mixed traffic.
//!
//! Spawns pedestrians, micro-mobility riders, and cars on a 12×12 painted
//! platform and runs them to their edge goals, streaming poses to CSV.

mod layout;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use ts_core::AgentClass;
use ts_grid::TileGrid;
use ts_output::{CsvWriter, OutputWriter, SimOutputObserver};
use ts_sim::SimulationBuilder;
use ts_spawn::PopulationSpec;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const DENSITY: u8 = 6;
const BASE_RISK: u8 = 40;
/// 0.05 s ticks — two simulated minutes.
const TOTAL_TICKS: u64 = 2_400;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== crossing — tilesim intersection demo ===");
    println!("Seed: {SEED}  |  Density: {DENSITY}/10  |  Base risk: {BASE_RISK}");
    println!();

    let grid = TileGrid::from_codes(&layout::painted_codes(), layout::TILE_SIZE)?;
    println!(
        "Platform: {0}×{0} tiles of {1} units",
        grid.side(),
        grid.tile_size()
    );

    let population = PopulationSpec {
        density: DENSITY,
        pedestrian_risk: BASE_RISK,
        mmv_risk: BASE_RISK,
        driver_risk: BASE_RISK,
    };
    let mut sim = SimulationBuilder::new()
        .grid(grid)
        .seed(SEED)
        .population(population)
        .build()?;

    let initial = sim.agents().len();
    let by_class = |class: AgentClass| sim.agents().iter().filter(|a| a.class() == class).count();
    println!(
        "Spawned {initial} agents: {} pedestrians, {} MMVs, {} drivers",
        by_class(AgentClass::Pedestrian),
        by_class(AgentClass::Mmv),
        by_class(AgentClass::Driver)
    );
    println!();

    std::fs::create_dir_all("output/crossing")?;
    let writer = CsvWriter::new(Path::new("output/crossing"))?;
    let mut observer = SimOutputObserver::new(writer, sim.params().dt_secs);

    let t0 = Instant::now();
    sim.run(TOTAL_TICKS, &mut observer);
    let elapsed = t0.elapsed();

    if let Some(e) = observer.take_error() {
        eprintln!("output error: {e}");
    }
    let mut writer = observer.into_writer();
    writer.finish()?;

    println!(
        "Ran {} ticks ({:.1} simulated s) in {:.3} s",
        sim.current_tick().0,
        sim.elapsed_secs(),
        elapsed.as_secs_f64()
    );
    println!(
        "  {} arrived, {} still en route",
        sim.arrived(),
        sim.agents().len()
    );
    println!("  traces in output/crossing/");

    Ok(())
}
