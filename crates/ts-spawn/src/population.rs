//! Population sizing, risk sampling, and the goal lotteries.
//!
//! The density slider (0–10) scales each class against the grid's capacity
//! for it: drivers against non-intersection road tiles, pedestrians and MMVs
//! against sidewalk tiles.  Each agent then draws a risk score around its
//! class base and enters the goal lottery for its legal edge-goal pool.

use ts_agent::Agent;
use ts_core::{AgentId, SimParams, SimRng};
use ts_grid::{edge_goals, Goal, TileGrid, TileKind};

use crate::{SpawnError, SpawnResult};

/// Operator-facing population sliders.
#[derive(Clone, Copy, Debug)]
pub struct PopulationSpec {
    /// Density 0–10; 0 spawns nobody, 10 fills every capacity fraction.
    pub density: u8,
    /// Base risk 0–100 per class; per-agent risk is drawn around it.
    pub pedestrian_risk: u8,
    pub mmv_risk: u8,
    pub driver_risk: u8,
}

impl Default for PopulationSpec {
    fn default() -> Self {
        Self {
            density: 5,
            pedestrian_risk: 50,
            mmv_risk: 50,
            driver_risk: 50,
        }
    }
}

/// Sized class counts for one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopulationCounts {
    pub pedestrians: usize,
    pub mmvs: usize,
    pub drivers: usize,
}

impl PopulationCounts {
    pub fn total(&self) -> usize {
        self.pedestrians + self.mmvs + self.drivers
    }
}

/// Size each class from the density slider and the grid's tile counts.
pub fn population_counts(grid: &TileGrid, spec: &PopulationSpec, params: &SimParams) -> PopulationCounts {
    let density = (spec.density.min(10) as f32) / 10.0;
    let road_tiles = grid
        .tiles_of_kind(TileKind::Road)
        .filter(|t| !t.is_intersection())
        .count();
    let sidewalk_tiles = grid.tiles_of_kind(TileKind::Sidewalk).count();

    PopulationCounts {
        pedestrians: (density * params.spawn.pedestrian_tile_fraction * sidewalk_tiles as f32)
            as usize,
        mmvs: (density * params.spawn.mmv_tile_fraction * sidewalk_tiles as f32) as usize,
        drivers: (density * params.spawn.driver_tile_fraction * road_tiles as f32) as usize,
    }
}

/// Per-agent risk: uniform around the class base, clamped to 0–100.
fn sample_risk(base: u8, spread: i32, rng: &mut SimRng) -> u8 {
    let drawn = base as i32 + rng.gen_range(-spread..=spread);
    drawn.clamp(0, 100) as u8
}

/// The edge-goal pools every class draws from.
pub struct GoalPools {
    pub sidewalk: Vec<Goal>,
    pub road: Vec<Goal>,
    /// Sidewalk + road, for the MMV lottery.
    pub mixed: Vec<Goal>,
}

/// Build the per-kind goal pools.  Goal IDs are numbered sidewalk-first.
pub fn goal_pools(grid: &TileGrid) -> SpawnResult<GoalPools> {
    let sidewalk = edge_goals(grid, TileKind::Sidewalk, 0);
    let road = edge_goals(grid, TileKind::Road, sidewalk.len() as u32);
    if sidewalk.is_empty() {
        return Err(SpawnError::NoGoals("sidewalk"));
    }
    if road.is_empty() {
        return Err(SpawnError::NoGoals("road"));
    }
    let mixed = sidewalk.iter().chain(road.iter()).cloned().collect();
    Ok(GoalPools {
        sidewalk,
        road,
        mixed,
    })
}

/// Build the unplaced agent population: sized, risk-sampled, goals assigned
/// by lottery, walkers initially distracted with probability `risk / 100`.
///
/// Driver goals are provisional here — the placement pass replaces them with
/// a directionally consistent goal once a start tile is known.
pub fn build_population(
    grid: &TileGrid,
    spec: &PopulationSpec,
    params: &SimParams,
    rng: &mut SimRng,
) -> SpawnResult<(Vec<Agent>, GoalPools)> {
    let counts = population_counts(grid, spec, params);
    let pools = goal_pools(grid)?;

    let mut agents = Vec::with_capacity(counts.total());
    let mut next_id = 0u32;
    let mut take_id = || {
        let id = AgentId(next_id);
        next_id += 1;
        id
    };

    for _ in 0..counts.pedestrians {
        let goal = lottery(&pools.sidewalk, "sidewalk", rng)?;
        let risk = sample_risk(spec.pedestrian_risk, params.perception.risk_spread, rng);
        let mut agent = Agent::pedestrian(take_id(), goal, risk, &params.walk);
        roll_initial_distraction(&mut agent, rng);
        agents.push(agent);
    }
    for _ in 0..counts.mmvs {
        let goal = lottery(&pools.mixed, "sidewalk or road", rng)?;
        let risk = sample_risk(spec.mmv_risk, params.perception.risk_spread, rng);
        let mut agent = Agent::mmv(take_id(), goal, risk, params);
        roll_initial_distraction(&mut agent, rng);
        agents.push(agent);
    }
    for _ in 0..counts.drivers {
        let goal = lottery(&pools.road, "road", rng)?;
        let risk = sample_risk(spec.driver_risk, params.perception.risk_spread, rng);
        agents.push(Agent::driver(take_id(), goal, risk, params));
    }

    log::info!(
        "population sized for density {}: {} pedestrians, {} MMVs, {} drivers",
        spec.density,
        counts.pedestrians,
        counts.mmvs,
        counts.drivers
    );
    Ok((agents, pools))
}

fn lottery(pool: &[Goal], kind: &'static str, rng: &mut SimRng) -> SpawnResult<Goal> {
    rng.choose(pool).cloned().ok_or(SpawnError::NoGoals(kind))
}

fn roll_initial_distraction(agent: &mut Agent, rng: &mut SimRng) {
    let p = agent.risk as f64 / 100.0;
    let distracted = rng.gen_bool(p);
    if let Some(w) = agent.walker_state_mut() {
        w.distracted = distracted;
    }
}
