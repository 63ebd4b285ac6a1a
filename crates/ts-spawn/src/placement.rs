//! Spawn placement: the bounded retry loop and its five constraints.
//!
//! For every agent in population order, up to `max_attempts` candidate
//! placements are drawn and checked:
//!
//! 1. The candidate tile is strictly further than `min_goal_manhattan` grid
//!    steps from the goal tile.
//! 2. Walkers sharing a candidate tile with an already placed walker keep at
//!    least `min_separation` between positions.
//! 3. At most one driver per road tile (the driver tile pool is drawn
//!    without replacement).
//! 4. A driver's footprint must fit inside its tile.
//! 5. No bounding-circle overlap with any already placed agent.
//!
//! An agent that exhausts its attempts is excluded from the run, not an
//! error.  Exclusions are logged at debug level.

use glam::Vec2;
use ts_agent::Agent;
use ts_core::{heading_of, SimParams, SimRng};
use ts_grid::{Goal, Tile, TileGrid, TileKind, TravelDir};

use crate::goals::correct_vehicle_goal;
use crate::{SpawnError, SpawnResult};

/// World heading of a cardinal travel direction.
fn dir_heading(dir: TravelDir) -> f32 {
    let (dc, dr) = dir.offset();
    heading_of(Vec2::new(dc as f32, dr as f32))
}

/// The outcome of the placement pass.
#[derive(Debug)]
pub struct Placement {
    /// Agents that found a start position, in population order.
    pub placed: Vec<Agent>,
    /// Count excluded after exhausting their placement attempts.
    pub excluded: usize,
    /// Count of drivers dropped for want of a directionally consistent goal.
    pub dropped_no_goal: usize,
}

/// Place every agent of `agents`, consuming it.  Driver goals are replaced
/// by their directionally corrected choice (rule in [`crate::goals`]).
pub fn place_agents(
    grid: &TileGrid,
    agents: Vec<Agent>,
    road_goals: &[Goal],
    params: &SimParams,
    rng: &mut SimRng,
) -> SpawnResult<Placement> {
    let sidewalk_tiles: Vec<&Tile> = grid.tiles_of_kind(TileKind::Sidewalk).collect();
    // Without-replacement pool enforcing one driver per road tile.
    let mut driver_tiles: Vec<&Tile> = grid
        .tiles_of_kind(TileKind::Road)
        .filter(|t| !t.is_intersection())
        .collect();

    let any_drivers = agents
        .iter()
        .any(|a| matches!(a.kind, ts_agent::AgentKind::Driver(_)));
    if sidewalk_tiles.is_empty() && agents.iter().any(|a| a.walker_state().is_some()) {
        return Err(SpawnError::NoSpawnTiles("sidewalk"));
    }
    if driver_tiles.is_empty() && any_drivers {
        return Err(SpawnError::NoSpawnTiles("road"));
    }

    let mut placement = Placement {
        placed: Vec::with_capacity(agents.len()),
        excluded: 0,
        dropped_no_goal: 0,
    };

    for mut agent in agents {
        let is_driver = matches!(agent.kind, ts_agent::AgentKind::Driver(_));
        let placed = if is_driver {
            try_place_driver(
                &mut agent,
                &mut driver_tiles,
                road_goals,
                grid.side(),
                params,
                rng,
                &placement,
            )
        } else {
            try_place_walker(&mut agent, &sidewalk_tiles, params, rng, &placement.placed)
        };
        match placed {
            Outcome::Placed => placement.placed.push(agent),
            Outcome::Exhausted => {
                log::debug!(
                    "agent {} excluded after {} placement attempts",
                    agent.id,
                    params.spawn.max_attempts
                );
                placement.excluded += 1;
            }
            Outcome::NoConsistentGoal => {
                log::debug!("driver {} dropped: no directionally consistent goal", agent.id);
                placement.dropped_no_goal += 1;
            }
        }
    }

    log::info!(
        "placement: {} placed, {} excluded, {} dropped without goal",
        placement.placed.len(),
        placement.excluded,
        placement.dropped_no_goal
    );
    Ok(placement)
}

enum Outcome {
    Placed,
    Exhausted,
    NoConsistentGoal,
}

fn try_place_walker(
    agent: &mut Agent,
    tiles: &[&Tile],
    params: &SimParams,
    rng: &mut SimRng,
    placed: &[Agent],
) -> Outcome {
    let goal_loc = agent.goal.grid_loc;
    for _ in 0..params.spawn.max_attempts {
        let Some(tile) = rng.choose(tiles) else {
            return Outcome::Exhausted;
        };
        if tile.grid_loc.manhattan(goal_loc) <= params.spawn.min_goal_manhattan {
            continue;
        }
        let position = random_point_in(tile, agent.radius, rng);
        if !separation_ok(tile, position, params.spawn.min_separation, placed)
            || overlaps_any(position, agent.radius, placed)
        {
            continue;
        }
        let heading = heading_of(agent.goal.position - position);
        agent.place(tile.id, position, heading);
        return Outcome::Placed;
    }
    Outcome::Exhausted
}

fn try_place_driver(
    agent: &mut Agent,
    tile_pool: &mut Vec<&Tile>,
    road_goals: &[Goal],
    side: usize,
    params: &SimParams,
    rng: &mut SimRng,
    placement: &Placement,
) -> Outcome {
    let mut saw_candidate = false;
    for _ in 0..params.spawn.max_attempts {
        if tile_pool.is_empty() {
            return Outcome::Exhausted;
        }
        let idx = rng.gen_range(0..tile_pool.len());
        let tile = tile_pool[idx];

        // Footprint containment: drivers sit at the tile centre.
        if agent.radius > tile.size * 0.5 {
            continue;
        }
        let Some(goal) = correct_vehicle_goal(tile, &agent.goal, road_goals, side, rng) else {
            saw_candidate = true;
            continue;
        };
        if tile.grid_loc.manhattan(goal.grid_loc) <= params.spawn.min_goal_manhattan {
            continue;
        }
        let position = tile.center;
        if overlaps_any(position, agent.radius, &placement.placed) {
            continue;
        }

        let heading = tile
            .dir
            .map(dir_heading)
            .unwrap_or_else(|| heading_of(goal.position - position));
        agent.goal = goal;
        agent.place(tile.id, position, heading);
        tile_pool.swap_remove(idx);
        return Outcome::Placed;
    }
    if saw_candidate {
        Outcome::NoConsistentGoal
    } else {
        Outcome::Exhausted
    }
}

/// Uniform point inside the tile, inset by the body radius.
fn random_point_in(tile: &Tile, radius: f32, rng: &mut SimRng) -> Vec2 {
    let half = (tile.size * 0.5 - radius).max(0.0);
    if half == 0.0 {
        return tile.center;
    }
    tile.center + Vec2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half))
}

/// Walker separation: everyone already started on this tile must be at
/// least `min_separation` away.
fn separation_ok(tile: &Tile, position: Vec2, min_separation: f32, placed: &[Agent]) -> bool {
    placed
        .iter()
        .filter(|a| a.start_tile == tile.id)
        .all(|a| a.start_position.distance(position) >= min_separation)
}

fn overlaps_any(position: Vec2, radius: f32, placed: &[Agent]) -> bool {
    placed
        .iter()
        .any(|a| a.position.distance(position) < radius + a.radius)
}
