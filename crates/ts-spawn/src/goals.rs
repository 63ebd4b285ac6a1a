//! Directional goal correction for drivers.
//!
//! Traffic is left-hand and vehicles never reverse, so a driver spawned on a
//! tile flowing north can only leave the platform through exit lanes it can
//! reach without driving against a lane: the north edge, or a side edge
//! whose exit lane lies at or ahead of the spawn row.  Two filters encode
//! this.  Goals strictly behind the start in its own lane line are removed,
//! and the remaining goals must sit on the edge their travel direction exits
//! through (north lanes exit at row 0, east lanes at the last column, and so
//! on), side exits additionally at or ahead of the start.  The lottery goal
//! is checked against these rules once the start tile is known and replaced
//! by a random consistent goal when it fails; a driver with no consistent
//! goal at all is dropped from the run.

use ts_core::SimRng;
use ts_grid::{Goal, GridLoc, Tile, TravelDir};

/// Whether `goal` is reachable from a vehicle start at `start` facing
/// `facing` without wrong-way travel, on a square grid of `side` tiles.
pub fn goal_consistent(start: GridLoc, facing: TravelDir, goal: &Goal, side: usize) -> bool {
    let Some(goal_dir) = goal.dir else {
        return false;
    };
    let loc = goal.grid_loc;
    let edge = side as i32 - 1;

    // Goals strictly behind the start in its own lane line are unreachable.
    let behind = match facing {
        TravelDir::North => loc.col == start.col && loc.row > start.row,
        TravelDir::South => loc.col == start.col && loc.row < start.row,
        TravelDir::East => loc.row == start.row && loc.col < start.col,
        TravelDir::West => loc.row == start.row && loc.col > start.col,
        TravelDir::Cross => return false,
    };
    if behind {
        return false;
    }

    // The goal must lie on the edge its lane exits through; side exits must
    // also sit at or ahead of the start along the facing axis.
    match facing {
        TravelDir::North => match goal_dir {
            TravelDir::North => loc.row == 0,
            TravelDir::East => loc.col == edge && loc.row <= start.row,
            TravelDir::West => loc.col == 0 && loc.row <= start.row,
            _ => false,
        },
        TravelDir::South => match goal_dir {
            TravelDir::South => loc.row == edge,
            TravelDir::East => loc.col == edge && loc.row >= start.row,
            TravelDir::West => loc.col == 0 && loc.row >= start.row,
            _ => false,
        },
        TravelDir::East => match goal_dir {
            TravelDir::East => loc.col == edge,
            TravelDir::North => loc.row == 0 && loc.col >= start.col,
            TravelDir::South => loc.row == edge && loc.col >= start.col,
            _ => false,
        },
        TravelDir::West => match goal_dir {
            TravelDir::West => loc.col == 0,
            TravelDir::North => loc.row == 0 && loc.col <= start.col,
            TravelDir::South => loc.row == edge && loc.col <= start.col,
            _ => false,
        },
        TravelDir::Cross => false,
    }
}

/// Keep the lottery goal when it is consistent with the start tile,
/// otherwise draw a replacement from the consistent subset of `pool`.
/// `None` when no consistent goal exists — the caller drops the agent.
pub fn correct_vehicle_goal(
    start: &Tile,
    current: &Goal,
    pool: &[Goal],
    side: usize,
    rng: &mut SimRng,
) -> Option<Goal> {
    let facing = start.dir?;
    if goal_consistent(start.grid_loc, facing, current, side) {
        return Some(current.clone());
    }
    let candidates: Vec<&Goal> = pool
        .iter()
        .filter(|g| goal_consistent(start.grid_loc, facing, g, side))
        .collect();
    rng.choose(&candidates).map(|g| (*g).clone())
}
