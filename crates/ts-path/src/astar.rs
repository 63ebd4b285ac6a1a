//! Lazy-deletion A* over the tile graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use ts_core::{AgentClass, TileId};
use ts_grid::{TileGrid, TravelDir};

use crate::legality::move_allowed;
use crate::planner::{Planner, TilePath};

/// Standard A* with unit step cost and a Manhattan heuristic.
///
/// The open set is a binary heap plus a best-`g` map: a node re-discovered
/// with a strictly better `g` is pushed again and the stale heap entry is
/// skipped when popped; settled nodes are never re-expanded.  Ties on `f`
/// break FIFO by push order, so among equally good frontiers the first-found
/// tile wins.
pub struct AStarPlanner;

impl Planner for AStarPlanner {
    fn plan(
        &self,
        grid: &TileGrid,
        start: TileId,
        goal: TileId,
        class: AgentClass,
    ) -> Option<TilePath> {
        astar(grid, start, goal, class)
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Heap key: min-`f`, then FIFO by push sequence number.
type OpenKey = Reverse<(i32, u64)>;

fn astar(grid: &TileGrid, start: TileId, goal: TileId, class: AgentClass) -> Option<TilePath> {
    let start_tile = grid.tile(start)?;
    let goal_tile = grid.tile(goal)?;
    let goal_dir: Option<TravelDir> = goal_tile.dir;

    let h0 = start_tile.grid_loc.manhattan(goal_tile.grid_loc);

    let mut open: BinaryHeap<(OpenKey, TileId, i32)> = BinaryHeap::new();
    let mut best_g: FxHashMap<TileId, i32> = FxHashMap::default();
    let mut parent: FxHashMap<TileId, TileId> = FxHashMap::default();
    let mut seq: u64 = 0;

    best_g.insert(start, 0);
    open.push((Reverse((h0, seq)), start, 0));

    while let Some((_, tile_id, g)) = open.pop() {
        // Stale entry: a strictly better g for this tile was pushed later.
        match best_g.get(&tile_id) {
            Some(&bg) if g > bg => continue,
            _ => {}
        }

        if tile_id == goal {
            return Some(reconstruct(&parent, goal));
        }

        let Some(curr) = grid.tile(tile_id) else {
            continue;
        };

        for dir in TravelDir::CARDINAL {
            let Some(next) = grid.tile_at(curr.grid_loc.step(dir)) else {
                continue;
            };
            if !move_allowed(class, curr, next, goal_dir) {
                continue;
            }

            let tentative = g + 1;
            let improves = best_g.get(&next.id).is_none_or(|&bg| tentative < bg);
            if improves {
                best_g.insert(next.id, tentative);
                parent.insert(next.id, tile_id);
                let f = tentative + next.grid_loc.manhattan(goal_tile.grid_loc);
                seq += 1;
                open.push((Reverse((f, seq)), next.id, tentative));
            }
        }
    }

    None
}

/// Walk parent pointers back from the goal and reverse.  The chain ends at
/// the start tile, which never receives a parent entry.
fn reconstruct(parent: &FxHashMap<TileId, TileId>, goal: TileId) -> TilePath {
    let mut tiles = vec![goal];
    let mut curr = goal;
    while let Some(&prev) = parent.get(&curr) {
        tiles.push(prev);
        curr = prev;
    }
    tiles.reverse();
    TilePath::new(tiles)
}
