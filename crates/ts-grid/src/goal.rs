//! Edge-tile goals.
//!
//! A [`Goal`] is the projection of a boundary tile into a navigation target:
//! agents are assigned one at setup and steer toward its position once their
//! tile path is exhausted.  Goals are created per run and read-only during it.

use glam::Vec2;
use ts_core::{GoalId, TileId};

use crate::tile::{GridLoc, TileKind, TravelDir};
use crate::TileGrid;

/// A navigation target derived from an edge tile.
///
/// Invariant: `tile` is a real boundary tile of the grid and `kind`/`dir`
/// mirror that tile's metadata (guaranteed by [`edge_goals`], the only
/// constructor).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Goal {
    pub id: GoalId,
    /// The owning edge tile.
    pub tile: TileId,
    /// World-space target position (the edge tile's centre).
    pub position: Vec2,
    pub kind: TileKind,
    pub grid_loc: GridLoc,
    /// Travel direction of the owning tile; present for road goals.
    pub dir: Option<TravelDir>,
}

/// Build one goal per boundary tile of `kind`.
///
/// IDs are assigned sequentially starting at `first_id`, so callers can
/// number several goal sets (road, sidewalk) without collisions.
pub fn edge_goals(grid: &TileGrid, kind: TileKind, first_id: u32) -> Vec<Goal> {
    grid.edge_tiles_of_kind(kind)
        .enumerate()
        .map(|(i, tile)| Goal {
            id: GoalId(first_id + i as u32),
            tile: tile.id,
            position: tile.center,
            kind: tile.kind,
            grid_loc: tile.grid_loc,
            dir: tile.dir,
        })
        .collect()
}
