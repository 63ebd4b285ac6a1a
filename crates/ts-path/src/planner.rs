//! Planning trait and the path type it returns.

use ts_core::{AgentClass, TileId};
use ts_grid::TileGrid;

// ── TilePath ──────────────────────────────────────────────────────────────────

/// An ordered tile sequence from a start tile to a goal tile, inclusive.
///
/// Paths are immutable once planned; agents track their progress with a
/// separate monotone index, so a path can be shared or re-inspected freely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TilePath {
    tiles: Vec<TileId>,
}

impl TilePath {
    pub fn new(tiles: Vec<TileId>) -> Self {
        Self { tiles }
    }

    /// An empty path — the "no path found" value.  Agents holding one steer
    /// straight at their goal position instead of following waypoints.
    pub fn empty() -> Self {
        Self { tiles: Vec::new() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Waypoint at `index`; `None` once the path is exhausted.  All path
    /// accesses go through this guard.
    #[inline]
    pub fn waypoint(&self, index: usize) -> Option<TileId> {
        self.tiles.get(index).copied()
    }

    #[inline]
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }
}

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable path planner.
///
/// Implementations must be `Send + Sync` so planning can run from worker
/// threads during setup.  Returns `None` when no legal path exists — a
/// non-fatal outcome: the agent keeps an empty path and heads straight for
/// its goal.
pub trait Planner: Send + Sync {
    /// Plan a path from `start` to `goal` for an agent of `class`.
    ///
    /// Both IDs must refer to tiles of `grid`; unknown IDs yield `None`.
    fn plan(
        &self,
        grid: &TileGrid,
        start: TileId,
        goal: TileId,
        class: AgentClass,
    ) -> Option<TilePath>;
}
