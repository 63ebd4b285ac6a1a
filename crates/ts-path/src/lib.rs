//! `ts-path` — pathfinding over the tile graph.
//!
//! # Pluggability
//!
//! The simulation builder requests paths through the [`Planner`] trait, so
//! applications can swap in custom algorithms (flow fields, precomputed
//! routes) without touching the driver.  The default [`AStarPlanner`] is a
//! lazy-deletion A* with unit step costs and a Manhattan heuristic.
//!
//! # Legality
//!
//! Neighbour generation is restricted to 4-connected cardinal moves, then
//! filtered per agent class:
//!
//! | Filter                     | Applies to  |
//! |----------------------------|-------------|
//! | Tile-kind membership       | all classes |
//! | No direct road↔sidewalk    | all classes |
//! | Lane keeping               | drivers     |
//! | Opposite-direction ban with crosswalk exemption | MMVs |
//!
//! The rules live in [`legality`] as small pure functions, tested directly.

pub mod astar;
pub mod legality;
pub mod planner;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use astar::AStarPlanner;
pub use planner::{Planner, TilePath};
