//! `ts-grid` — the painted tile grid, materialized into world space.
//!
//! The grid-painting UI hands the core an R×R array of tile-code strings
//! (`"grass"`, `"sidewalk"`, `"road-N"`, `"road-CW-E"`, …) plus a tile size.
//! This crate parses those codes into typed [`Tile`]s with world-space
//! centres, edge flags, and travel directions, and answers the queries the
//! pathfinder and spawner need.  The grid is immutable after construction.
//!
//! # Crate layout
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`tile`]  | `TileKind`, `TravelDir`, `GridLoc`, `Tile`, code parsing |
//! | [`grid`]  | `TileGrid` — construction and queries                 |
//! | [`goal`]  | `Goal` — edge-tile targets for agent assignment       |
//! | [`error`] | `GridError`, `GridResult<T>`                          |
//!
//! # Coordinate convention
//!
//! Row 0 is the north edge; rows increase southward.  `N = row−1`,
//! `S = row+1`, `E = col+1`, `W = col−1`.  World centres are laid out so the
//! platform square is centred on the origin, with `Vec2::y` standing in for
//! world z (which also increases southward).

pub mod error;
pub mod goal;
pub mod grid;
pub mod tile;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GridError, GridResult};
pub use goal::{Goal, edge_goals};
pub use grid::TileGrid;
pub use tile::{GridLoc, Tile, TileKind, TravelDir};
