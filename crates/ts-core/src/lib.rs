//! `ts-core` — foundational types for the tilesim traffic micro-simulation.
//!
//! This crate is a dependency of every other `ts-*` crate.  It intentionally
//! has no `ts-*` dependencies and minimal external ones (`rand` and `glam`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `TileId`, `GoalId`                             |
//! | [`class`]  | `AgentClass` enum (pedestrian / MMV / driver)             |
//! | [`angle`]  | Heading normalization and ground-plane vector helpers     |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (global)                 |
//! | [`time`]   | `Tick`, `SimClock`                                        |
//! | [`params`] | Consolidated simulation parameters (no ambient globals)   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod angle;
pub mod class;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{heading_of, heading_vec, wrap_angle};
pub use class::AgentClass;
pub use ids::{AgentId, GoalId, TileId};
pub use params::{
    GoalParams, PerceptionParams, SimParams, SpawnParams, VehicleParams, WalkParams,
};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
