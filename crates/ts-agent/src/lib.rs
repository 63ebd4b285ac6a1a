//! `ts-agent` — the agent data model.
//!
//! One [`Agent`] struct carries the state every participant shares (position,
//! heading, scalar speed, goal, path progress); the class-specific kinematic
//! state lives in the tagged [`AgentKind`] payload.  Dispatch on the tag
//! replaces the virtual-method hierarchy of a class-based design: the step
//! models in `ts-motion` match on the variant and mutate only its payload.
//!
//! # Ownership
//!
//! Each agent exclusively owns its path and kinematic state.  `Goal` is a
//! small owned copy (goals are setup-time constants); tiles are referenced by
//! `TileId` into the shared read-only grid.

pub mod agent;
pub mod kinematics;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, AgentKind};
pub use kinematics::{VehicleState, WalkerState};
