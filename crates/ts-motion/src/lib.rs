//! `ts-motion` — per-tick kinematic step models.
//!
//! Two models cover all agents:
//!
//! | Model                     | Applies to                      | State        |
//! |---------------------------|---------------------------------|--------------|
//! | [`walker::step_walker`]   | Pedestrians, dismounted MMVs    | `WalkerState`|
//! | [`vehicle::step_vehicle`] | Drivers, mounted MMVs           | `VehicleState`|
//!
//! Both are pure functions of the agent, its action, the tick parameters, and
//! (for walkers) a pre-tick [`WorldSnapshot`].  The driver loop captures the
//! snapshot once, then steps every agent against it, so within one tick no
//! agent sees another agent's same-tick movement.

pub mod action;
pub mod snapshot;
pub mod vehicle;
pub mod walker;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{Action, DriveAction, WalkAction};
pub use snapshot::{AgentView, WorldSnapshot};
pub use vehicle::step_vehicle;
pub use walker::{in_fov, should_refocus, step_walker};
