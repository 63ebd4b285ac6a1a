//! Actions: the per-tick intent an agent hands to its step model.
//!
//! Actions are produced by the decision layer in `ts-sim` (waypoint tracking,
//! crosswalk braking) and consumed here by the step models.  Keeping them as
//! plain data makes the decision and integration halves of a tick separately
//! testable.

use glam::Vec2;

/// Intent for one walker tick: the world-space point to move toward.
///
/// The step model turns this into a desired velocity at preferred speed and
/// relaxes the social-force velocity toward it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkAction {
    pub target: Vec2,
}

/// Intent for one vehicle tick.  Both inputs are normalized to `[-1, 1]`
/// (the step model clamps out-of-range values).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriveAction {
    /// Throttle (positive) or brake (negative) fraction.
    pub accel: f32,
    /// Steering slew fraction; positive turns toward positive angles.
    pub steer: f32,
}

impl DriveAction {
    pub const COAST: Self = Self {
        accel: 0.0,
        steer: 0.0,
    };
}

/// The resolved action for one agent-tick.  MMVs produce whichever variant
/// matches their current mount state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Walk(WalkAction),
    Drive(DriveAction),
}
