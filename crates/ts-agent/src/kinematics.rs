//! Per-variant kinematic state payloads.

use glam::Vec2;
use ts_core::{heading_vec, VehicleParams};

// ── WalkerState ───────────────────────────────────────────────────────────────

/// Social-force state for pedestrians and dismounted MMVs.
#[derive(Clone, Debug, Default)]
pub struct WalkerState {
    /// The integrated social-force velocity (2D, ground plane).  The agent's
    /// scalar `speed` mirrors this vector's length after each step.
    pub sf_velocity: Vec2,
    /// Attention flag; narrows the FOV and shortens the neighbour query
    /// radius until a refocus check clears it.
    pub distracted: bool,
    /// Cached random perceptual offset applied to the current waypoint while
    /// distracted.  Re-sampled only when `fuzzy_index` falls behind the
    /// agent's path index.
    pub fuzzy_offset: Option<Vec2>,
    /// Path index at which `fuzzy_offset` was sampled.
    pub fuzzy_index: usize,
}

// ── VehicleState ──────────────────────────────────────────────────────────────

/// Bicycle-model state for drivers and mounted MMVs.
///
/// The vehicle is tracked by its rear-axle reference point `origin`; the
/// visual centre `Agent::position` sits half a wheelbase ahead of it along
/// the heading and is recomputed after every integration step.
#[derive(Clone, Debug)]
pub struct VehicleState {
    /// Rear-axle reference point in the ground plane.
    pub origin: Vec2,
    /// Current steering angle, radians, clamped to the class maximum.
    pub steering_angle: f32,
    /// Axle-to-axle length (the bicycle-model divisor).
    pub wheelbase: f32,
    pub width: f32,
    pub length: f32,
}

impl VehicleState {
    /// Fresh state for a vehicle of the given class constants, not yet
    /// placed (origin at the world origin until spawn assigns a position).
    pub fn new(params: &VehicleParams) -> Self {
        Self {
            origin: Vec2::ZERO,
            steering_angle: 0.0,
            wheelbase: params.wheelbase,
            width: params.width,
            length: params.length,
        }
    }

    /// Rear-axle point for a vehicle whose visual centre is at `position`
    /// facing `heading`.
    #[inline]
    pub fn origin_for(position: Vec2, heading: f32, wheelbase: f32) -> Vec2 {
        position - heading_vec(heading) * (wheelbase * 0.5)
    }

    /// Visual centre corresponding to the current origin and `heading`.
    #[inline]
    pub fn position_from_origin(&self, heading: f32) -> Vec2 {
        self.origin + heading_vec(heading) * (self.wheelbase * 0.5)
    }

    /// Re-derive the origin after the centre was moved externally
    /// (spawn placement, goal snap).
    #[inline]
    pub fn sync_origin(&mut self, position: Vec2, heading: f32) {
        self.origin = Self::origin_for(position, heading, self.wheelbase);
    }
}
