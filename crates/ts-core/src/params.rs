//! Consolidated simulation parameters.
//!
//! All speeds, forces, and thresholds that were tuned for the sandbox live in
//! one [`SimParams`] value that is passed explicitly to the spawner, the step
//! models, and the tick loop.  Nothing reads ambient global state, so tests
//! can tighten or relax any constant locally.
//!
//! Units are the sandbox's world units (one tile is `platform / R` units) and
//! seconds; angles are radians.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

// ── WalkParams ────────────────────────────────────────────────────────────────

/// Social-force walking model constants, shared by pedestrians and
/// dismounted MMVs.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkParams {
    /// Preferred (and maximum) walking speed, units/s.
    pub speed: f32,
    /// Relaxation time τ of the self-driven force, seconds.
    pub tau: f32,
    /// Repulsion amplitude A of `A · exp((r_sum − d)/B)`.
    pub repulsion_strength: f32,
    /// Repulsion falloff B of the same term.
    pub repulsion_range: f32,
    /// Pairwise repulsion is ignored beyond this distance.
    pub interaction_cutoff: f32,
    /// Maximum heading turn rate, rad/s.
    pub max_turn_rate: f32,
    /// Waypoint arrival tolerance is drawn uniformly from this range each
    /// check, modelling foot-traffic looseness.
    pub waypoint_tolerance: (f32, f32),
    /// Body radius used for spawn collision checks and repulsion.
    pub body_radius: f32,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            speed: 5.0,
            tau: 0.5,
            repulsion_strength: 10.0,
            repulsion_range: 10.0,
            interaction_cutoff: 20.0,
            max_turn_rate: PI,
            waypoint_tolerance: (5.0, 20.0),
            body_radius: 5.0,
        }
    }
}

// ── VehicleParams ─────────────────────────────────────────────────────────────

/// Bicycle-model constants for one vehicle class (full-size or MMV).
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleParams {
    /// Acceleration applied per unit of positive normalized input, units/s².
    pub accel: f32,
    /// Deceleration applied per unit of negative normalized input, units/s².
    pub brake: f32,
    /// Speed clamp; the model never reverses, so speed stays in `[0, max_speed]`.
    pub max_speed: f32,
    /// Steering-angle slew rate at full steer input, rad/s.
    pub steering_rate: f32,
    /// Steering-angle clamp, radians.
    pub max_steering_angle: f32,
    /// Axle-to-axle length used by the bicycle slip term.
    pub wheelbase: f32,
    /// Body width, for collision geometry.
    pub width: f32,
    /// Body length, for collision geometry.
    pub length: f32,
    /// Waypoint arrival tolerance (lane-centering slack).
    pub waypoint_tolerance: f32,
    /// Below this speed the slip term is skipped to avoid division blow-up.
    pub slip_epsilon: f32,
    /// Normalized cruise throttle used by the action model below max speed.
    pub cruise_accel: f32,
    /// Normalized brake input on crosswalk tiles at speed.
    pub crosswalk_brake: f32,
}

impl VehicleParams {
    /// Defaults for full-size drivers.
    pub fn driver() -> Self {
        Self {
            accel: 2.0,
            brake: 2.0,
            max_speed: 10.0,
            steering_rate: FRAC_PI_2,
            max_steering_angle: FRAC_PI_2,
            wheelbase: 40.0,
            width: 40.0,
            length: 40.0,
            waypoint_tolerance: 64.0,
            slip_epsilon: 0.01,
            cruise_accel: 0.2,
            crosswalk_brake: 0.2,
        }
    }

    /// Defaults for mounted micro-mobility vehicles: quicker to accelerate
    /// and brake, tighter steering, much smaller footprint.
    pub fn mmv() -> Self {
        Self {
            accel: 3.0,
            brake: 5.0,
            max_speed: 10.0,
            steering_rate: PI,
            max_steering_angle: FRAC_PI_2,
            wheelbase: 20.0,
            width: 10.0,
            length: 20.0,
            waypoint_tolerance: 64.0,
            slip_epsilon: 0.01,
            cruise_accel: 0.2,
            crosswalk_brake: 0.2,
        }
    }
}

// ── PerceptionParams ──────────────────────────────────────────────────────────

/// Field-of-view and distraction constants for the walker attention model.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptionParams {
    /// FOV half-angle while focused.
    pub fov_focused: f32,
    /// FOV half-angle while distracted (narrower).
    pub fov_distracted: f32,
    /// Neighbour query radius while focused, as a multiple of tile size.
    pub query_radius_focused: f32,
    /// Neighbour query radius while distracted (shorter), same units.
    pub query_radius_distracted: f32,
    /// Intrinsic refocus check: refocus when `u(0..100) > risk · this`.
    pub intrinsic_refocus_factor: f32,
    /// Per-agent risk is sampled uniformly from `base ± risk_spread`.
    pub risk_spread: i32,
}

impl Default for PerceptionParams {
    fn default() -> Self {
        Self {
            fov_focused: FRAC_PI_2,
            fov_distracted: FRAC_PI_4,
            query_radius_focused: 5.0 / 3.0,
            query_radius_distracted: 1.0,
            intrinsic_refocus_factor: 1.5,
            risk_spread: 10,
        }
    }
}

// ── GoalParams ────────────────────────────────────────────────────────────────

/// Arrival radii: inside this distance the agent snaps to its goal exactly.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalParams {
    pub walker_radius: f32,
    pub vehicle_radius: f32,
}

impl Default for GoalParams {
    fn default() -> Self {
        Self {
            walker_radius: 20.0,
            vehicle_radius: 20.0,
        }
    }
}

// ── SpawnParams ───────────────────────────────────────────────────────────────

/// Spawn-placement constraints and population sizing.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnParams {
    /// Minimum Euclidean separation between non-driver agents sharing a
    /// start tile.
    pub min_separation: f32,
    /// A start tile must be strictly further than this Manhattan grid
    /// distance from the agent's goal tile.
    pub min_goal_manhattan: i32,
    /// Placement attempts per agent before it is excluded from the run.
    pub max_attempts: u32,
    /// Driver count ceiling, as a fraction of non-intersection road tiles.
    pub driver_tile_fraction: f32,
    /// Pedestrian count ceiling, as a fraction of sidewalk tiles.
    pub pedestrian_tile_fraction: f32,
    /// MMV count ceiling, as a fraction of sidewalk tiles.
    pub mmv_tile_fraction: f32,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            min_separation: 800.0,
            min_goal_manhattan: 3,
            max_attempts: 100,
            driver_tile_fraction: 0.3,
            pedestrian_tile_fraction: 0.7,
            mmv_tile_fraction: 0.7,
        }
    }
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Top-level parameter set passed to the spawner and simulation driver.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Fixed timestep, seconds per tick.
    pub dt_secs: f32,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    pub walk: WalkParams,
    pub driver: VehicleParams,
    pub mmv: VehicleParams,
    pub perception: PerceptionParams,
    pub goal: GoalParams,
    pub spawn: SpawnParams,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            dt_secs: 0.05,
            seed: 0,
            walk: WalkParams::default(),
            driver: VehicleParams::driver(),
            mmv: VehicleParams::mmv(),
            perception: PerceptionParams::default(),
            goal: GoalParams::default(),
            spawn: SpawnParams::default(),
        }
    }
}
