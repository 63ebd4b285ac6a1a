//! Social-force walker step and the attention (distraction) model.
//!
//! Per tick a walker feels two forces:
//!
//! 1. A self-driven term relaxing its velocity toward the desired velocity
//!    (unit vector to the action target × preferred speed) over τ seconds.
//! 2. Pairwise repulsion `A · exp((r_i + r_j − d) / B)` along the separation
//!    direction, from every repulsive neighbour inside the perception query
//!    radius, the interaction cutoff, and the field-of-view cone.
//!
//! Distraction narrows the cone and shortens the query radius, so distracted
//! walkers react to fewer neighbours and later.  The integrated velocity is
//! clamped to preferred speed; the heading chases the velocity direction
//! under a turn-rate limit so a walker cannot snap around in one tick.

use glam::Vec2;
use ts_agent::Agent;
use ts_core::{heading_of, wrap_angle, AgentRng, PerceptionParams, WalkParams};

use crate::action::WalkAction;
use crate::snapshot::{AgentView, WorldSnapshot};

/// Whether `to` lies inside the field-of-view cone of half-angle
/// `half_angle` around `heading`, as seen from `from`.
#[inline]
pub fn in_fov(heading: f32, from: Vec2, to: Vec2, half_angle: f32) -> bool {
    let sep = to - from;
    if sep == Vec2::ZERO {
        return true;
    }
    wrap_angle(heading_of(sep) - heading).abs() <= half_angle
}

fn perception_extent(
    distracted: bool,
    perception: &PerceptionParams,
    tile_size: f32,
) -> (f32, f32) {
    if distracted {
        (
            perception.fov_distracted,
            perception.query_radius_distracted * tile_size,
        )
    } else {
        (
            perception.fov_focused,
            perception.query_radius_focused * tile_size,
        )
    }
}

/// Advance one walker by `dt` seconds against the pre-tick snapshot.
///
/// Mutates position, heading, scalar speed, and the stored social-force
/// velocity.  Goal arrival is the caller's concern.
pub fn step_walker(
    agent: &mut Agent,
    action: WalkAction,
    snapshot: &WorldSnapshot,
    walk: &WalkParams,
    perception: &PerceptionParams,
    tile_size: f32,
    dt: f32,
) {
    let distracted = agent.walker_state().is_some_and(|w| w.distracted);
    let (fov, query_radius) = perception_extent(distracted, perception, tile_size);

    let to_target = action.target - agent.position;
    let desired = if to_target == Vec2::ZERO {
        Vec2::ZERO
    } else {
        to_target.normalize() * walk.speed
    };

    let position = agent.position;
    let heading = agent.heading;
    let radius = agent.radius;
    let sf_velocity = agent.walker_state().map(|w| w.sf_velocity).unwrap_or(Vec2::ZERO);

    let mut force = (desired - sf_velocity) / walk.tau;
    for view in snapshot.neighbours_of(agent.id, position, query_radius) {
        force += repulsion_from(position, heading, radius, view, walk, fov);
    }

    let mut velocity = sf_velocity + force * dt;
    let speed = velocity.length();
    if speed > walk.speed {
        velocity *= walk.speed / speed;
    }

    agent.position += velocity * dt;
    agent.speed = velocity.length();
    if agent.speed > f32::EPSILON {
        let delta = wrap_angle(heading_of(velocity) - agent.heading);
        let max_turn = walk.max_turn_rate * dt;
        agent.heading = wrap_angle(agent.heading + delta.clamp(-max_turn, max_turn));
    }
    if let Some(w) = agent.walker_state_mut() {
        w.sf_velocity = velocity;
    }
}

/// Exponential body repulsion exerted by `view` on a walker at `position`.
/// Zero outside the interaction cutoff or the FOV cone.
fn repulsion_from(
    position: Vec2,
    heading: f32,
    radius: f32,
    view: &AgentView,
    walk: &WalkParams,
    fov: f32,
) -> Vec2 {
    let sep = position - view.position;
    let dist = sep.length();
    if dist <= f32::EPSILON || dist > walk.interaction_cutoff {
        return Vec2::ZERO;
    }
    if !in_fov(heading, position, view.position, fov) {
        return Vec2::ZERO;
    }
    let magnitude =
        walk.repulsion_strength * ((radius + view.radius - dist) / walk.repulsion_range).exp();
    sep / dist * magnitude
}

/// One distraction-recovery check for a currently distracted walker.
///
/// Returns `true` when the walker refocuses this tick, which happens on
/// either trigger:
///
/// - Intrinsic: a uniform draw from `0..100` exceeds `risk ×
///   intrinsic_refocus_factor`, so low-risk walkers recover quickly and
///   high-risk ones may stay distracted indefinitely.
/// - Extrinsic: nearby relative motion.  The mean speed difference against
///   in-FOV neighbours, normalized by twice the preferred speed, is used as
///   a recovery probability.
pub fn should_refocus(
    agent: &Agent,
    snapshot: &WorldSnapshot,
    walk: &WalkParams,
    perception: &PerceptionParams,
    tile_size: f32,
    rng: &mut AgentRng,
) -> bool {
    let (fov, query_radius) = perception_extent(true, perception, tile_size);

    let intrinsic_draw: f32 = rng.gen_range(0.0..100.0);
    if intrinsic_draw > agent.risk as f32 * perception.intrinsic_refocus_factor {
        return true;
    }

    let mut total = 0.0f32;
    let mut count = 0u32;
    for view in snapshot.neighbours_of(agent.id, agent.position, query_radius) {
        if in_fov(agent.heading, agent.position, view.position, fov) {
            total += (view.speed - agent.speed).abs();
            count += 1;
        }
    }
    if count == 0 {
        return false;
    }
    let p = (total / count as f32) / (2.0 * walk.speed);
    rng.gen_bool(p as f64)
}
