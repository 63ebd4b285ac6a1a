//! The per-tick decision layer: waypoint tracking and action synthesis.
//!
//! Decisions read the agent and the grid; they never look at other agents
//! (that is the step models' job, via the snapshot).  A distracted walker
//! does not track its waypoint exactly — it steers at a cached random point
//! inside an ellipse around the waypoint, resampled whenever the waypoint
//! changes, which makes distracted walking drift visibly off the path.

use glam::Vec2;
use ts_agent::{Agent, AgentKind};
use ts_core::{heading_of, wrap_angle, AgentRng, SimParams};
use ts_grid::{TileGrid, TileKind};
use ts_motion::{Action, DriveAction, WalkAction};

/// Fuzzy-ellipse shape: semi-axis along the heading / across it, as
/// fractions of the distance to the waypoint.
const FUZZY_MAJOR: f32 = 0.2;
const FUZZY_MINOR: f32 = 0.1;

/// Advance the waypoint index (by at most one step per tick) when the agent
/// is within tolerance of it, then return the position the agent should
/// steer toward.  Falls back to the goal position once the path is
/// exhausted (or was never found).
fn steer_target(agent: &mut Agent, grid: &TileGrid, params: &SimParams, rng: &mut AgentRng) -> Vec2 {
    if let Some(waypoint) = agent.current_waypoint() {
        let Some(tile) = grid.tile(waypoint) else {
            // Stale path against a different grid; steer at the goal.
            return agent.goal.position;
        };
        let tolerance = if agent.is_walking() {
            let (lo, hi) = params.walk.waypoint_tolerance;
            rng.gen_range(lo..=hi)
        } else {
            vehicle_params(agent, params).waypoint_tolerance
        };
        if agent.position.distance(tile.center) < tolerance {
            agent.advance_waypoint();
        }
    }
    match agent.current_waypoint().and_then(|w| grid.tile(w)) {
        Some(tile) => tile.center,
        None => agent.goal.position,
    }
}

fn vehicle_params<'a>(agent: &Agent, params: &'a SimParams) -> &'a ts_core::VehicleParams {
    match agent.kind {
        AgentKind::Mmv { .. } => &params.mmv,
        _ => &params.driver,
    }
}

/// Apply the distraction fuzz to a walker's steer target.
///
/// The offset is sampled once per waypoint and cached, so a distracted
/// walker aims at a stable wrong point instead of jittering every tick.
fn fuzzy_target(agent: &mut Agent, target: Vec2, rng: &mut AgentRng) -> Vec2 {
    let heading = agent.heading;
    let position = agent.position;
    let index = agent.path_index;
    let Some(walker) = agent.walker_state_mut() else {
        return target;
    };
    if !walker.distracted {
        walker.fuzzy_offset = None;
        return target;
    }
    let offset = match walker.fuzzy_offset {
        Some(offset) if walker.fuzzy_index == index => offset,
        _ => {
            let d = position.distance(target);
            let along: f32 = rng.gen_range(-FUZZY_MAJOR..=FUZZY_MAJOR) * d;
            let across: f32 = rng.gen_range(-FUZZY_MINOR..=FUZZY_MINOR) * d;
            let (sin, cos) = heading.sin_cos();
            let offset = Vec2::new(along * cos - across * sin, along * sin + across * cos);
            walker.fuzzy_offset = Some(offset);
            walker.fuzzy_index = index;
            offset
        }
    };
    target + offset
}

/// Update an MMV's mount state from the tile under it: it rides on road and
/// crosswalk surfaces and walks everywhere else.
fn update_mount_state(agent: &mut Agent, grid: &TileGrid) {
    let riding_surface = grid
        .tile_containing(agent.position)
        .map(|t| matches!(t.kind, TileKind::Road | TileKind::Crosswalk))
        .unwrap_or(false);
    if let AgentKind::Mmv { dismounted, .. } = &mut agent.kind {
        let was = *dismounted;
        *dismounted = !riding_surface;
        // Mount-state flips reset the ride from a standstill.
        if was != *dismounted {
            agent.speed = 0.0;
        }
    }
}

fn drive_action(agent: &Agent, target: Vec2, grid: &TileGrid, params: &SimParams) -> DriveAction {
    let vp = vehicle_params(agent, params);
    let to_target = target - agent.position;
    let steer = if to_target == Vec2::ZERO {
        0.0
    } else {
        (wrap_angle(heading_of(to_target) - agent.heading) / std::f32::consts::PI).clamp(-1.0, 1.0)
    };

    let on_crosswalk = grid
        .tile_containing(agent.position)
        .is_some_and(|t| t.kind == TileKind::Crosswalk);
    let accel = if on_crosswalk && agent.speed >= 0.5 * vp.max_speed {
        -vp.crosswalk_brake
    } else if agent.speed < vp.max_speed {
        vp.cruise_accel
    } else {
        0.0
    };

    DriveAction { accel, steer }
}

/// Produce this tick's action for one agent.  Mutates waypoint progress,
/// MMV mount state, and the cached fuzzy offset.
pub fn decide(
    agent: &mut Agent,
    grid: &TileGrid,
    params: &SimParams,
    rng: &mut AgentRng,
) -> Action {
    update_mount_state(agent, grid);
    let target = steer_target(agent, grid, params, rng);
    if agent.is_walking() {
        let target = fuzzy_target(agent, target, rng);
        Action::Walk(WalkAction { target })
    } else {
        Action::Drive(drive_action(agent, target, grid, params))
    }
}

/// Goal-arrival check: inside the class arrival radius the agent snaps to
/// the goal exactly and is flagged for removal.
pub fn check_arrival(agent: &mut Agent, params: &SimParams) {
    let radius = if agent.is_walking() {
        params.goal.walker_radius
    } else {
        params.goal.vehicle_radius
    };
    if agent.goal_distance() < radius {
        let goal_position = agent.goal.position;
        let heading = agent.heading;
        agent.position = goal_position;
        agent.speed = 0.0;
        agent.reached_goal = true;
        if let Some(v) = agent.vehicle_state_mut() {
            v.sync_origin(goal_position, heading);
        }
        log::trace!("agent {} reached goal {}", agent.id, agent.goal.id);
    }
}
