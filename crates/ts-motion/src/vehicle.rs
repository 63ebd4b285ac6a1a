//! Kinematic bicycle-model vehicle step.
//!
//! The vehicle is integrated at its rear axle: the origin moves along the
//! heading, and the heading turns at `(v / wheelbase) · tan(steering)`.
//! Speed never goes negative; there is no reverse gear.

use ts_core::{heading_vec, wrap_angle, VehicleParams};

use ts_agent::Agent;

use crate::action::DriveAction;

/// Advance one vehicle (driver or mounted MMV) by `dt` seconds.
///
/// No-op on agents without a vehicle payload.
pub fn step_vehicle(agent: &mut Agent, action: DriveAction, params: &VehicleParams, dt: f32) {
    let accel_input = action.accel.clamp(-1.0, 1.0);
    let steer_input = action.steer.clamp(-1.0, 1.0);

    // Asymmetric response: braking uses its own (usually stronger) rate.
    let accel = if accel_input >= 0.0 {
        accel_input * params.accel
    } else {
        accel_input * params.brake
    };
    agent.acceleration = accel;
    agent.speed = (agent.speed + accel * dt).clamp(0.0, params.max_speed);

    let speed = agent.speed;
    let heading = agent.heading;
    let Some(vehicle) = agent.vehicle_state_mut() else {
        return;
    };

    vehicle.steering_angle = (vehicle.steering_angle + steer_input * params.steering_rate * dt)
        .clamp(-params.max_steering_angle, params.max_steering_angle);

    // Below the slip threshold the tan() term is skipped entirely, so a
    // stationary vehicle can pre-steer without rotating in place.
    let new_heading = if speed > params.slip_epsilon {
        wrap_angle(heading + (speed / vehicle.wheelbase) * vehicle.steering_angle.tan() * dt)
    } else {
        heading
    };

    vehicle.origin += heading_vec(new_heading) * speed * dt;
    let position = vehicle.position_from_origin(new_heading);

    agent.heading = new_heading;
    agent.position = position;
}
