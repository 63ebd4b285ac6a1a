//! Host-engine kinematics hook.
//!
//! A renderer embedding the simulation may own part of the physics (ground
//! height, collision pushback).  Implementations adjust agents in place
//! after the step models run and before arrivals are checked.

use ts_agent::Agent;

/// Post-step position adjustment applied by the embedding host.
pub trait ExternalKinematics {
    /// Adjust one agent after its kinematic step.  Runs serially, in agent
    /// order, once per tick.
    fn adjust(&mut self, agent: &mut Agent, dt: f32);
}

/// Default hook: the simulation owns all kinematics.
#[derive(Debug, Default)]
pub struct NoopExternal;

impl ExternalKinematics for NoopExternal {
    fn adjust(&mut self, _agent: &mut Agent, _dt: f32) {}
}
