//! Observer seam: per-tick pose streaming for renderers and writers.

use glam::Vec2;
use ts_agent::Agent;
use ts_core::{AgentClass, AgentId, Tick};

/// One agent's pose at the end of a tick, ready for a renderer or writer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentPose {
    pub id: AgentId,
    pub class: AgentClass,
    pub position: Vec2,
    pub heading: f32,
    pub speed: f32,
    /// Set on the final pose of an agent that arrived this tick; the agent
    /// is removed immediately after observers run.
    pub reached_goal: bool,
}

impl AgentPose {
    pub(crate) fn of(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            class: agent.class(),
            position: agent.position,
            heading: agent.heading,
            speed: agent.speed,
            reached_goal: agent.reached_goal,
        }
    }
}

/// Receives the pose stream.  Registered on the simulation before the run;
/// called after every tick with the post-step poses of all live agents.
pub trait SimObserver {
    fn on_tick(&mut self, tick: Tick, poses: &[AgentPose]);

    /// The run finished (no agents left, or the driver stopped it).
    fn on_finish(&mut self, _final_tick: Tick) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl SimObserver for NoopObserver {
    fn on_tick(&mut self, _tick: Tick, _poses: &[AgentPose]) {}
}
