//! Pre-tick world snapshot.
//!
//! Captured once at the top of every tick, before any agent moves.  All
//! perception (repulsion, refocus checks) reads the snapshot, so the step
//! order of agents within a tick cannot change the outcome.

use glam::Vec2;
use ts_agent::Agent;
use ts_core::AgentId;

/// Immutable per-agent view used for neighbour perception.
#[derive(Clone, Copy, Debug)]
pub struct AgentView {
    pub id: AgentId,
    pub position: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub radius: f32,
    /// Whether this agent exerts social-force repulsion on walkers.
    /// Mounted MMVs move in traffic and are excluded.
    pub repulsive: bool,
}

impl AgentView {
    fn capture(agent: &Agent) -> Self {
        // Drivers repel walkers; a mounted MMV moves in traffic and does not.
        let repulsive = agent.is_walking() || matches!(agent.kind, ts_agent::AgentKind::Driver(_));
        Self {
            id: agent.id,
            position: agent.position,
            heading: agent.heading,
            speed: agent.speed,
            radius: agent.radius,
            repulsive,
        }
    }
}

/// All agent views for one tick.
#[derive(Clone, Debug, Default)]
pub struct WorldSnapshot {
    views: Vec<AgentView>,
}

impl WorldSnapshot {
    pub fn capture(agents: &[Agent]) -> Self {
        Self {
            views: agents.iter().map(AgentView::capture).collect(),
        }
    }

    pub fn views(&self) -> &[AgentView] {
        &self.views
    }

    /// Repulsive neighbours of `id` within `radius` of `center`.
    pub fn neighbours_of(
        &self,
        id: AgentId,
        center: Vec2,
        radius: f32,
    ) -> impl Iterator<Item = &AgentView> {
        self.views.iter().filter(move |v| {
            v.id != id && v.repulsive && v.position.distance_squared(center) <= radius * radius
        })
    }
}
