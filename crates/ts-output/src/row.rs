//! Plain data row types written by output backends.

/// One agent's pose at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentPoseRow {
    pub agent_id: u32,
    pub tick: u64,
    /// Class tag: `"pedestrian"`, `"mmv"`, or `"driver"`.
    pub class: &'static str,
    pub x: f32,
    pub y: f32,
    pub heading: f32,
    pub speed: f32,
    /// `true` on the agent's final row.
    pub reached_goal: bool,
}

/// Summary statistics for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick: u64,
    pub sim_time_secs: f32,
    /// Agents live at the end of the tick (arrivals still included).
    pub live_agents: u64,
    /// Agents whose goal arrival happened on this tick.
    pub arrivals: u64,
}
