//! The simulation itself: state plus the fixed-dt tick loop.

use ts_agent::Agent;
use ts_core::{AgentRng, SimClock, SimParams, Tick};
use ts_grid::TileGrid;
use ts_motion::{step_vehicle, step_walker, should_refocus, Action, WorldSnapshot};

use crate::actions::{check_arrival, decide};
use crate::external::{ExternalKinematics, NoopExternal};
use crate::observer::{AgentPose, SimObserver};

/// A fully assembled run.  Built by [`crate::SimulationBuilder`]; advanced
/// by [`Simulation::tick`] until no agents remain (or the host stops).
pub struct Simulation {
    grid: TileGrid,
    params: SimParams,
    clock: SimClock,
    agents: Vec<Agent>,
    /// Parallel to `agents`: each agent's private RNG stream.
    rngs: Vec<AgentRng>,
    external: Box<dyn ExternalKinematics>,
    paused: bool,
    /// Running total of agents that reached their goal.
    arrived: usize,
}

impl Simulation {
    pub(crate) fn new(grid: TileGrid, params: SimParams, agents: Vec<Agent>) -> Self {
        let rngs = agents
            .iter()
            .map(|a| AgentRng::new(params.seed, a.id))
            .collect();
        Self {
            grid,
            clock: SimClock::new(params.dt_secs),
            params,
            agents,
            rngs,
            external: Box::new(NoopExternal),
            paused: false,
            arrived: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.clock.elapsed_secs()
    }

    /// Agents that have reached their goal so far.
    pub fn arrived(&self) -> usize {
        self.arrived
    }

    /// `true` once every agent has arrived (or none were placed).
    pub fn is_finished(&self) -> bool {
        self.agents.is_empty()
    }

    // ── Wiring ────────────────────────────────────────────────────────────

    pub fn set_external(&mut self, external: Box<dyn ExternalKinematics>) {
        self.external = external;
    }

    // ── Pause control ─────────────────────────────────────────────────────

    /// Pause the run.  Ticks called while paused are no-ops, so pausing is
    /// always aligned to a tick boundary and re-pausing is idempotent.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // ── The tick loop ─────────────────────────────────────────────────────

    /// Advance the run by one tick, streaming poses to `observer`.
    /// Returns `false` when nothing happened (paused or finished).
    pub fn tick(&mut self, observer: &mut dyn SimObserver) -> bool {
        if self.paused || self.agents.is_empty() {
            return false;
        }

        let snapshot = WorldSnapshot::capture(&self.agents);
        self.step_agents(&snapshot);

        let dt = self.params.dt_secs;
        for agent in &mut self.agents {
            self.external.adjust(agent, dt);
            check_arrival(agent, &self.params);
        }

        self.clock.advance();
        let tick = self.clock.current_tick;
        let poses: Vec<AgentPose> = self.agents.iter().map(AgentPose::of).collect();
        observer.on_tick(tick, &poses);

        // Arrived agents got their final pose above; drop them now.
        let before = self.agents.len();
        let mut rngs = std::mem::take(&mut self.rngs).into_iter();
        let mut kept_rngs = Vec::with_capacity(before);
        self.agents.retain(|a| {
            let rng = rngs.next();
            if a.reached_goal {
                false
            } else {
                if let Some(rng) = rng {
                    kept_rngs.push(rng);
                }
                true
            }
        });
        self.rngs = kept_rngs;
        self.arrived += before - self.agents.len();

        if self.agents.is_empty() {
            log::info!("run finished at {}: {} arrivals", tick, self.arrived);
            observer.on_finish(tick);
        }
        true
    }

    /// Run up to `ticks` ticks, stopping early when every agent arrives.
    pub fn run(&mut self, ticks: u64, observer: &mut dyn SimObserver) {
        for _ in 0..ticks {
            if !self.tick(observer) {
                break;
            }
        }
    }

    fn step_agent(
        agent: &mut Agent,
        rng: &mut AgentRng,
        snapshot: &WorldSnapshot,
        grid: &TileGrid,
        params: &SimParams,
    ) {
        if agent.walker_state().is_some_and(|w| w.distracted)
            && should_refocus(agent, snapshot, &params.walk, &params.perception, grid.tile_size(), rng)
        {
            if let Some(w) = agent.walker_state_mut() {
                w.distracted = false;
                w.fuzzy_offset = None;
            }
        }

        match decide(agent, grid, params, rng) {
            Action::Walk(action) => step_walker(
                agent,
                action,
                snapshot,
                &params.walk,
                &params.perception,
                grid.tile_size(),
                params.dt_secs,
            ),
            Action::Drive(action) => {
                let vp = match agent.kind {
                    ts_agent::AgentKind::Mmv { .. } => params.mmv,
                    _ => params.driver,
                };
                step_vehicle(agent, action, &vp, params.dt_secs);
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn step_agents(&mut self, snapshot: &WorldSnapshot) {
        for (agent, rng) in self.agents.iter_mut().zip(self.rngs.iter_mut()) {
            Self::step_agent(agent, rng, snapshot, &self.grid, &self.params);
        }
    }

    #[cfg(feature = "parallel")]
    fn step_agents(&mut self, snapshot: &WorldSnapshot) {
        use rayon::prelude::*;
        let grid = &self.grid;
        let params = &self.params;
        self.agents
            .par_iter_mut()
            .zip(self.rngs.par_iter_mut())
            .for_each(|(agent, rng)| {
                Self::step_agent(agent, rng, snapshot, grid, params);
            });
    }
}
