//! Run assembly: grid → population → placement → path planning.

use ts_core::{SimParams, SimRng};
use ts_grid::TileGrid;
use ts_path::{AStarPlanner, Planner};
use ts_spawn::{build_population, place_agents, PopulationSpec};

use crate::error::{SimError, SimResult};
use crate::sim::Simulation;

/// Assembles a [`Simulation`] from a painted grid and the operator sliders.
///
/// ```no_run
/// # use ts_grid::TileGrid;
/// # use ts_sim::{NoopObserver, SimulationBuilder};
/// # fn demo(grid: TileGrid) -> Result<(), ts_sim::SimError> {
/// let mut sim = SimulationBuilder::new()
///     .grid(grid)
///     .seed(42)
///     .density(7)
///     .build()?;
/// sim.run(1200, &mut NoopObserver);
/// # Ok(())
/// # }
/// ```
pub struct SimulationBuilder<P: Planner = AStarPlanner> {
    grid: Option<TileGrid>,
    params: SimParams,
    population: PopulationSpec,
    planner: P,
}

impl SimulationBuilder<AStarPlanner> {
    pub fn new() -> Self {
        Self {
            grid: None,
            params: SimParams::default(),
            population: PopulationSpec::default(),
            planner: AStarPlanner,
        }
    }
}

impl Default for SimulationBuilder<AStarPlanner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Planner> SimulationBuilder<P> {
    pub fn grid(mut self, grid: TileGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn params(mut self, params: SimParams) -> Self {
        self.params = params;
        self
    }

    pub fn population(mut self, population: PopulationSpec) -> Self {
        self.population = population;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.params.seed = seed;
        self
    }

    pub fn density(mut self, density: u8) -> Self {
        self.population.density = density;
        self
    }

    /// Swap in a different path planner.
    pub fn planner<Q: Planner>(self, planner: Q) -> SimulationBuilder<Q> {
        SimulationBuilder {
            grid: self.grid,
            params: self.params,
            population: self.population,
            planner,
        }
    }

    /// Build the run: size and place the population, plan every agent's
    /// path, and wire up the simulation state.
    ///
    /// Agents whose start has no legal path keep an empty one and steer
    /// straight at their goal; they are logged, not dropped.
    pub fn build(self) -> SimResult<Simulation> {
        let grid = self.grid.ok_or(SimError::MissingGrid)?;
        let mut rng = SimRng::new(self.params.seed);

        let (agents, pools) = build_population(&grid, &self.population, &self.params, &mut rng)?;
        let placement = place_agents(&grid, agents, &pools.road, &self.params, &mut rng)?;

        let mut agents = placement.placed;
        let mut pathless = 0usize;
        for agent in &mut agents {
            match self
                .planner
                .plan(&grid, agent.start_tile, agent.goal.tile, agent.class())
            {
                Some(path) => agent.set_path(path),
                None => {
                    pathless += 1;
                    log::debug!(
                        "agent {} has no legal path from {} to {}",
                        agent.id,
                        agent.start_tile,
                        agent.goal.tile
                    );
                }
            }
        }
        if pathless > 0 {
            log::warn!("{pathless} agents start without a path and will steer directly at their goal");
        }

        Ok(Simulation::new(grid, self.params, agents))
    }
}
