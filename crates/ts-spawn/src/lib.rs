//! `ts-spawn` — turning a painted grid plus density/risk sliders into a
//! placed agent population.
//!
//! Setup runs in three passes:
//!
//! 1. [`population`] sizes each class from the density slider and the grid's
//!    tile counts, samples per-agent risk, and runs the goal lotteries.
//! 2. [`goals`] applies the left-hand-traffic directional correction for
//!    vehicle goals; agents with no directionally consistent goal are
//!    dropped before placement.
//! 3. [`placement`] finds collision-free start positions under the spawn
//!    constraints with a bounded retry loop; agents that exhaust their
//!    attempts are excluded from the run.
//!
//! Everything is driven by the run's [`SimRng`](ts_core::SimRng), so a seed
//! reproduces the exact same population.

pub mod error;
pub mod goals;
pub mod placement;
pub mod population;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SpawnError, SpawnResult};
pub use goals::{correct_vehicle_goal, goal_consistent};
pub use placement::{place_agents, Placement};
pub use population::{
    build_population, goal_pools, population_counts, GoalPools, PopulationCounts, PopulationSpec,
};
