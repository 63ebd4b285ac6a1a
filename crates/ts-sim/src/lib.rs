//! `ts-sim` — the simulation driver.
//!
//! Assembles a run from a painted grid and population sliders, then advances
//! it in fixed ticks:
//!
//! ```text
//! tick:
//!   snapshot           capture every agent's pre-tick pose
//!   per agent:
//!     refocus          distracted walkers may recover attention
//!     decide           waypoint tracking → WalkAction / DriveAction
//!     step             social-force or bicycle integration
//!   external           host-engine kinematics hook
//!   arrivals           goal snap, removal of finished agents
//!   observers          pose stream for renderers and writers
//! ```
//!
//! All perception reads the pre-tick snapshot, so agent step order (and,
//! with the `parallel` feature, thread scheduling) cannot change a run.

pub mod actions;
pub mod builder;
pub mod error;
pub mod external;
pub mod observer;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use external::{ExternalKinematics, NoopExternal};
pub use observer::{AgentPose, NoopObserver, SimObserver};
pub use sim::Simulation;
