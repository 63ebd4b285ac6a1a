//! Agent class enum used by the pathfinder's legality filters and the spawn
//! logic.  The full per-variant kinematic state lives in `ts-agent`; this is
//! only the discriminant shared across crate boundaries.

use std::fmt;

/// The three participant classes of the simulation.
///
/// Tile legality by class:
///
/// | Class        | May occupy                         |
/// |--------------|------------------------------------|
/// | `Pedestrian` | sidewalk, crosswalk                |
/// | `Mmv`        | sidewalk, crosswalk, road          |
/// | `Driver`     | road, crosswalk                    |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentClass {
    Pedestrian,
    /// Micro-mobility vehicle (e-scooter, bike); rides like a small vehicle
    /// when mounted, walks like a pedestrian when dismounted.
    Mmv,
    Driver,
}

impl AgentClass {
    /// `true` for the classes whose goals come from road edge tiles.
    #[inline]
    pub fn is_vehicle(self) -> bool {
        matches!(self, AgentClass::Driver)
    }
}

impl fmt::Display for AgentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentClass::Pedestrian => "pedestrian",
            AgentClass::Mmv => "mmv",
            AgentClass::Driver => "driver",
        };
        f.write_str(s)
    }
}
