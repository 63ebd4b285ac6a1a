//! Error types for ts-sim.

use thiserror::Error;
use ts_grid::GridError;
use ts_spawn::SpawnError;

/// Errors raised while assembling a run.  The tick loop itself is
/// infallible: a running simulation only mutates validated state.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),

    #[error("no grid provided to the builder")]
    MissingGrid,
}

pub type SimResult<T> = Result<T, SimError>;
