//! Error types for ts-spawn.

use thiserror::Error;

/// Errors raised during population setup.
///
/// Per-agent placement failures are not errors — those agents are simply
/// excluded (and logged).  Errors here mean the grid cannot host the
/// requested population at all.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("grid has no {0} tiles to spawn on")]
    NoSpawnTiles(&'static str),

    #[error("grid has no edge goals for kind {0}")]
    NoGoals(&'static str),
}

pub type SpawnResult<T> = Result<T, SpawnError>;
