//! `ts-output` — persisting run traces.
//!
//! A run's pose stream is turned into flat rows and handed to an
//! [`OutputWriter`] backend.  The only backend is CSV; the trait seam exists
//! so hosts can substitute their own sinks (sockets, databases) without
//! touching the simulation.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentPoseRow, TickSummaryRow};
pub use writer::OutputWriter;
