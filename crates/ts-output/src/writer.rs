//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentPoseRow, OutputResult, TickSummaryRow};

/// Backend sink for run traces.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write one tick's batch of agent poses.
    fn write_poses(&mut self, rows: &[AgentPoseRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
