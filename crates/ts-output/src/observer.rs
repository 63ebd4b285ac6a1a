//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ts_core::{AgentClass, Tick};
use ts_sim::{AgentPose, SimObserver};

use crate::row::{AgentPoseRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

fn class_tag(class: AgentClass) -> &'static str {
    match class {
        AgentClass::Pedestrian => "pedestrian",
        AgentClass::Mmv => "mmv",
        AgentClass::Driver => "driver",
    }
}

/// A [`SimObserver`] that writes agent poses and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    dt_secs: f32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.  `dt_secs` converts ticks to
    /// the simulated-seconds column.
    pub fn new(writer: W, dt_secs: f32) -> Self {
        Self {
            writer,
            dt_secs,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick(&mut self, tick: Tick, poses: &[AgentPose]) {
        let rows: Vec<AgentPoseRow> = poses
            .iter()
            .map(|p| AgentPoseRow {
                agent_id: p.id.0,
                tick: tick.0,
                class: class_tag(p.class),
                x: p.position.x,
                y: p.position.y,
                heading: p.heading,
                speed: p.speed,
                reached_goal: p.reached_goal,
            })
            .collect();
        let summary = TickSummaryRow {
            tick: tick.0,
            sim_time_secs: tick.0 as f32 * self.dt_secs,
            live_agents: poses.len() as u64,
            arrivals: poses.iter().filter(|p| p.reached_goal).count() as u64,
        };
        let result = self.writer.write_poses(&rows);
        self.store_err(result);
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }

    fn on_finish(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
