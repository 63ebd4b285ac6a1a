//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_poses.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentPoseRow, OutputResult, TickSummaryRow};

/// Writes run traces to two CSV files.
pub struct CsvWriter {
    poses: Writer<File>,
    summaries: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut poses = Writer::from_path(dir.join("agent_poses.csv"))?;
        poses.write_record([
            "agent_id",
            "tick",
            "class",
            "x",
            "y",
            "heading",
            "speed",
            "reached_goal",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "sim_time_secs", "live_agents", "arrivals"])?;

        Ok(Self {
            poses,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_poses(&mut self, rows: &[AgentPoseRow]) -> OutputResult<()> {
        for row in rows {
            self.poses.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.class.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.to_string(),
                row.speed.to_string(),
                (row.reached_goal as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.sim_time_secs.to_string(),
            row.live_agents.to_string(),
            row.arrivals.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.poses.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
