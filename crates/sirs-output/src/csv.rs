//! CSV backends: the live record sink and whole-table exporters.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use sirs_sim::{PositionRow, StateCounts};

use crate::OutputResult;

// ── Record sink ───────────────────────────────────────────────────────────────

/// The live record sink: one aggregate-counts line per timestep.
///
/// Opened (and truncated) once per run; the header line is
/// `Susceptible,Infected,Recovered` and each subsequent line carries the
/// three counts in that order.  The underlying writer also flushes on
/// drop, so the file is complete even if [`finish`][Self::finish] is
/// never reached.
pub struct RecordWriter {
    writer: Writer<File>,
    finished: bool,
}

impl RecordWriter {
    /// Create (or truncate) the record file and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["Susceptible", "Infected", "Recovered"])?;
        Ok(Self {
            writer,
            finished: false,
        })
    }

    /// Append one timestep's counts.
    pub fn append(&mut self, counts: &StateCounts) -> OutputResult<()> {
        self.writer.write_record(&[
            counts.susceptible.to_string(),
            counts.infected.to_string(),
            counts.recovered.to_string(),
        ])?;
        Ok(())
    }

    /// Flush the underlying file.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

// ── Table exporters ───────────────────────────────────────────────────────────

/// Write a finished run's states table to `path`.
///
/// Columns: `susceptible,infected,recovered`; the row index (0-based) is
/// the timestep minus one.
pub fn write_states_csv(path: &Path, states: &[StateCounts]) -> OutputResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["susceptible", "infected", "recovered"])?;
    for counts in states {
        writer.write_record(&[
            counts.susceptible.to_string(),
            counts.infected.to_string(),
            counts.recovered.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a finished run's positions table to `path`.
///
/// Columns: `time,agent_id,x,y,health` — the layout consumed by external
/// renderers (filter by `time` to plot one frame).
pub fn write_positions_csv(path: &Path, positions: &[PositionRow]) -> OutputResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["time", "agent_id", "x", "y", "health"])?;
    for row in positions {
        writer.write_record(&[
            row.time.to_string(),
            row.agent_id.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.health.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
