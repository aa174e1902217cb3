//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `moves.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{MoveRow, TickSummaryRow};
use crate::writer::TraceWriter;
use crate::TraceResult;

/// Writes movement traces to two CSV files.
pub struct CsvTraceWriter {
    moves:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        let mut moves = Writer::from_path(dir.join("moves.csv"))?;
        moves.write_record([
            "boid_id", "tick", "from_x", "from_y", "from_z", "to_x", "to_y", "to_z",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "cruised", "reacquired", "held"])?;

        Ok(Self {
            moves,
            summaries,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_move(&mut self, row: &MoveRow) -> TraceResult<()> {
        self.moves.write_record(&[
            row.boid_id.to_string(),
            row.tick.to_string(),
            row.from_x.to_string(),
            row.from_y.to_string(),
            row.from_z.to_string(),
            row.to_x.to_string(),
            row.to_y.to_string(),
            row.to_z.to_string(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> TraceResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.cruised.to_string(),
            row.reacquired.to_string(),
            row.held.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
