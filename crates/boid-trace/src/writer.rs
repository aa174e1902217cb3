//! The pluggable trace backend trait.

use crate::row::{MoveRow, TickSummaryRow};
use crate::TraceResult;

/// Output backend for movement traces.
///
/// Implementations buffer as they see fit; `finish` must flush everything
/// and is idempotent.
pub trait TraceWriter {
    fn write_move(&mut self, row: &MoveRow) -> TraceResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> TraceResult<()>;

    /// Flush and close the backend.  Safe to call more than once.
    fn finish(&mut self) -> TraceResult<()>;
}
