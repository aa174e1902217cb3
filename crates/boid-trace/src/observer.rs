//! `TraceObserver<W>` — bridges the sim's observer hooks to a `TraceWriter`.

use boid_agent::BoidObserver;
use boid_core::{BoidId, Tick, Vec3};
use boid_sim::{FlockObserver, TickStats};

use crate::row::{MoveRow, TickSummaryRow};
use crate::writer::TraceWriter;
use crate::TraceError;

/// A [`FlockObserver`] that records every move and tick summary through any
/// [`TraceWriter`] backend.
///
/// Observer callbacks have no return value, so errors from the writer are
/// stored internally.  After the run, check with [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:       W,
    current_tick: Tick,
    last_error:   Option<TraceError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_tick: Tick::ZERO,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> BoidObserver for TraceObserver<W> {
    fn boid_moved(&mut self, id: BoidId, from: Vec3, to: Vec3) {
        let row = MoveRow {
            boid_id: id.0,
            tick:    self.current_tick.0,
            from_x:  from.x,
            from_y:  from.y,
            from_z:  from.z,
            to_x:    to.x,
            to_y:    to.y,
            to_z:    to.z,
        };
        let result = self.writer.write_move(&row);
        self.store_err(result);
    }
}

impl<W: TraceWriter> FlockObserver for TraceObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.current_tick = tick;
    }

    fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
        let row = TickSummaryRow {
            tick:       tick.0,
            cruised:    stats.cruised as u64,
            reacquired: stats.reacquired as u64,
            held:       stats.held as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
