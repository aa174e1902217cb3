//! `boid-trace` — movement-trace output for boidflock runs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`row`]      | `MoveRow`, `TickSummaryRow` — plain data rows           |
//! | [`writer`]   | `TraceWriter` trait — pluggable output backend          |
//! | [`csv`]      | `CsvTraceWriter` — two-file CSV backend                 |
//! | [`observer`] | `TraceObserver<W>` — bridges the sim observer to a writer |
//! | [`error`]    | `TraceError`, `TraceResult`                             |
//!
//! Observer callbacks return nothing, so write failures are buffered inside
//! `TraceObserver` and retrieved with `take_error` after the run.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvTraceWriter;
pub use error::{TraceError, TraceResult};
pub use observer::TraceObserver;
pub use row::{MoveRow, TickSummaryRow};
pub use writer::TraceWriter;
