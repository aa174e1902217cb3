//! `boid-search` — finding an open point near the target.
//!
//! When a boid reaches its target (or falls too far behind the tracking
//! anchor) it abandons cruise navigation and asks [`AreaSearch`] for a fresh
//! approach point: an unoccupied lattice cell near the target, biased to lie
//! on the far side of the target from the anchor.
//!
//! The search scatters a fixed-size batch of random candidate cells around a
//! base point, submits the whole batch to the external occupancy evaluator in
//! one blocking call, and returns the first free slot.  Empty rounds widen
//! the scatter radius geometrically and retry with a fresh batch, so the
//! searched volume strictly grows until some cell qualifies.

pub mod error;
pub mod search;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SearchError, SearchResult};
pub use search::{AreaSearch, SearchParams};
