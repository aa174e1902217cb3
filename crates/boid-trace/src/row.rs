//! Plain data row types written by trace backends.

/// One boid's movement during one tick: the committed pre-move and post-move
/// positions.  Held ticks appear with identical endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRow {
    pub boid_id: u32,
    pub tick:    u64,
    pub from_x:  f32,
    pub from_y:  f32,
    pub from_z:  f32,
    pub to_x:    f32,
    pub to_y:    f32,
    pub to_z:    f32,
}

/// Outcome counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    pub cruised:    u64,
    pub reacquired: u64,
    pub held:       u64,
}
