//! What a single tick did.

use cs_core::Point;

/// Result of one [`Courier::advance`][crate::Courier::advance] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The queue is empty; nothing moved.
    Finished,
    /// At the head waypoint but its departure time has not been reached.
    Dwelling,
    /// Moved a full step without reaching the head waypoint.
    Moved,
    /// The step reached or passed the head waypoint and snapped onto it.
    Arrived,
}

impl TickOutcome {
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, TickOutcome::Finished)
    }
}

/// Emitted when a courier is still travelling toward a waypoint whose
/// departure time has already passed.
#[derive(Clone, Debug, PartialEq)]
pub struct LatenessNotice {
    /// Label of the overdue waypoint, if it has one.
    pub waypoint:       Option<String>,
    pub location:       Point,
    pub clock:          f64,
    pub departure_time: f64,
}
