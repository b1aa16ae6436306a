//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, TrajectoryRow, WaypointRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface to the caller through
/// [`FleetOutputObserver::take_error`][crate::FleetOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the static markers for one courier.
    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()>;

    /// Write one courier's per-tick positions.
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
