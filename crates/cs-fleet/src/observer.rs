//! Fleet observer trait for progress reporting and data collection.

use crate::{CourierTrack, FleetRun};

/// Callbacks invoked by [`Fleet::run`][crate::Fleet::run].
///
/// All methods have default no-op implementations.  Hooks are always
/// called from the calling thread in ascending `CourierId` order, even
/// when trajectories were computed in parallel.
pub trait FleetObserver {
    /// Called once before any courier is advanced.
    fn on_run_start(&mut self, _courier_count: usize) {}

    /// Called once per courier after its trajectory is complete.
    fn on_courier_done(&mut self, _track: &CourierTrack) {}

    /// Called once after every courier has finished.
    fn on_run_end(&mut self, _run: &FleetRun) {}
}

/// A [`FleetObserver`] that does nothing.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
