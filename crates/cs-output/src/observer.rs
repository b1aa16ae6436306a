//! `FleetOutputObserver<W>` bridges `FleetObserver` to an `OutputWriter`.

use cs_fleet::{CourierTrack, FleetObserver, FleetRun};

use crate::row::{TrajectoryRow, WaypointRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, Palette};

/// A [`FleetObserver`] that writes each courier's markers and trajectory to
/// any [`OutputWriter`] backend as the courier completes.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After `fleet.run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct FleetOutputObserver<W: OutputWriter> {
    writer:     W,
    palette:    Palette,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FleetOutputObserver<W> {
    pub fn new(writer: W, palette: Palette) -> Self {
        Self {
            writer,
            palette,
            rows:       0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Trajectory rows handed to the writer so far.
    pub fn trajectory_rows(&self) -> usize {
        self.rows
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FleetObserver for FleetOutputObserver<W> {
    fn on_courier_done(&mut self, track: &CourierTrack) {
        let markers = WaypointRow::from_track(track, &self.palette);
        let result = self.writer.write_waypoints(&markers);
        self.store_err(result);

        let positions = TrajectoryRow::from_track(track);
        self.rows += positions.len();
        let result = self.writer.write_trajectory(&positions);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _run: &FleetRun) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
