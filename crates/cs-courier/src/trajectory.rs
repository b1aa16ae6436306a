//! Lazy per-tick position sequence.

use std::iter::FusedIterator;

use cs_core::Point;

use crate::Courier;

/// Iterator returned by [`Courier::run_to_completion`].
///
/// Yields the courier's location before each tick while waypoints remain,
/// then the final location once.  For a run of `n` ticks it yields `n + 1`
/// points.
pub struct Trajectory<'a> {
    courier: &'a mut Courier,
    done:    bool,
}

impl<'a> Trajectory<'a> {
    pub(crate) fn new(courier: &'a mut Courier) -> Self {
        Self { courier, done: false }
    }

    /// The courier being driven.
    pub fn courier(&self) -> &Courier {
        self.courier
    }
}

impl Iterator for Trajectory<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let here = self.courier.location();
        if self.courier.is_finished() {
            self.done = true;
        } else {
            self.courier.advance();
        }
        Some(here)
    }
}

impl FusedIterator for Trajectory<'_> {}
