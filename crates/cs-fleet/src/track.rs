//! Per-courier run results and clamped frame lookup.

use cs_core::{CourierId, Point, WayPoint};
use cs_courier::LatenessNotice;

/// Everything a renderer needs for one courier.
#[derive(Clone, Debug, PartialEq)]
pub struct CourierTrack {
    pub id:         CourierId,
    pub name:       String,
    /// The full route, origin first, for static markers.
    pub waypoints:  Vec<WayPoint>,
    /// Location at every tick; index `t` is the position after `t` ticks.
    pub trajectory: Vec<Point>,
    pub lateness:   Vec<LatenessNotice>,
}

impl CourierTrack {
    /// Number of ticks the courier needed (`trajectory.len() - 1`).
    #[inline]
    pub fn ticks(&self) -> usize {
        self.trajectory.len().saturating_sub(1)
    }

    /// Position at frame `t`, holding the last position once the courier
    /// has finished.  `None` only for an empty trajectory.
    #[inline]
    pub fn position_at(&self, t: usize) -> Option<Point> {
        self.trajectory.get(t).or_else(|| self.trajectory.last()).copied()
    }

    #[inline]
    pub fn final_position(&self) -> Option<Point> {
        self.trajectory.last().copied()
    }
}

/// The output of [`Fleet::run`][crate::Fleet::run].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FleetRun {
    /// One track per courier, indexed by `CourierId`.
    pub tracks: Vec<CourierTrack>,
}

impl FleetRun {
    /// Length of the longest trajectory, i.e. the number of frames needed to
    /// play every courier to its end.
    pub fn frame_count(&self) -> usize {
        self.tracks.iter().map(|t| t.trajectory.len()).max().unwrap_or(0)
    }

    /// Every courier's position at frame `t`, in `CourierId` order.
    pub fn positions_at(&self, t: usize) -> Vec<Option<Point>> {
        self.tracks.iter().map(|track| track.position_at(t)).collect()
    }

    pub fn track(&self, id: CourierId) -> Option<&CourierTrack> {
        self.tracks.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
