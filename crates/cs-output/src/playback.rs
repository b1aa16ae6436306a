//! Render settings and tick-indexed playback frames.
//!
//! Trajectories have unequal lengths.  Frame `t` shows every courier at
//! `trajectory[min(t, len - 1)]`, so couriers that finish early hold at
//! their last position until the longest trajectory ends.

use cs_core::{CourierId, Point};
use cs_fleet::FleetRun;

// ── Configuration ─────────────────────────────────────────────────────────────

/// How frames are driven.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlaybackMode {
    /// A time slider picks frames on demand.
    Slider,
    /// Frames advance on a timer and loop.
    #[default]
    Animate,
}

/// Axis-aligned plot extent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    /// Smallest box holding every waypoint in `run`, or `None` for an empty
    /// run.
    pub fn around(run: &FleetRun) -> Option<Bounds> {
        let mut points = run.tracks.iter().flat_map(|t| t.waypoints.iter().map(|w| w.point));
        let first = points.next()?;
        let init = Bounds { min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y };
        Some(points.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min_x: 0.0, max_x: 15_000.0, min_y: 0.0, max_y: 12_000.0 }
    }
}

/// Presentation settings handed to whatever draws the run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    pub mode:              PlaybackMode,
    pub bounds:            Bounds,
    /// Delay between animated frames.
    pub frame_interval_ms: u64,
    /// Pause before an animation loops.
    pub repeat_delay_ms:   u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode:              PlaybackMode::Animate,
            bounds:            Bounds::default(),
            frame_interval_ms: 1,
            repeat_delay_ms:   1_000,
        }
    }
}

// ── Frames ────────────────────────────────────────────────────────────────────

/// Every courier's position at one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub tick:      usize,
    pub positions: Vec<(CourierId, Point)>,
}

/// Frame source over a finished [`FleetRun`].
///
/// Iterating yields frames `0..frame_count` (animate mode); [`frame`] and
/// [`seek`] give random access (slider mode).
///
/// [`frame`]: Playback::frame
/// [`seek`]: Playback::seek
pub struct Playback<'a> {
    run:  &'a FleetRun,
    next: usize,
}

impl<'a> Playback<'a> {
    pub fn new(run: &'a FleetRun) -> Self {
        Self { run, next: 0 }
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.run.frame_count()
    }

    /// Positions at tick `t`; any `t` is valid.
    pub fn frame(&self, t: usize) -> Frame {
        let positions = self
            .run
            .tracks
            .iter()
            .filter_map(|track| track.position_at(t).map(|p| (track.id, p)))
            .collect();
        Frame { tick: t, positions }
    }

    /// Frame for a continuous slider value; fractional values truncate and
    /// negatives clamp to 0.
    pub fn seek(&self, value: f64) -> Frame {
        self.frame(value.max(0.0) as usize)
    }
}

impl Iterator for Playback<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next >= self.frame_count() {
            return None;
        }
        let frame = self.frame(self.next);
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frame_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Playback<'_> {}
