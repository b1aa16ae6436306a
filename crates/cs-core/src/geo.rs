//! Planar coordinate types and the overshoot test used by the traversal
//! engine.
//!
//! Coordinates are plain `f64` on a flat plane (metres in the demo data);
//! there is no projection.  Equality is exact; the engine relies on
//! snapping to a waypoint to produce a bit-identical match.

use std::fmt;

/// A 2-D coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let (dx, dy) = self.delta(other);
        (dx * dx + dy * dy).sqrt()
    }

    /// Signed component-wise difference `other - self`.
    #[inline]
    pub fn delta(self, other: Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    /// Angle in radians of the vector from `self` to `other`.
    ///
    /// `0.0` when both points coincide (`atan2(0, 0)`).
    #[inline]
    pub fn bearing_to(self, other: Point) -> f64 {
        let (dx, dy) = self.delta(other);
        dy.atan2(dx)
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// How far a step from `self` to `proposed` would carry past
    /// `destination`, assuming all three points are collinear.
    ///
    /// Returns `None` while `destination` is strictly farther away than
    /// `proposed`.  When `self == destination` the step always counts as an
    /// overshoot, including the zero-length case.
    pub fn overshoot_distance(self, destination: Point, proposed: Point) -> Option<f64> {
        if self.distance(destination) > self.distance(proposed) {
            None
        } else {
            Some(destination.distance(proposed))
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}, {:.3}", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

// ── WayPoint ──────────────────────────────────────────────────────────────────

/// A stop on a courier's route.
///
/// `departure_time` is the simulated clock value before which the courier
/// may not leave; `None` means leave on arrival.  `label` is cosmetic and
/// never read by the traversal engine.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WayPoint {
    pub point:          Point,
    pub departure_time: Option<f64>,
    pub label:          Option<String>,
}

impl WayPoint {
    /// An untimed, unlabelled waypoint.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point:          Point::new(x, y),
            departure_time: None,
            label:          None,
        }
    }

    pub fn with_departure(mut self, time: f64) -> Self {
        self.departure_time = Some(time);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.point.y
    }

    /// `true` if the courier may leave at simulated time `clock`.
    #[inline]
    pub fn may_depart_at(&self, clock: f64) -> bool {
        self.departure_time.is_none_or(|t| clock >= t)
    }

    /// The departure time, if one is set and `clock` has reached it.
    #[inline]
    pub fn overdue_at(&self, clock: f64) -> Option<f64> {
        self.departure_time.filter(|&t| clock >= t)
    }
}

impl From<Point> for WayPoint {
    fn from(point: Point) -> Self {
        Self { point, departure_time: None, label: None }
    }
}

impl fmt::Display for WayPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.point)?;
        if let Some(label) = &self.label {
            write!(f, " [{label}]")?;
        }
        if let Some(t) = self.departure_time {
            write!(f, " @ {t}")?;
        }
        Ok(())
    }
}
