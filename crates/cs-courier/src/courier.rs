//! The `Courier` state machine.

use std::collections::VecDeque;
use std::fmt;

use cs_core::{CourierConfig, Point, WayPoint};
use tracing::warn;

use crate::{CourierResult, LatenessNotice, TickOutcome, Trajectory};

/// A mobile agent visiting an ordered queue of waypoints.
///
/// The origin passed to [`Courier::new`] is both the starting location and
/// the first queued waypoint, so a departure time on the origin holds the
/// courier in place before it sets off.
///
/// `clock` advances by the unscaled `step_size` every tick while spatial
/// movement uses `step_size * speed`.
#[derive(Clone, Debug)]
pub struct Courier {
    name:      String,
    location:  Point,
    pending:   VecDeque<WayPoint>,
    step_size: f64,
    speed:     f64,
    clock:     f64,
    lateness:  Vec<LatenessNotice>,
}

impl Courier {
    pub const DEFAULT_NAME: &'static str = "c?";

    /// Place a courier at `origin` using the parameters in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CourierError::Config`][crate::CourierError::Config] if the
    /// step size or speed is not a positive finite number.
    pub fn new(origin: WayPoint, config: &CourierConfig) -> CourierResult<Self> {
        config.validate()?;
        let location = origin.point;
        let mut pending = VecDeque::new();
        pending.push_back(origin);
        Ok(Self {
            name: Self::DEFAULT_NAME.to_owned(),
            location,
            pending,
            step_size: config.step_size,
            speed:     config.speed,
            clock:     0.0,
            lateness:  Vec::new(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    // ── Queue management ──────────────────────────────────────────────────

    /// Append one waypoint to the end of the queue.
    pub fn add_waypoint(&mut self, waypoint: WayPoint) {
        self.pending.push_back(waypoint);
    }

    pub fn add_waypoints<I: IntoIterator<Item = WayPoint>>(&mut self, waypoints: I) {
        self.pending.extend(waypoints);
    }

    /// The waypoint currently being approached (or dwelt at).
    #[inline]
    pub fn next_waypoint(&self) -> Option<&WayPoint> {
        self.pending.front()
    }

    /// Snapshot of the remaining queue, head first.
    pub fn waypoints(&self) -> Vec<WayPoint> {
        self.pending.iter().cloned().collect()
    }

    #[inline]
    pub fn pending(&self) -> &VecDeque<WayPoint> {
        &self.pending
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn location(&self) -> Point {
        self.location
    }

    #[inline]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Every lateness notice emitted so far, oldest first.
    #[inline]
    pub fn lateness(&self) -> &[LatenessNotice] {
        &self.lateness
    }

    // ── Estimates ─────────────────────────────────────────────────────────

    /// Straight-line length of `location → wp1 → wp2 → …`.  Dwell time is
    /// not counted.
    pub fn total_remaining_distance(&self) -> f64 {
        let mut total = 0.0;
        let mut from = self.location;
        for wp in &self.pending {
            total += from.distance(wp.point);
            from = wp.point;
        }
        total
    }

    /// `ceil(total_remaining_distance / step_size)`.
    ///
    /// Approximate only: ignores speed scaling, dwell and the ticks spent
    /// popping waypoints.  Nothing bounds a run by this number.
    pub fn estimated_remaining_ticks(&self) -> u64 {
        (self.total_remaining_distance() / self.step_size).ceil() as u64
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    ///
    /// Total for every state: on an empty queue only the clock moves.
    pub fn advance(&mut self) -> TickOutcome {
        self.clock += self.step_size;

        let (at_head, may_depart) = match self.pending.front() {
            None       => return TickOutcome::Finished,
            Some(head) => (self.location == head.point, head.may_depart_at(self.clock)),
        };

        if at_head {
            if !may_depart {
                return TickOutcome::Dwelling;
            }
            self.pending.pop_front();
        }

        let Some(target) = self.pending.front() else {
            return TickOutcome::Finished;
        };

        let clock = self.clock;
        if let Some(departure_time) = target.overdue_at(clock) {
            warn!(
                courier  = %self.name,
                waypoint = target.label.as_deref().unwrap_or("?"),
                clock,
                departure_time,
                "running late"
            );
            self.lateness.push(LatenessNotice {
                waypoint: target.label.clone(),
                location: self.location,
                clock,
                departure_time,
            });
        }

        let destination = target.point;
        let travel      = self.step_size * self.speed;
        let bearing     = self.location.bearing_to(destination);
        let proposed    = self.location.offset(travel * bearing.cos(), travel * bearing.sin());

        match self.location.overshoot_distance(destination, proposed) {
            Some(_) => {
                self.location = destination;
                TickOutcome::Arrived
            }
            None => {
                self.location = proposed;
                TickOutcome::Moved
            }
        }
    }

    /// Lazily yield the location before every tick until the queue is
    /// empty, then the final location once.
    ///
    /// The iterator drives this courier; a fresh run needs a fresh courier.
    pub fn run_to_completion(&mut self) -> Trajectory<'_> {
        Trajectory::new(self)
    }

    /// Eager form of [`run_to_completion`][Self::run_to_completion].
    pub fn collect_trajectory(&mut self) -> Vec<Point> {
        self.run_to_completion().collect()
    }
}

impl fmt::Display for Courier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x: {:.2} y: {:.2}", self.name, self.location.x, self.location.y)
    }
}
