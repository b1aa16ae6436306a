//! A courier's ordered stop list as read from input.

use cs_core::WayPoint;

/// One courier's waypoints in visiting order.
///
/// The first waypoint is the origin: the courier starts there and any
/// departure time on it is an initial hold.
#[derive(Clone, Debug, PartialEq)]
pub struct CourierRoute {
    pub name:      String,
    pub waypoints: Vec<WayPoint>,
}

impl CourierRoute {
    pub fn new(name: impl Into<String>, waypoints: Vec<WayPoint>) -> Self {
        Self { name: name.into(), waypoints }
    }

    #[inline]
    pub fn origin(&self) -> Option<&WayPoint> {
        self.waypoints.first()
    }

    /// Every waypoint after the origin.
    #[inline]
    pub fn stops(&self) -> &[WayPoint] {
        self.waypoints.get(1..).unwrap_or(&[])
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
