//! Plain data row types written by output backends.

use cs_fleet::CourierTrack;

use crate::{MarkerKind, Palette};

/// One courier's position at one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryRow {
    pub courier_id: u32,
    pub courier:    String,
    pub tick:       u64,
    pub x:          f64,
    pub y:          f64,
}

/// A static route marker.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointRow {
    pub courier_id:     u32,
    pub courier:        String,
    /// Position in the route; 0 is the origin.
    pub seq:            u32,
    pub x:              f64,
    pub y:              f64,
    pub departure_time: Option<f64>,
    pub label:          Option<String>,
    pub marker:         MarkerKind,
    pub color:          String,
}

impl TrajectoryRow {
    pub fn from_track(track: &CourierTrack) -> Vec<TrajectoryRow> {
        track
            .trajectory
            .iter()
            .enumerate()
            .map(|(tick, p)| TrajectoryRow {
                courier_id: track.id.0,
                courier:    track.name.clone(),
                tick:       tick as u64,
                x:          p.x,
                y:          p.y,
            })
            .collect()
    }
}

impl WaypointRow {
    pub fn from_track(track: &CourierTrack, palette: &Palette) -> Vec<WaypointRow> {
        let courier_color = palette.color_for(track.id);
        track
            .waypoints
            .iter()
            .enumerate()
            .map(|(seq, wp)| {
                let marker = MarkerKind::for_route_position(seq, wp);
                WaypointRow {
                    courier_id:     track.id.0,
                    courier:        track.name.clone(),
                    seq:            seq as u32,
                    x:              wp.x(),
                    y:              wp.y(),
                    departure_time: wp.departure_time,
                    label:          wp.label.clone(),
                    marker,
                    color:          marker.color(courier_color).to_owned(),
                }
            })
            .collect()
    }
}
