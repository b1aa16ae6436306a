//! CSV route loader.
//!
//! # CSV format
//!
//! One row per waypoint.  Rows for the same courier are kept in file order;
//! couriers are returned in order of first appearance.
//!
//! ```csv
//! courier,x,y,time,label
//! c1,1200,800,,start
//! c1,3400,2100,12.5,r-pizza
//! c1,5000,2500,,d-17
//! c2,9000,4000,3,start
//! ```
//!
//! | Column    | Meaning                                                  |
//! |-----------|----------------------------------------------------------|
//! | `courier` | Courier identifier; rows with an empty value are ignored |
//! | `x`, `y`  | Coordinates; a non-numeric or non-finite value skips row |
//! | `time`    | Departure time; blank, non-numeric or non-finite → none  |
//! | `label`   | Optional annotation (also accepted as `where to`)        |
//!
//! A courier whose rows were all skipped does not appear in the output.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use cs_core::WayPoint;

use crate::{CourierRoute, IngestError, IngestResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    courier: String,
    x:       String,
    y:       String,
    #[serde(default)]
    time:    Option<String>,
    #[serde(default, alias = "where to")]
    label:   Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load courier routes from a CSV file.
pub fn load_routes_csv(path: &Path) -> IngestResult<Vec<CourierRoute>> {
    let file = std::fs::File::open(path).map_err(IngestError::Io)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
pub fn load_routes_reader<R: Read>(reader: R) -> IngestResult<Vec<CourierRoute>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut order: Vec<String> = Vec::new();
    let mut by_courier: HashMap<String, Vec<WayPoint>> = HashMap::new();

    for (line, result) in csv_reader.deserialize::<RouteRecord>().enumerate() {
        let row = result.map_err(|e| IngestError::Parse(e.to_string()))?;
        if row.courier.is_empty() {
            continue;
        }

        // The courier is registered even if this particular row is dropped,
        // so first-appearance order matches the file.
        let waypoints = by_courier.entry(row.courier.clone()).or_insert_with(|| {
            order.push(row.courier.clone());
            Vec::new()
        });

        match parse_waypoint(&row) {
            Some(wp) => waypoints.push(wp),
            None => debug!(
                row     = line + 1,
                courier = %row.courier,
                x       = %row.x,
                y       = %row.y,
                "skipping row with non-numeric or non-finite coordinates"
            ),
        }
    }

    let routes = order
        .into_iter()
        .filter_map(|name| {
            let waypoints = by_courier.remove(&name)?;
            if waypoints.is_empty() {
                debug!(courier = %name, "no usable rows; courier dropped");
                return None;
            }
            Some(CourierRoute::new(name, waypoints))
        })
        .collect();

    Ok(routes)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_waypoint(row: &RouteRecord) -> Option<WayPoint> {
    let x = finite_or_none(&row.x)?;
    let y = finite_or_none(&row.y)?;
    Some(WayPoint {
        point:          (x, y).into(),
        departure_time: row.time.as_deref().and_then(finite_or_none),
        label:          row.label.clone().filter(|l| !l.is_empty()),
    })
}

/// `f64::from_str` accepts `NaN` and `inf`; neither is a usable coordinate
/// or departure time.
fn finite_or_none(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
