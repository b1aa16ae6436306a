//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trajectories.csv`
//! - `waypoints.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TrajectoryRow, WaypointRow};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    trajectories: Writer<File>,
    waypoints:    Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trajectories = Writer::from_path(dir.join("trajectories.csv"))?;
        trajectories.write_record(["courier_id", "courier", "tick", "x", "y"])?;

        let mut waypoints = Writer::from_path(dir.join("waypoints.csv"))?;
        waypoints.write_record([
            "courier_id",
            "courier",
            "seq",
            "x",
            "y",
            "departure_time",
            "label",
            "marker",
            "color",
        ])?;

        Ok(Self {
            trajectories,
            waypoints,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()> {
        for row in rows {
            self.waypoints.write_record(&[
                row.courier_id.to_string(),
                row.courier.clone(),
                row.seq.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.departure_time.map(|t| t.to_string()).unwrap_or_default(),
                row.label.clone().unwrap_or_default(),
                row.marker.to_string(),
                row.color.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.trajectories.write_record(&[
                row.courier_id.to_string(),
                row.courier.clone(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectories.flush()?;
        self.waypoints.flush()?;
        Ok(())
    }
}
