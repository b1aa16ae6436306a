//! `cs-output`: everything a renderer needs from a finished fleet run.
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`style`]     | `Palette`, `MarkerKind` (origin / restaurant / stop)     |
//! | [`playback`]  | `RenderConfig`, `PlaybackMode`, `Playback`, `Frame`      |
//! | [`row`]       | `TrajectoryRow`, `WaypointRow`                           |
//! | [`writer`]    | `OutputWriter` trait                                     |
//! | [`csv`]       | `CsvWriter` → `trajectories.csv`, `waypoints.csv`        |
//! | `sqlite`      | `SqliteWriter` → `output.db` (feature `sqlite`)          |
//! | [`observer`]  | `FleetOutputObserver`, a `FleetObserver` over an `OutputWriter` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use cs_output::{CsvWriter, FleetOutputObserver, Palette};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FleetOutputObserver::new(writer, Palette::default());
//! let run = fleet.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod playback;
pub mod row;
pub mod style;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FleetOutputObserver;
pub use playback::{Bounds, Frame, Playback, PlaybackMode, RenderConfig};
pub use row::{TrajectoryRow, WaypointRow};
pub use style::{MarkerKind, Palette};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
