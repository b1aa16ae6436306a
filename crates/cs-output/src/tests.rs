//! Integration tests for cs-output.

use cs_core::{CourierConfig, CourierId, Point, WayPoint};
use cs_fleet::{FleetBuilder, FleetRun, NoopObserver};
use cs_ingest::CourierRoute;

fn sample_run() -> FleetRun {
    let routes = [
        CourierRoute::new(
            "c1",
            vec![
                WayPoint::new(0.0, 0.0).with_label("start"),
                WayPoint::new(2.0, 0.0).with_label("r-pizza"),
                WayPoint::new(2.0, 3.0).with_label("d-1"),
            ],
        ),
        CourierRoute::new("c2", vec![WayPoint::new(5.0, 5.0), WayPoint::new(6.0, 5.0)]),
    ];
    FleetBuilder::new(CourierConfig::new(1.0, 1.0))
        .routes(routes)
        .build()
        .unwrap()
        .run(&mut NoopObserver)
}

// ── Styling ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod style_tests {
    use crate::{MarkerKind, Palette};

    use super::*;

    #[test]
    fn palette_cycles() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 10);
        assert_eq!(palette.color_for(CourierId(0)), "green");
        assert_eq!(palette.color_for(CourierId(9)), "darkblue");
        assert_eq!(palette.color_for(CourierId(10)), "green");
    }

    #[test]
    fn empty_custom_palette_falls_back() {
        assert_eq!(Palette::new(vec![]), Palette::default());
        let custom = Palette::new(vec!["black".into(), "white".into()]);
        assert_eq!(custom.color_for(CourierId(3)), "white");
    }

    #[test]
    fn marker_classification() {
        assert_eq!(MarkerKind::classify(Some("r-pizza")), MarkerKind::Restaurant);
        assert_eq!(MarkerKind::classify(Some("d-17")), MarkerKind::Stop);
        assert_eq!(MarkerKind::classify(Some("")), MarkerKind::Unlabeled);
        assert_eq!(MarkerKind::classify(None), MarkerKind::Unlabeled);
        // Case-sensitive prefix.
        assert_eq!(MarkerKind::classify(Some("Restaurant")), MarkerKind::Stop);
    }

    #[test]
    fn origin_ignores_label() {
        let wp = WayPoint::new(0.0, 0.0).with_label("r-home");
        assert_eq!(MarkerKind::for_route_position(0, &wp), MarkerKind::Origin);
        assert_eq!(MarkerKind::for_route_position(1, &wp), MarkerKind::Restaurant);
    }

    #[test]
    fn restaurant_markers_are_red() {
        assert_eq!(MarkerKind::Restaurant.color("gold"), "red");
        assert_eq!(MarkerKind::Stop.color("gold"), "gold");
        assert_eq!(MarkerKind::Restaurant.glyph(), "*");
        assert_eq!(MarkerKind::Unlabeled.glyph(), "$?$");
    }
}

// ── Playback ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod playback_tests {
    use crate::{Bounds, Playback, PlaybackMode, RenderConfig};

    use super::*;

    #[test]
    fn default_render_config() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.mode, PlaybackMode::Animate);
        assert_eq!(cfg.bounds, Bounds { min_x: 0.0, max_x: 15_000.0, min_y: 0.0, max_y: 12_000.0 });
        assert_eq!(cfg.frame_interval_ms, 1);
        assert_eq!(cfg.repeat_delay_ms, 1_000);
    }

    #[test]
    fn iterates_every_frame_once() {
        let run = sample_run();
        let playback = Playback::new(&run);
        assert_eq!(playback.len(), run.frame_count());
        let ticks: Vec<usize> = playback.map(|f| f.tick).collect();
        assert_eq!(ticks, (0..run.frame_count()).collect::<Vec<_>>());
    }

    #[test]
    fn short_trajectories_hold_last_position() {
        let run = sample_run();
        // c2: one 1-unit leg → trajectory of 3 points.
        assert_eq!(run.tracks[1].trajectory.len(), 3);
        let playback = Playback::new(&run);
        let last = playback.frame(run.frame_count() - 1);
        assert_eq!(
            last.positions,
            vec![(CourierId(0), Point::new(2.0, 3.0)), (CourierId(1), Point::new(6.0, 5.0))]
        );
    }

    #[test]
    fn seek_truncates_and_clamps() {
        let run = sample_run();
        let playback = Playback::new(&run);
        assert_eq!(playback.seek(1.9), playback.frame(1));
        assert_eq!(playback.seek(-4.0), playback.frame(0));
        assert_eq!(playback.seek(1e6).positions, playback.frame(run.frame_count() - 1).positions);
    }

    #[test]
    fn bounds_around_run() {
        let run = sample_run();
        let b = Bounds::around(&run).unwrap();
        assert_eq!(b, Bounds { min_x: 0.0, max_x: 6.0, min_y: 0.0, max_y: 5.0 });
        assert!(b.contains(Point::new(2.0, 3.0)));
        assert!(!b.contains(Point::new(7.0, 3.0)));
        assert!(Bounds::around(&FleetRun::default()).is_none());
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use crate::{MarkerKind, Palette, TrajectoryRow, WaypointRow};

    use super::*;

    #[test]
    fn waypoint_rows_carry_markers_and_colors() {
        let run = sample_run();
        let rows = WaypointRow::from_track(&run.tracks[0], &Palette::default());
        let markers: Vec<MarkerKind> = rows.iter().map(|r| r.marker).collect();
        assert_eq!(markers, [MarkerKind::Origin, MarkerKind::Restaurant, MarkerKind::Stop]);
        let colors: Vec<&str> = rows.iter().map(|r| r.color.as_str()).collect();
        assert_eq!(colors, ["green", "red", "green"]);
        assert_eq!(rows[2].seq, 2);
    }

    #[test]
    fn trajectory_rows_one_per_tick() {
        let run = sample_run();
        let rows = TrajectoryRow::from_track(&run.tracks[1]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].courier, "c2");
        assert_eq!(rows[2].tick, 2);
        assert_eq!((rows[2].x, rows[2].y), (6.0, 5.0));
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::writer::OutputWriter;
    use crate::{CsvWriter, FleetOutputObserver, Palette};

    use super::*;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trajectories.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["courier_id", "courier", "tick", "x", "y"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("waypoints.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["courier_id", "courier", "seq", "x", "y", "departure_time", "label", "marker", "color"]
        );
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn observer_writes_whole_run() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = FleetOutputObserver::new(writer, Palette::default());

        let routes = [
            CourierRoute::new(
                "c1",
                vec![
                    WayPoint::new(0.0, 0.0),
                    WayPoint::new(2.0, 0.0).with_departure(4.0).with_label("r-pizza"),
                ],
            ),
            CourierRoute::new("c2", vec![WayPoint::new(5.0, 5.0), WayPoint::new(6.0, 5.0)]),
        ];
        let run = FleetBuilder::new(CourierConfig::new(1.0, 1.0))
            .routes(routes)
            .build()
            .unwrap()
            .run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let expected_rows: usize = run.tracks.iter().map(|t| t.trajectory.len()).sum();
        assert_eq!(obs.trajectory_rows(), expected_rows);

        let mut rdr = csv::Reader::from_path(dir.path().join("trajectories.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), expected_rows);
        assert_eq!(&rows[0][1], "c1");
        assert_eq!(&rows[0][2], "0");

        let mut rdr = csv::Reader::from_path(dir.path().join("waypoints.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[1][5], "4");         // departure_time
        assert_eq!(&rows[1][6], "r-pizza");   // label
        assert_eq!(&rows[1][7], "restaurant");
        assert_eq!(&rows[1][8], "red");
        assert_eq!(&rows[2][5], "");          // untimed origin of c2
        assert_eq!(&rows[2][8], "deepskyblue");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;
    use crate::{FleetOutputObserver, Palette};

    use super::*;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_run_counts() {
        let dir = tmp();
        let writer = SqliteWriter::new(dir.path()).unwrap();
        let mut obs = FleetOutputObserver::new(writer, Palette::default());
        let run = FleetBuilder::new(CourierConfig::new(1.0, 1.0))
            .route(CourierRoute::new(
                "c1",
                vec![WayPoint::new(0.0, 0.0), WayPoint::new(3.0, 0.0).with_label("r1")],
            ))
            .build()
            .unwrap()
            .run(&mut obs);
        assert!(obs.take_error().is_none());
        let mut writer = obs.into_writer();
        writer.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let ticks: i64 = conn
            .query_row("SELECT COUNT(*) FROM trajectories", [], |r| r.get(0))
            .unwrap();
        assert_eq!(ticks as usize, run.tracks[0].trajectory.len());

        let (marker, color, departure): (String, String, Option<f64>) = conn
            .query_row(
                "SELECT marker, color, departure_time FROM waypoints WHERE seq = 1",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(marker, "restaurant");
        assert_eq!(color, "red");
        assert_eq!(departure, None);
    }
}
