//! Unit tests for cs-ingest.

use std::io::Cursor;

use cs_core::{Point, WayPoint};

use crate::{load_routes_csv, load_routes_reader, CourierRoute, IngestError};

const ORDERS_CSV: &str = "\
courier,x,y,time,label\n\
c1,1200,800,,start\n\
c2,9000,4000,3,start\n\
c1,3400,2100,12.5,r-pizza\n\
c1,5000,2500,,d-17\n\
c2,8000,3000,,\n\
";

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn groups_rows_by_courier_in_first_appearance_order() {
        let routes = load_routes_reader(Cursor::new(ORDERS_CSV)).unwrap();
        let names: Vec<&str> = routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["c1", "c2"]);
        assert_eq!(routes[0].waypoints.len(), 3);
        assert_eq!(routes[1].waypoints.len(), 2);
    }

    #[test]
    fn parses_fields() {
        let routes = load_routes_reader(Cursor::new(ORDERS_CSV)).unwrap();
        let c1 = &routes[0];
        assert_eq!(
            c1.waypoints[1],
            WayPoint::new(3400.0, 2100.0).with_departure(12.5).with_label("r-pizza")
        );
        assert_eq!(c1.waypoints[0].departure_time, None);
        assert_eq!(routes[1].origin().unwrap().departure_time, Some(3.0));
        assert_eq!(routes[1].waypoints[1].label, None);
    }

    #[test]
    fn origin_and_stops() {
        let routes = load_routes_reader(Cursor::new(ORDERS_CSV)).unwrap();
        let c1 = &routes[0];
        assert_eq!(c1.origin().unwrap().point, Point::new(1200.0, 800.0));
        assert_eq!(c1.stops().len(), 2);
        assert!(CourierRoute::new("x", vec![]).stops().is_empty());
    }

    #[test]
    fn non_numeric_coordinates_skip_the_row() {
        let csv = "\
courier,x,y,time,label\n\
c1,0,0,,start\n\
c1,abc,5,,bad\n\
c1,7,8,,ok\n\
";
        let routes = load_routes_reader(Cursor::new(csv)).unwrap();
        assert_eq!(routes.len(), 1);
        let xs: Vec<f64> = routes[0].waypoints.iter().map(WayPoint::x).collect();
        assert_eq!(xs, [0.0, 7.0]);
    }

    #[test]
    fn non_finite_coordinates_skip_the_row() {
        let csv = "\
courier,x,y,time,label\n\
a,0,0,,start\n\
a,NaN,5,,d-1\n\
a,4,inf,,d-2\n\
a,-infinity,1,,d-3\n\
a,2,2,,d-4\n\
";
        let routes = load_routes_reader(Cursor::new(csv)).unwrap();
        let xs: Vec<f64> = routes[0].waypoints.iter().map(WayPoint::x).collect();
        assert_eq!(xs, [0.0, 2.0]);
        assert!(routes[0].waypoints.iter().all(|w| w.x().is_finite() && w.y().is_finite()));
    }

    #[test]
    fn non_finite_time_becomes_none() {
        let csv = "courier,x,y,time,label\nc1,1,2,NaN,start\nc1,3,4,inf,d-1\n";
        let routes = load_routes_reader(Cursor::new(csv)).unwrap();
        assert!(routes[0].waypoints.iter().all(|w| w.departure_time.is_none()));
    }

    #[test]
    fn non_numeric_time_becomes_none() {
        let csv = "courier,x,y,time,label\nc1,1,2,soon,start\n";
        let routes = load_routes_reader(Cursor::new(csv)).unwrap();
        assert_eq!(routes[0].waypoints[0].departure_time, None);
    }

    #[test]
    fn courier_without_valid_rows_is_dropped() {
        let csv = "\
courier,x,y,time,label\n\
ghost,?,?,,start\n\
c1,1,1,,start\n\
";
        let routes = load_routes_reader(Cursor::new(csv)).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].name, "c1");
    }

    #[test]
    fn where_to_header_accepted() {
        let csv = "courier,x,y,time,where to\nc1,1,2,,r-sushi\n";
        let routes = load_routes_reader(Cursor::new(csv)).unwrap();
        assert_eq!(routes[0].waypoints[0].label.as_deref(), Some("r-sushi"));
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let csv = "courier,x,y\nc1,1,2\nc1,3,4\n";
        let routes = load_routes_reader(Cursor::new(csv)).unwrap();
        assert_eq!(routes[0].waypoints, vec![WayPoint::new(1.0, 2.0), WayPoint::new(3.0, 4.0)]);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let csv = "courier, x, y, time, label\n c1 , 1.5 , 2 , 4 , r1 \n";
        let routes = load_routes_reader(Cursor::new(csv)).unwrap();
        assert_eq!(routes[0].name, "c1");
        assert_eq!(
            routes[0].waypoints[0],
            WayPoint::new(1.5, 2.0).with_departure(4.0).with_label("r1")
        );
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let csv = "courier,x,y,time,label\nc1,1,2\n";
        let result = load_routes_reader(Cursor::new(csv));
        assert!(matches!(result, Err(IngestError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_routes_csv(std::path::Path::new("/nonexistent/orders.csv"));
        assert!(matches!(result, Err(IngestError::Io(_))));
    }

    #[test]
    fn empty_input_yields_no_routes() {
        let routes = load_routes_reader(Cursor::new("courier,x,y,time,label\n")).unwrap();
        assert!(routes.is_empty());
    }
}
