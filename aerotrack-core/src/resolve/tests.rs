use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use bevy_math::DVec2;
use math::{Course, Length, Position};

use super::{find_segment, path_to_position, position_to_path};
use crate::consts::CROSS_TRACK_TOLERANCE;
use crate::test_paths::{clockwise_quarter_turn, corner, duplicated_start, quarter_turn, straight};
use crate::{Error, Segment};

fn assert_pos(actual: Position<DVec2>, expect: Position<DVec2>) {
    assert!(actual.distance_exact(expect) < Length::from_meters(1e-6), "expect {expect:?}, got {actual:?}");
}

fn assert_length(actual: Length<f64>, expect: f64) {
    assert!((actual.into_meters() - expect).abs() < 1e-6, "expect {expect}, got {actual:?}");
}

fn assert_course(actual: Course, expect: Course) {
    let delta = (actual.radians() - expect.radians()).normalize_signed();
    assert!(delta.abs().into_radians() < 1e-9, "expect {expect:?}, got {actual:?}");
}

fn locate(path: &[crate::PathNode], x: f64, y: f64) -> super::PathLocation {
    position_to_path(path, Position::from_origin_meters(x, y), 0, CROSS_TRACK_TOLERANCE).unwrap()
}

#[test]
fn corner_positions() {
    let path = corner();

    let first_leg = locate(&path, 500., 0.);
    assert_eq!(first_leg.index, 0);
    assert_length(first_leg.distance, 500.);
    assert_course(first_leg.course, Course::EAST);

    let second_leg = locate(&path, 1000., 500.);
    assert_eq!(second_leg.index, 1);
    assert_length(second_leg.distance, 1500.);
    assert_course(second_leg.course, Course::NORTH);
}

#[test]
fn off_track_position_projects_onto_leg() {
    let location = locate(&corner(), 300., -120.);
    assert_eq!(location.index, 0);
    assert_length(location.distance, 300.);
}

macro_rules! round_trip {
    ($($name:ident: $path:expr;)*) => {$(
        paste::paste! {
            #[test]
            fn [< round_trip_ $name >]() {
                let path = $path;
                for (index, node) in path.iter().enumerate() {
                    let point = path_to_position(&path, node.cumulative_length, 0).unwrap();
                    assert_pos(point.position, node.position);

                    let location = position_to_path(&path, node.position, 0, CROSS_TRACK_TOLERANCE)
                        .unwrap_or_else(|err| panic!("node {index}: {err}"));
                    assert_length(location.distance, node.cumulative_length.into_meters());
                }
            }
        }
    )*}
}

round_trip! {
    corner: corner();
    quarter_turn: quarter_turn();
    clockwise_quarter_turn: clockwise_quarter_turn();
    straight: straight(5000.);
}

#[test]
fn turn_containment() {
    let path = quarter_turn();
    for step in 1..10 {
        let fraction = f64::from(step) / 10.;
        let bearing = -FRAC_PI_2 + FRAC_PI_2 * fraction;
        let location = locate(&path, 1000. + 1000. * bearing.cos(), 1000. + 1000. * bearing.sin());
        assert_eq!(location.index, 1, "bearing {bearing}");
        assert_length(location.distance, 1000. + 1000. * FRAC_PI_2 * fraction);
        assert_course(location.course, Course::from_radians(math::Angle::from_radians(bearing + FRAC_PI_2)));
    }
}

#[test]
fn clockwise_turn_containment() {
    let path = clockwise_quarter_turn();
    let bearing = FRAC_PI_4;
    let location = locate(&path, 1000. + 1000. * bearing.cos(), -1000. + 1000. * bearing.sin());
    assert_eq!(location.index, 1);
    assert_length(location.distance, 1000. + 1000. * FRAC_PI_4);
    assert_course(location.course, Course::from_degrees(-45.));
}

#[test]
fn outside_turn_resolves_to_adjacent_segment() {
    let path = quarter_turn();

    let bearing = -3. * FRAC_PI_4;
    let before = locate(&path, 1000. + 1000. * bearing.cos(), 1000. + 1000. * bearing.sin());
    assert_eq!(before.index, 0);
    assert_length(before.distance, 1000. + 1000. * bearing.cos());

    let bearing = FRAC_PI_4;
    let after = locate(&path, 1000. + 1000. * bearing.cos(), 1000. + 1000. * bearing.sin());
    assert_eq!(after.index, 2);
    assert_length(after.distance, path[2].cumulative_length.into_meters() + 1000. * bearing.sin());
    assert_course(after.course, Course::NORTH);
}

#[test]
fn tolerance_boundary() {
    let path = straight(100_000.);
    let tolerance = Length::from_meters(4630.);

    let inside = position_to_path(&path, Position::from_origin_meters(50_000., 4630.), 0, tolerance)
        .unwrap();
    assert_length(inside.distance, 50_000.);

    let outside =
        position_to_path(&path, Position::from_origin_meters(50_000., 4630.001), 0, tolerance);
    let Err(Error::NoAcceptableNode { closest_cross_track: Some(closest), .. }) = outside else {
        panic!("expected no acceptable node, got {outside:?}");
    };
    assert_length(closest, 4630.001);
}

#[test]
fn no_candidate_segment() {
    let err = position_to_path(&corner(), Position::from_origin_meters(3000., -3000.), 1, CROSS_TRACK_TOLERANCE)
        .unwrap_err();
    assert!(err.is_no_acceptable_node(), "{err:?}");
}

#[test]
fn degenerate_leg_positions() {
    let path = duplicated_start();

    let on_leg = locate(&path, 500., 0.);
    assert_eq!(on_leg.index, 1);
    assert_length(on_leg.distance, 500.);

    let on_duplicate = locate(&path, 0., 0.);
    assert!(!on_duplicate.distance.is_nan());
    assert_length(on_duplicate.distance, 0.);

    let point = path_to_position(&path, Length::ZERO, 0).unwrap();
    assert_pos(point.position, Position::ORIGIN);
}

#[test]
fn unset_segment_in_candidates() {
    let mut path = corner();
    path[1].segment = Segment::Unset;
    assert_eq!(
        position_to_path(&path, Position::from_origin_meters(1000., 500.), 0, CROSS_TRACK_TOLERANCE),
        Err(Error::InvalidSegment { index: 1 })
    );
    assert_eq!(
        path_to_position(&path, Length::from_meters(1500.), 0),
        Err(Error::InvalidSegment { index: 1 })
    );
}

#[test]
fn distance_on_turn() {
    let path = quarter_turn();
    let point = path_to_position(&path, Length::from_meters(1000. + 1000. * FRAC_PI_4), 0).unwrap();
    assert_eq!(point.index, 1);
    let leg = 1000. * FRAC_PI_4.cos();
    assert_pos(point.position, Position::from_origin_meters(1000. + leg, 1000. - leg));
    assert_course(point.course, Course::from_degrees(45.));
}

#[test]
fn distance_on_straight_from_later_start() {
    let point = path_to_position(&corner(), Length::from_meters(1500.), 1).unwrap();
    assert_eq!(point.index, 1);
    assert_pos(point.position, Position::from_origin_meters(1000., 500.));
    assert_course(point.course, Course::NORTH);
}

#[test]
fn distance_outside_path_extrapolates() {
    let path = corner();

    let before = path_to_position(&path, Length::from_meters(-200.), 0).unwrap();
    assert_eq!(before.index, 0);
    assert_pos(before.position, Position::from_origin_meters(-200., 0.));

    let after = path_to_position(&path, Length::from_meters(2300.), 0).unwrap();
    assert_eq!(after.index, 2);
    assert_pos(after.position, Position::from_origin_meters(1000., 1300.));
    assert_course(after.course, Course::NORTH);
}

#[test]
fn find_segment_on_nodes() {
    let path = corner();
    assert_eq!(find_segment(&path, Length::ZERO, 0), Ok(0));
    assert_eq!(find_segment(&path, Length::from_meters(1000.), 0), Ok(1));
    assert_eq!(find_segment(&path, Length::from_meters(999.), 0), Ok(0));
    assert_eq!(find_segment(&path, Length::from_meters(2000.), 0), Ok(2));
    assert_eq!(find_segment(&[], Length::ZERO, 0), Err(Error::EmptyPath));
}
