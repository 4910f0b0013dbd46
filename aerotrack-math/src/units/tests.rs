use bevy_math::DVec2;

use super::{Angle, Length, Position, METERS_PER_NM};

#[test]
fn length_conversions() {
    assert!((Length::from_nm(2.5).into_meters() - 4630.).abs() < 1e-9);
    assert!((Length::from_meters(METERS_PER_NM).into_nm() - 1.).abs() < 1e-12);
}

#[test]
fn angle_normalize_signed() {
    let wrapped = Angle::from_degrees(270.).normalize_signed();
    assert!((wrapped.into_degrees() + 90.).abs() < 1e-9, "{wrapped:?}");
    let straight = Angle::from_degrees(-180.).normalize_signed();
    assert!((straight.into_degrees() - 180.).abs() < 1e-9, "{straight:?}");
}

#[test]
fn angle_normalize_unsigned() {
    let wrapped = Angle::from_degrees(-90.).normalize_unsigned();
    assert!((wrapped.into_degrees() - 270.).abs() < 1e-9, "{wrapped:?}");
    assert!(Angle::from_radians(-1e-17).normalize_unsigned().0 < Angle::FULL.0);
}

#[test]
fn arc_conversions() {
    let radius = Length::from_meters(2000.);
    let arc = radius.radius_to_arc(Angle::RIGHT);
    assert!((arc.into_meters() - 1000. * std::f64::consts::PI).abs() < 1e-9);
    assert!((arc.arc_to_angle(radius) - Angle::RIGHT).abs().0 < 1e-12);
}

#[test]
fn position_distance() {
    let a = Position::from_origin_meters(3., 4.);
    assert!((a.distance_exact(Position::ORIGIN).into_meters() - 5.).abs() < 1e-12);
    assert!((a.distance_squared(Position::ORIGIN) - 25.).abs() < 1e-12);
    assert!(a.coincides_within(Position::new(DVec2::new(3. + 1e-12, 4.)), Length::from_meters(1e-10)));
    assert!(!a.coincides_within(Position::ORIGIN, Length::from_meters(1.)));
}

#[test]
fn quantity_deserialize_rejects_non_finite() {
    let parsed: Length<f64> = serde_json::from_str("12.5").unwrap();
    assert_eq!(parsed, Length::from_meters(12.5));
    assert!(serde_json::from_str::<Length<f64>>("1e999").is_err());
}
