use math::{Course, Length, Position, TurnDirection};
use strum::IntoEnumIterator;

use crate::{CrossTrackTolerance, HorizontalPath, ProgressionDirection, Segment, TrackerConfig};

const TURN_PATH: &str = r#"{
    "nodes": [
        {
            "position": [0.0, 0.0],
            "cumulative_length": 0.0,
            "course": 0.0,
            "segment": "Straight"
        },
        {
            "position": [1000.0, 0.0],
            "cumulative_length": 1000.0,
            "course": 0.0,
            "segment": {
                "Turn": {
                    "center": [1000.0, 1000.0],
                    "start_angle": -1.5707963267948966,
                    "end_angle": 0.0,
                    "radius": 1000.0,
                    "direction": "CounterClockwise"
                }
            }
        },
        {
            "position": [2000.0, 1000.0],
            "cumulative_length": 2570.7963267948965,
            "course": 1.5707963267948966
        }
    ]
}"#;

#[test]
fn parse_turn_path() {
    let path: HorizontalPath = serde_json::from_str(TURN_PATH).unwrap();
    assert_eq!(path.nodes.len(), 3);
    assert_eq!(path.nodes[0].segment, Segment::Straight);
    assert_eq!(path.nodes[2].segment, Segment::Unset, "missing segment defaults to unset");
    assert_eq!(path.nodes[2].course, Course::NORTH);

    let Segment::Turn(arc) = path.nodes[1].segment else {
        panic!("expected turn segment, got {:?}", path.nodes[1].segment);
    };
    assert_eq!(arc.center, Position::from_origin_meters(1000., 1000.));
    assert_eq!(arc.radius, Length::from_meters(1000.));
    assert_eq!(arc.direction, TurnDirection::CounterClockwise);
}

#[test]
fn reserialized_path_parses_identically() {
    let path: HorizontalPath = serde_json::from_str(TURN_PATH).unwrap();
    let json = serde_json::to_string(&path).unwrap();
    let parsed: HorizontalPath = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, path);
    assert_eq!(parsed.nodes[2].cumulative_length, Length::from_meters(2570.7963267948965));
}

#[test]
fn reject_out_of_range_length() {
    let json = TURN_PATH.replace("\"radius\": 1000.0", "\"radius\": 1e999");
    assert!(serde_json::from_str::<HorizontalPath>(&json).is_err());
}

#[test]
fn tracker_config_defaults() {
    let config: TrackerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, TrackerConfig::default());
    assert_eq!(config.tolerance, CrossTrackTolerance::Standard);
    assert_eq!(config.progression, ProgressionDirection::Undefined);
}

#[test]
fn tracker_config_explicit_tolerance() {
    let config: TrackerConfig = serde_json::from_str(
        r#"{"tolerance": {"Explicit": 900.0}, "progression": "Decrementing"}"#,
    )
    .unwrap();
    assert_eq!(config.tolerance, CrossTrackTolerance::Explicit(Length::from_meters(900.)));
    assert_eq!(config.progression, ProgressionDirection::Decrementing);
}

#[test]
fn progression_direction_names() {
    let names: Vec<_> = ProgressionDirection::iter().map(|dir| dir.to_string()).collect();
    assert_eq!(names, ["Undefined", "Incrementing", "Decrementing"]);
    for dir in ProgressionDirection::iter() {
        let parsed: ProgressionDirection =
            serde_json::from_str(&format!("\"{dir}\"")).unwrap();
        assert_eq!(parsed, dir);
    }
}
