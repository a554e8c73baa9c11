//! End-to-end tests for the packet-to-summary pipeline.
//!
//! These tests verify:
//! - Dispatch over all three workout codes with positional readings
//! - Rendered summary lines with three-decimal formatting
//! - Whole-run failure modes (unknown code, bad arity, zero duration)
//! - Packet file deserialization as used by the binary

use fitstats::errors::WorkoutError;
use fitstats::models::SensorPacket;
use fitstats::packets::read_packet;

/// Helper to dispatch a packet and render its summary line.
fn render(code: &str, readings: &[f64]) -> String {
    let packet = SensorPacket::new(code, readings.to_vec());
    read_packet(&packet)
        .expect("packet should dispatch")
        .summary()
        .to_string()
}

#[test]
fn reference_batch_renders_expected_lines() {
    assert_eq!(
        render("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        "Workout type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
         Mean speed: 1.000 km/h; Calories burned: 336.000."
    );
    assert_eq!(
        render("RUN", &[15000.0, 1.0, 75.0]),
        "Workout type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
         Mean speed: 9.750 km/h; Calories burned: 797.805."
    );
    assert_eq!(
        render("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        "Workout type: Walking; Duration: 1.000 h.; Distance: 5.850 km; \
         Mean speed: 5.850 km/h; Calories burned: 349.252."
    );
}

#[test]
fn summary_order_matches_packet_order() {
    let batch = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];
    let labels: Vec<&str> = batch
        .iter()
        .map(|(code, readings)| {
            read_packet(&SensorPacket::new(*code, readings.clone()))
                .unwrap()
                .label()
        })
        .collect();
    assert_eq!(labels, ["Swimming", "Running", "Walking"]);
}

#[test]
fn summaries_are_idempotent() {
    let packet = SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]);
    let workout = read_packet(&packet).unwrap();
    assert_eq!(workout.summary(), workout.summary());
}

#[test]
fn unknown_code_aborts_dispatch() {
    let packet = SensorPacket::new("XYZ", vec![15000.0, 1.0, 75.0]);
    assert!(matches!(
        read_packet(&packet).unwrap_err(),
        WorkoutError::UnknownCode(_)
    ));
}

#[test]
fn bad_arity_aborts_dispatch() {
    let packet = SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0]);
    assert!(matches!(
        read_packet(&packet).unwrap_err(),
        WorkoutError::ReadingCount {
            expected: 4,
            got: 3,
            ..
        }
    ));
}

#[test]
fn zero_duration_aborts_dispatch() {
    let packet = SensorPacket::new("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]);
    assert!(matches!(
        read_packet(&packet).unwrap_err(),
        WorkoutError::NonPositiveDuration { .. }
    ));
}

#[test]
fn packet_file_parses_into_batch() {
    let json = r#"[
        {"workout_type": "SWM", "readings": [720, 1, 80, 25, 40]},
        {"workout_type": "RUN", "readings": [15000, 1, 75]}
    ]"#;
    let packets: Vec<SensorPacket> = serde_json::from_str(json).unwrap();
    assert_eq!(packets.len(), 2);
    let workout = read_packet(&packets[1]).unwrap();
    assert_eq!(workout.label(), "Running");
    assert!((workout.distance_km() - 9.75).abs() < 1e-9);
}
