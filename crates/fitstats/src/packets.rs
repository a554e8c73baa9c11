//! Sensor packet dispatch.
//!
//! Maps short workout codes to the matching calculator, assigning raw
//! readings positionally in the order the firmware emits them.

use crate::errors::WorkoutError;
use crate::models::SensorPacket;
use crate::workouts::{Running, Session, Swimming, Walking, Workout};

/// Builds the matching workout calculator for a sensor packet.
///
/// Readings are positional: `[action_count, duration_h, weight_kg]`, plus
/// `[height_cm]` for walking or `[pool_length_m, pool_laps]` for swimming.
/// The reading count and the positive-duration invariant are checked here;
/// numeric ranges are not.
pub fn read_packet(packet: &SensorPacket) -> Result<Box<dyn Workout>, WorkoutError> {
    let workout: Box<dyn Workout> = match packet.workout_type.as_str() {
        "SWM" => match packet.readings[..] {
            [action, duration, weight, pool_length, pool_laps] => Box::new(Swimming::new(
                session(packet, action, duration, weight)?,
                pool_length,
                pool_laps,
            )),
            _ => return Err(reading_count(packet, 5)),
        },
        "RUN" => match packet.readings[..] {
            [action, duration, weight] => {
                Box::new(Running::new(session(packet, action, duration, weight)?))
            }
            _ => return Err(reading_count(packet, 3)),
        },
        "WLK" => match packet.readings[..] {
            [action, duration, weight, height] => Box::new(Walking::new(
                session(packet, action, duration, weight)?,
                height,
            )),
            _ => return Err(reading_count(packet, 4)),
        },
        other => return Err(WorkoutError::UnknownCode(other.to_string())),
    };

    Ok(workout)
}

fn session(
    packet: &SensorPacket,
    action_count: f64,
    duration_h: f64,
    weight_kg: f64,
) -> Result<Session, WorkoutError> {
    if duration_h <= 0.0 {
        return Err(WorkoutError::NonPositiveDuration {
            code: packet.workout_type.clone(),
            duration_h,
        });
    }
    Ok(Session::new(action_count, duration_h, weight_kg))
}

fn reading_count(packet: &SensorPacket, expected: usize) -> WorkoutError {
    WorkoutError::ReadingCount {
        code: packet.workout_type.clone(),
        expected,
        got: packet.readings.len(),
    }
}
