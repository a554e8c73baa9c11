use std::fmt;

use serde::{Deserialize, Serialize};

/// One sensor packet: a short workout code plus positional readings.
///
/// Readings are untyped numbers in the order the firmware emits them;
/// their meaning depends on the workout code (see `packets::read_packet`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorPacket {
    pub workout_type: String,
    pub readings: Vec<f64>,
}

impl SensorPacket {
    pub fn new(workout_type: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            readings,
        }
    }
}

/// Immutable snapshot of one workout's computed metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub workout_type: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_type,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
