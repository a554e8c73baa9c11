//! Workout calculators.
//!
//! Every workout kind shares the same session record and the same
//! distance/speed arithmetic; the calorie formula is supplied per kind.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::Walking;

use crate::models::WorkoutSummary;

/// Meters per kilometer.
pub const M_PER_KM: f64 = 1000.0;
/// Minutes per hour.
pub const MIN_PER_H: f64 = 60.0;
/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;

/// Raw sensor readings shared by every workout kind.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    /// Step or stroke count reported by the sensor.
    pub action_count: f64,
    /// Session length in hours. The dispatcher guarantees this is positive.
    pub duration_h: f64,
    /// Athlete body weight in kilograms.
    pub weight_kg: f64,
}

impl Session {
    pub const fn new(action_count: f64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_h,
            weight_kg,
        }
    }
}

/// Trait for workout metric calculators.
///
/// Implementations provide:
/// - The session record and a step/stroke length, from which distance and
///   mean speed follow by default
/// - Their own calorie formula (no default — every kind must supply one)
pub trait Workout: std::fmt::Debug {
    /// Label shown in rendered summaries.
    fn label(&self) -> &'static str;

    /// The shared session record.
    fn session(&self) -> &Session;

    /// Step or stroke length in meters.
    fn stride_m(&self) -> f64;

    /// Covered distance in kilometers.
    fn distance_km(&self) -> f64 {
        self.session().action_count * self.stride_m() / M_PER_KM
    }

    /// Mean speed over the session in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_h
    }

    /// Energy spent over the session in kcal.
    fn spent_calories(&self) -> f64;

    /// Snapshot of the computed metrics for rendering.
    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            workout_type: self.label(),
            duration_h: self.session().duration_h,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}
