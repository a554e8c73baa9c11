//! Swimming workout calculator.

use super::{M_PER_KM, Session, Workout};

/// Calculator for pool swimming sessions.
///
/// Mean speed comes from the pool geometry (length times laps) rather than
/// the stroke count; distance still follows the stroke count.
#[derive(Debug, Clone)]
pub struct Swimming {
    session: Session,
    pool_length_m: f64,
    pool_laps: f64,
}

impl Swimming {
    /// Stroke length in meters.
    const STRIDE_M: f64 = 1.38;
    /// Shift added to mean speed in the calorie formula.
    const SPEED_SHIFT: f64 = 1.1;
    /// Weight multiplier in the calorie formula.
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(session: Session, pool_length_m: f64, pool_laps: f64) -> Self {
        Self {
            session,
            pool_length_m,
            pool_laps,
        }
    }
}

impl Workout for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn stride_m(&self) -> f64 {
        Self::STRIDE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps / M_PER_KM / self.session.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * (Self::WEIGHT_MULTIPLIER * self.session.weight_kg * self.session.duration_h)
    }
}
