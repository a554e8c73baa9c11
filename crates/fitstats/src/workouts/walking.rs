//! Sports walking workout calculator.

use super::{CM_PER_M, MIN_PER_H, Session, Workout};

/// Calculator for sports walking sessions.
///
/// Calorie cost combines a weight-proportional base burn with a dynamic
/// term that grows with the square of speed (in m/s) and shrinks with the
/// athlete's height.
#[derive(Debug, Clone)]
pub struct Walking {
    session: Session,
    height_cm: f64,
}

impl Walking {
    /// Step length in meters, same as running.
    const STRIDE_M: f64 = 0.65;
    /// Weight factor for the base burn.
    const WEIGHT_FACTOR: f64 = 0.035;
    /// Weight factor for the speed-dependent burn.
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;
    /// km/h to m/s conversion factor.
    const KMH_TO_MS: f64 = 0.278;

    pub fn new(session: Session, height_cm: f64) -> Self {
        Self { session, height_cm }
    }
}

impl Workout for Walking {
    fn label(&self) -> &'static str {
        "Walking"
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn stride_m(&self) -> f64 {
        Self::STRIDE_M
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * Self::KMH_TO_MS;
        let height_m = self.height_cm / CM_PER_M;
        (Self::WEIGHT_FACTOR * self.session.weight_kg
            + speed_ms.powi(2) / height_m * Self::SPEED_HEIGHT_FACTOR * self.session.weight_kg)
            * (self.session.duration_h * MIN_PER_H)
    }
}
