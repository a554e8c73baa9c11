//! Running workout calculator.

use super::{M_PER_KM, MIN_PER_H, Session, Workout};

/// Calculator for running sessions.
///
/// Calorie cost is linear in mean speed, scaled by body weight and charged
/// per minute of running.
#[derive(Debug, Clone)]
pub struct Running {
    session: Session,
}

impl Running {
    /// Step length in meters.
    const STRIDE_M: f64 = 0.65;
    /// Factor applied to mean speed in the calorie formula.
    const SPEED_MULTIPLIER: f64 = 18.0;
    /// Shift added to the scaled mean speed.
    const SPEED_SHIFT: f64 = 1.79;

    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Workout for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn stride_m(&self) -> f64 {
        Self::STRIDE_M
    }

    fn spent_calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * self.session.weight_kg
            / M_PER_KM
            * (self.session.duration_h * MIN_PER_H)
    }
}
