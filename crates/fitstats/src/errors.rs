use thiserror::Error;

/// Errors raised while dispatching sensor packets.
///
/// Every variant carries the workout code so the failing packet can be
/// identified in a batch. All of them abort the run.
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("Unknown workout code {0:?} (expected one of SWM, RUN, WLK)")]
    UnknownCode(String),

    #[error("Workout {code:?} expects {expected} readings, got {got}")]
    ReadingCount {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("Workout {code:?} has non-positive duration {duration_h} h")]
    NonPositiveDuration { code: String, duration_h: f64 },
}
