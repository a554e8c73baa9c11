//! Workout statistics from sensor packets.
//!
//! Computes distance, mean speed, and calories burned for running, walking,
//! and swimming sessions, and renders one fixed-format summary per packet.

pub mod errors;
pub mod models;
pub mod packets;
pub mod workouts;
