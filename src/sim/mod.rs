//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod autokick;
pub mod field;
pub mod meter;
pub mod state;
pub mod tick;
pub mod trajectory;
pub mod wind;

pub use autokick::AutoKicker;
pub use field::{KickDistance, Uprights, field_center_x};
pub use meter::{Meter, MeterKind, MeterQuality};
pub use state::{
    Ball, GameEvent, GamePhase, GameState, KickResult, MeterView, Rejection, Snapshot, Stats,
};
pub use tick::{TickInput, advance, select_distance, select_wind, tick};
pub use trajectory::{BallPose, KickAttempt, KickOutcome, LaunchSpot, min_power};
pub use wind::{Wind, WindDirection, WindMode};
