//! Field Goal - a single-screen kicking minigame
//!
//! Core modules:
//! - `sim`: Deterministic simulation (meters, kick arc, state machine)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences
//! - `announcer`: Spoken cues triggered by kick transitions
//! - `web`: wasm-bindgen handle for a browser renderer (wasm32 only)

pub mod announcer;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use announcer::{Announcer, Cue};
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// Positions are in reference canvas pixels (800x600, y grows downward).
/// Meter speeds are in meter units per simulation tick.
pub mod consts {
    /// Fixed simulation timestep (60 Hz, meters advance once per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Reference field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Kick distances (yards)
    pub const MIN_DISTANCE_YARDS: f32 = 20.0;
    pub const MAX_DISTANCE_YARDS: f32 = 60.0;

    /// Meter speed at 20 yards, before per-meter multipliers
    pub const METER_BASE_SPEED: f32 = 0.025;
    /// Yards over which meter speed grows by another 100%
    pub const METER_SPEED_RAMP_YARDS: f32 = 50.0;
    /// Power meter runs 10% slower than base
    pub const POWER_METER_SPEED_MULT: f32 = 0.9;
    /// Accuracy meter runs at roughly half of base
    pub const ACCURACY_METER_SPEED_MULT: f32 = 0.54;

    /// Seconds to stop the accuracy meter before the kick is blocked
    pub const SNAP_TIME_SECS: f32 = 1.5;
    /// Seconds a made/missed result stays on screen
    pub const RESULT_DISPLAY_SECS: f32 = 2.0;
    /// Seconds a blocked result stays on screen
    pub const BLOCKED_DISPLAY_SECS: f32 = 2.5;

    /// Flight clock units per simulated second
    pub const FLIGHT_CLOCK_RATE: f32 = 2.0;
    /// Flight duration (clock units) at zero power, 20 yards
    pub const FLIGHT_BASE_DURATION: f32 = 0.8;
    /// Extra flight duration (clock units) at full power
    pub const FLIGHT_POWER_DURATION: f32 = 0.4;
    /// Yards over which flight time and arc height grow by another 100%
    pub const DISTANCE_FACTOR_RAMP_YARDS: f32 = 60.0;

    /// Arc apex height (px) at zero power, 20 yards
    pub const ARC_BASE_HEIGHT: f32 = 150.0;
    /// Extra apex height (px) at full power
    pub const ARC_POWER_HEIGHT: f32 = 100.0;
    /// Landing height as a fraction of field height (near the crossbar)
    pub const ARC_END_HEIGHT_FRAC: f32 = 0.38;

    /// Horizontal drift (px) of a fully missed accuracy at 20 yards
    pub const DRIFT_BASE: f32 = 80.0;
    /// Extra drift (px) per yard beyond 20
    pub const DRIFT_PER_YARD: f32 = 1.5;
    /// Wind push (px per mph) at 30 yards, applied quadratically in t
    pub const WIND_MULTIPLIER: f32 = 3.5;
    /// Yards at which the wind term has unit distance weight
    pub const WIND_REFERENCE_YARDS: f32 = 30.0;

    /// Minimum power to reach the crossbar at 20 yards
    pub const MIN_POWER_BASE: f32 = 0.4;
    /// Extra power needed per yard beyond 20
    pub const MIN_POWER_PER_YARD: f32 = 0.005;

    /// Half the gap between the uprights (px)
    pub const UPRIGHT_HALF_WIDTH: f32 = 60.0;

    /// Ball scale when it reaches the goal
    pub const BALL_END_SCALE: f32 = 0.35;
    /// Ball spin while in flight (radians per second)
    pub const BALL_SPIN_RATE: f32 = 10.0;

    /// Light wind range (mph)
    pub const LIGHT_WIND_MPH: (f32, f32) = (5.0, 12.0);
    /// Heavy wind range (mph)
    pub const HEAVY_WIND_MPH: (f32, f32) = (15.0, 25.0);
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
