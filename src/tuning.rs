//! Data-driven game balance
//!
//! Every number that shapes the difficulty curve lives here. Defaults come
//! from [`crate::consts`]; a JSON file can override any subset of fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming a JSON tuning file (native only)
pub const TUNING_ENV_VAR: &str = "FIELD_GOAL_TUNING";

/// Why a tuning document was refused
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// A field that must be strictly positive was not
    NonPositive(&'static str),
    /// A wind range whose upper bound is below its lower bound
    InvalidRange(&'static str),
    /// A fraction that must lie in [0, 1]
    OutOfUnitRange(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "invalid tuning json: {e}"),
            Self::NonPositive(field) => write!(f, "tuning field `{field}` must be > 0"),
            Self::InvalidRange(field) => write!(f, "tuning range `{field}` has max < min"),
            Self::OutOfUnitRange(field) => {
                write!(f, "tuning field `{field}` must be within [0, 1]")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Balance knobs for meters, timers, flight and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Meter speed at 20 yards (units/tick).
    pub meter_base_speed: f32,
    /// Yards over which meter speed doubles.
    pub meter_speed_ramp_yards: f32,
    /// Power meter speed multiplier.
    pub power_meter_speed_mult: f32,
    /// Accuracy meter speed multiplier.
    pub accuracy_meter_speed_mult: f32,
    /// Snap countdown (seconds).
    pub snap_time_secs: f32,
    /// Result display for made/missed kicks (seconds).
    pub result_display_secs: f32,
    /// Result display for blocked kicks (seconds).
    pub blocked_display_secs: f32,
    /// Flight clock units per second.
    pub flight_clock_rate: f32,
    pub flight_base_duration: f32,
    pub flight_power_duration: f32,
    /// Yards over which flight time and arc height double.
    pub distance_factor_ramp_yards: f32,
    pub arc_base_height: f32,
    pub arc_power_height: f32,
    pub arc_end_height_frac: f32,
    pub drift_base: f32,
    pub drift_per_yard: f32,
    pub wind_multiplier: f32,
    pub wind_reference_yards: f32,
    pub min_power_base: f32,
    pub min_power_per_yard: f32,
    pub upright_half_width: f32,
    pub ball_end_scale: f32,
    pub ball_spin_rate: f32,
    /// Light wind range (mph).
    pub light_wind_mph: (f32, f32),
    /// Heavy wind range (mph).
    pub heavy_wind_mph: (f32, f32),
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            meter_base_speed: METER_BASE_SPEED,
            meter_speed_ramp_yards: METER_SPEED_RAMP_YARDS,
            power_meter_speed_mult: POWER_METER_SPEED_MULT,
            accuracy_meter_speed_mult: ACCURACY_METER_SPEED_MULT,
            snap_time_secs: SNAP_TIME_SECS,
            result_display_secs: RESULT_DISPLAY_SECS,
            blocked_display_secs: BLOCKED_DISPLAY_SECS,
            flight_clock_rate: FLIGHT_CLOCK_RATE,
            flight_base_duration: FLIGHT_BASE_DURATION,
            flight_power_duration: FLIGHT_POWER_DURATION,
            distance_factor_ramp_yards: DISTANCE_FACTOR_RAMP_YARDS,
            arc_base_height: ARC_BASE_HEIGHT,
            arc_power_height: ARC_POWER_HEIGHT,
            arc_end_height_frac: ARC_END_HEIGHT_FRAC,
            drift_base: DRIFT_BASE,
            drift_per_yard: DRIFT_PER_YARD,
            wind_multiplier: WIND_MULTIPLIER,
            wind_reference_yards: WIND_REFERENCE_YARDS,
            min_power_base: MIN_POWER_BASE,
            min_power_per_yard: MIN_POWER_PER_YARD,
            upright_half_width: UPRIGHT_HALF_WIDTH,
            ball_end_scale: BALL_END_SCALE,
            ball_spin_rate: BALL_SPIN_RATE,
            light_wind_mph: LIGHT_WIND_MPH,
            heavy_wind_mph: HEAVY_WIND_MPH,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would stall meters or divide by zero.
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("meter_base_speed", self.meter_base_speed),
            ("meter_speed_ramp_yards", self.meter_speed_ramp_yards),
            ("power_meter_speed_mult", self.power_meter_speed_mult),
            ("accuracy_meter_speed_mult", self.accuracy_meter_speed_mult),
            ("snap_time_secs", self.snap_time_secs),
            ("result_display_secs", self.result_display_secs),
            ("blocked_display_secs", self.blocked_display_secs),
            ("flight_clock_rate", self.flight_clock_rate),
            ("flight_base_duration", self.flight_base_duration),
            ("distance_factor_ramp_yards", self.distance_factor_ramp_yards),
            ("wind_reference_yards", self.wind_reference_yards),
            ("upright_half_width", self.upright_half_width),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NonPositive(name));
            }
        }
        // Distance only lengthens a flight, so check the shortest power extreme
        let shortest_flight = self.flight_base_duration + self.flight_power_duration.min(0.0);
        if self.flight_power_duration.is_nan() || shortest_flight <= 0.0 {
            return Err(TuningError::NonPositive("flight_duration"));
        }
        let fractions = [
            ("arc_end_height_frac", self.arc_end_height_frac),
            ("ball_end_scale", self.ball_end_scale),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(TuningError::OutOfUnitRange(name));
            }
        }
        if self.light_wind_mph.1 < self.light_wind_mph.0 {
            return Err(TuningError::InvalidRange("light_wind_mph"));
        }
        if self.heavy_wind_mph.1 < self.heavy_wind_mph.0 {
            return Err(TuningError::InvalidRange("heavy_wind_mph"));
        }
        Ok(())
    }

    /// Load tuning from the file named by `FIELD_GOAL_TUNING`, falling back to defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(TUNING_ENV_VAR) else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning file {path}: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {path}: {e}");
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }

    /// Growth factor applied to flight time and arc height for a distance.
    #[inline]
    pub fn distance_factor(&self, distance_yards: f32) -> f32 {
        1.0 + (distance_yards - MIN_DISTANCE_YARDS) / self.distance_factor_ramp_yards
    }
}
