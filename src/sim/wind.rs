//! Crosswind
//!
//! The player picks a wind mode; each kick rolls a concrete speed and
//! direction from it. Rolling is generic over the RNG so tests and replays
//! can pin the outcome.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Wind strength setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindMode {
    #[default]
    None,
    Light,
    Heavy,
}

impl WindMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindMode::None => "None",
            WindMode::Light => "Light",
            WindMode::Heavy => "Heavy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "calm" | "off" => Some(WindMode::None),
            "light" => Some(WindMode::Light),
            "heavy" => Some(WindMode::Heavy),
            _ => None,
        }
    }

    /// Speed range in mph, `None` for calm
    pub fn speed_range(self, tuning: &Tuning) -> Option<(f32, f32)> {
        match self {
            WindMode::None => None,
            WindMode::Light => Some(tuning.light_wind_mph),
            WindMode::Heavy => Some(tuning.heavy_wind_mph),
        }
    }

    /// Roll a concrete wind for this mode
    pub fn roll<R: Rng>(self, rng: &mut R, tuning: &Tuning) -> Wind {
        let Some((min, max)) = self.speed_range(tuning) else {
            return Wind::CALM;
        };
        let speed_mph = min + rng.random::<f32>() * (max - min);
        let direction = if rng.random_bool(0.5) {
            WindDirection::Left
        } else {
            WindDirection::Right
        };
        Wind {
            speed_mph,
            direction,
        }
    }
}

/// Which way the wind pushes the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    Left,
    Calm,
    Right,
}

impl WindDirection {
    /// -1, 0 or +1 along the screen x axis
    pub fn sign(self) -> f32 {
        match self {
            WindDirection::Left => -1.0,
            WindDirection::Calm => 0.0,
            WindDirection::Right => 1.0,
        }
    }
}

/// A concrete wind reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed_mph: f32,
    pub direction: WindDirection,
}

impl Default for Wind {
    fn default() -> Self {
        Self::CALM
    }
}

impl Wind {
    pub const CALM: Wind = Wind {
        speed_mph: 0.0,
        direction: WindDirection::Calm,
    };

    /// Signed speed (negative pushes left)
    pub fn signed_speed(&self) -> f32 {
        self.speed_mph * self.direction.sign()
    }

    /// HUD label, e.g. "12 mph →"
    pub fn label(&self) -> String {
        match self.direction {
            WindDirection::Calm => "No Wind".to_string(),
            WindDirection::Left => format!("{} mph ←", self.speed_mph.round() as i32),
            WindDirection::Right => format!("{} mph →", self.speed_mph.round() as i32),
        }
    }
}
