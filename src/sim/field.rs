//! Field geometry
//!
//! Where the ball rests for each kick distance, how large things look from
//! there, and where the uprights stand. All positions are in reference
//! canvas pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;
use crate::tuning::Tuning;

/// Selectable kick distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KickDistance {
    #[default]
    Twenty,
    Thirty,
    Forty,
    Fifty,
    Sixty,
}

impl KickDistance {
    pub const ALL: [KickDistance; 5] = [
        KickDistance::Twenty,
        KickDistance::Thirty,
        KickDistance::Forty,
        KickDistance::Fifty,
        KickDistance::Sixty,
    ];

    pub fn yards(self) -> u32 {
        match self {
            KickDistance::Twenty => 20,
            KickDistance::Thirty => 30,
            KickDistance::Forty => 40,
            KickDistance::Fifty => 50,
            KickDistance::Sixty => 60,
        }
    }

    pub fn from_yards(yards: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.yards() == yards)
    }

    /// Number-row shortcut: 1 = 20 yards ... 5 = 60 yards
    pub fn from_digit(digit: u32) -> Option<Self> {
        let index = digit.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    /// Points for a made kick from here
    pub fn points(self) -> u32 {
        self.yards() / 10
    }

    /// 0.0 at 20 yards, 1.0 at 60 yards
    fn ratio(self) -> f32 {
        (self.yards() as f32 - MIN_DISTANCE_YARDS) / (MAX_DISTANCE_YARDS - MIN_DISTANCE_YARDS)
    }

    /// Screen y of the line of scrimmage (further back = lower on screen)
    pub fn line_of_scrimmage_y(self) -> f32 {
        const NEAR_Y: f32 = 380.0;
        const FAR_Y: f32 = 540.0;
        lerp(NEAR_Y, FAR_Y, self.ratio())
    }

    /// Perspective scale for players and the resting ball
    pub fn perspective_scale(self) -> f32 {
        const NEAR_SCALE: f32 = 1.0;
        const FAR_SCALE: f32 = 0.6;
        lerp(NEAR_SCALE, FAR_SCALE, self.ratio())
    }

    /// Kicker stands behind the line
    pub fn kicker_y(self) -> f32 {
        self.line_of_scrimmage_y() + 70.0 * self.perspective_scale()
    }

    /// Ball sits at the kicker's feet
    pub fn ball_y(self) -> f32 {
        self.kicker_y() - 5.0 * self.perspective_scale()
    }

    /// Resting ball position before the kick
    pub fn ball_spot(self) -> Vec2 {
        Vec2::new(field_center_x(), self.ball_y())
    }
}

/// Horizontal center of the field and the goal
#[inline]
pub fn field_center_x() -> f32 {
    FIELD_WIDTH / 2.0
}

/// Horizontal window a kick must land strictly inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uprights {
    pub left: f32,
    pub right: f32,
}

impl Uprights {
    pub fn new(tuning: &Tuning) -> Self {
        let center = field_center_x();
        Self {
            left: center - tuning.upright_half_width,
            right: center + tuning.upright_half_width,
        }
    }

    pub fn contains(&self, x: f32) -> bool {
        x > self.left && x < self.right
    }
}
