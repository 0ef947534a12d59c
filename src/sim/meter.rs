//! Timing meters
//!
//! A meter sweeps a marker back and forth across [0, 1]. The player stops it
//! to lock in a value: power (how far the kick carries) or accuracy (how
//! close to dead center it flies).

use serde::{Deserialize, Serialize};

/// Which quantity a meter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeterKind {
    Power,
    Accuracy,
}

impl MeterKind {
    /// Marker position when the meter starts or resets
    pub fn initial_value(self) -> f32 {
        match self {
            MeterKind::Power => 0.0,
            MeterKind::Accuracy => 0.5,
        }
    }
}

/// Descriptive grade of a locked value (presentation only, no scoring effect)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeterQuality {
    Perfect,
    Good,
    /// Power below the good band
    Weak,
    /// Accuracy far off center
    Bad,
}

impl MeterQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeterQuality::Perfect => "perfect",
            MeterQuality::Good => "good",
            MeterQuality::Weak => "weak",
            MeterQuality::Bad => "bad",
        }
    }
}

/// An oscillating meter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meter {
    pub kind: MeterKind,
    /// Current marker position in [0, 1]
    pub value: f32,
    /// +1 rising, -1 falling
    pub direction: f32,
    /// Marker travel per tick
    pub speed: f32,
    /// Value frozen by the last `stop`
    pub locked: Option<f32>,
    pub active: bool,
}

impl Meter {
    pub fn new(kind: MeterKind) -> Self {
        Self {
            kind,
            value: kind.initial_value(),
            direction: 1.0,
            speed: 0.02,
            locked: None,
            active: false,
        }
    }

    /// Begin sweeping from the kind's initial value
    pub fn start(&mut self, speed: f32) {
        self.active = true;
        self.locked = None;
        self.value = self.kind.initial_value();
        self.direction = 1.0;
        self.speed = speed;
    }

    /// Freeze the marker and return the locked value
    pub fn stop(&mut self) -> f32 {
        self.locked = Some(self.value);
        self.active = false;
        self.value
    }

    pub fn reset(&mut self) {
        self.value = self.kind.initial_value();
        self.locked = None;
        self.active = false;
    }

    /// Advance one tick, bouncing off both ends
    pub fn update(&mut self) {
        if !self.active {
            return;
        }

        self.value += self.direction * self.speed;

        if self.value >= 1.0 {
            self.value = 1.0;
            self.direction = -1.0;
        } else if self.value <= 0.0 {
            self.value = 0.0;
            self.direction = 1.0;
        }
    }

    /// Value to draw: the locked value if stopped, else the live marker
    pub fn display_value(&self) -> f32 {
        self.locked.unwrap_or(self.value)
    }

    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    /// Grade the locked value, `None` until the meter has been stopped
    pub fn quality(&self) -> Option<MeterQuality> {
        let locked = self.locked?;
        let quality = match self.kind {
            MeterKind::Power => {
                if locked >= 0.7 {
                    MeterQuality::Perfect
                } else if locked >= 0.3 {
                    MeterQuality::Good
                } else {
                    MeterQuality::Weak
                }
            }
            MeterKind::Accuracy => {
                let deviation = (locked - 0.5).abs();
                if deviation <= 0.15 {
                    MeterQuality::Perfect
                } else if deviation <= 0.35 {
                    MeterQuality::Good
                } else {
                    MeterQuality::Bad
                }
            }
        };
        Some(quality)
    }
}
