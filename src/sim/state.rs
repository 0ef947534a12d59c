//! Game state and core simulation types
//!
//! A `GameState` is one kicking session. It owns both meters, the ball and
//! the in-flight attempt, and only changes through the functions in
//! [`super::tick`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::KickDistance;
use super::meter::{Meter, MeterKind, MeterQuality};
use super::trajectory::{KickAttempt, KickOutcome, LaunchSpot};
use super::wind::{Wind, WindMode};
use crate::consts::MIN_DISTANCE_YARDS;
use crate::tuning::Tuning;

/// Current phase of a kick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to begin
    Ready,
    /// Power meter sweeping
    Power,
    /// Accuracy meter sweeping, snap countdown running
    Accuracy,
    /// Ball in flight
    Kicking,
    /// Showing the outcome
    Result,
}

impl GamePhase {
    /// Prompt shown under the field, empty when no input is expected
    pub fn instructions(self) -> &'static str {
        match self {
            GamePhase::Ready => "Press SPACE or click to start",
            GamePhase::Power => "Press SPACE or click to set POWER",
            GamePhase::Accuracy => "Press SPACE or click to set ACCURACY",
            GamePhase::Kicking | GamePhase::Result => "",
        }
    }

    /// Whether a distance or wind change is allowed right now
    pub fn accepts_selection(self) -> bool {
        self != GamePhase::Kicking
    }
}

/// Session scoreboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub score: u32,
    pub streak: u32,
    pub makes: u32,
    pub attempts: u32,
}

impl Stats {
    /// Made kicks as a percentage of attempts
    pub fn make_percentage(&self) -> f32 {
        if self.attempts == 0 {
            0.0
        } else {
            self.makes as f32 * 100.0 / self.attempts as f32
        }
    }
}

/// The football
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub scale: f32,
    /// Spin angle (radians)
    pub rotation: f32,
    /// Elapsed flight-clock units since the kick
    pub flight_time: f32,
    pub in_flight: bool,
}

impl Ball {
    pub fn resting(distance: KickDistance) -> Self {
        Self {
            pos: distance.ball_spot(),
            scale: distance.perspective_scale(),
            rotation: 0.0,
            flight_time: 0.0,
            in_flight: false,
        }
    }

    /// Move back to the resting spot without touching spin or flight
    pub fn place(&mut self, distance: KickDistance) {
        self.pos = distance.ball_spot();
        self.scale = distance.perspective_scale();
    }
}

/// Outcome of the last resolved kick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KickResult {
    pub outcome: KickOutcome,
    pub points: u32,
}

/// Why a selection was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Ball is in the air
    KickInFlight,
}

/// Effects of a transition, for presentation and audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ready -> Power
    PowerStarted,
    /// Power -> Accuracy
    PowerLocked { power: f32, quality: Option<MeterQuality> },
    /// Accuracy -> Kicking
    KickLaunched { attempt: KickAttempt },
    /// Kicking -> Result
    KickResolved { result: KickResult },
    /// Accuracy -> Result when the snap countdown runs out
    KickBlocked,
    /// Result -> Ready, or a mid-sequence reset
    ReadyForNextKick,
    DistanceChanged { distance: KickDistance, reset: bool },
    WindChanged { mode: WindMode, wind: Wind },
    SelectionRejected { reason: Rejection },
}

/// Complete session state (deterministic given seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub distance: KickDistance,
    pub wind_mode: WindMode,
    /// Wind shown on the HUD; rerolled for every kick
    pub wind: Wind,
    pub power_meter: Meter,
    pub accuracy_meter: Meter,
    pub ball: Ball,
    /// Where the in-flight kick left from
    pub launch: Option<LaunchSpot>,
    /// Locked kick, present from launch until the next reset
    pub attempt: Option<KickAttempt>,
    /// Seconds left before the kick is blocked
    pub snap_remaining: f32,
    /// 0-1, how far the defense has rushed
    pub rush_progress: f32,
    pub result: Option<KickResult>,
    /// Seconds left on the result banner
    pub result_remaining: f32,
    pub stats: Stats,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let distance = KickDistance::default();
        Self {
            seed,
            phase: GamePhase::Ready,
            distance,
            wind_mode: WindMode::None,
            wind: Wind::CALM,
            power_meter: Meter::new(MeterKind::Power),
            accuracy_meter: Meter::new(MeterKind::Accuracy),
            ball: Ball::resting(distance),
            launch: None,
            attempt: None,
            snap_remaining: 0.0,
            rush_progress: 0.0,
            result: None,
            result_remaining: 0.0,
            stats: Stats::default(),
            time_ticks: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Meter speed for the current distance (units/tick)
    pub fn meter_speed(&self, kind: MeterKind) -> f32 {
        let extra_yards = self.distance.yards() as f32 - MIN_DISTANCE_YARDS;
        let ramp = 1.0 + extra_yards / self.tuning.meter_speed_ramp_yards;
        let speed = self.tuning.meter_base_speed * ramp;
        match kind {
            MeterKind::Power => speed * self.tuning.power_meter_speed_mult,
            MeterKind::Accuracy => speed * self.tuning.accuracy_meter_speed_mult,
        }
    }

    /// Whether the last result was a block (drives the rush animation)
    pub fn is_blocked(&self) -> bool {
        matches!(
            self.result,
            Some(KickResult {
                outcome: KickOutcome::Blocked,
                ..
            })
        )
    }

    /// Clear the attempt and return to Ready
    pub fn reset_for_next_kick(&mut self) {
        self.phase = GamePhase::Ready;
        self.power_meter.reset();
        self.accuracy_meter.reset();
        self.ball = Ball::resting(self.distance);
        self.launch = None;
        self.attempt = None;
        self.result = None;
        self.result_remaining = 0.0;
        self.snap_remaining = 0.0;
        self.rush_progress = 0.0;
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        let (message, color) = match self.result {
            Some(result) => (result.outcome.message(), result.outcome.color()),
            None => ("", ""),
        };
        let show_rush = self.phase == GamePhase::Accuracy || self.is_blocked();
        Snapshot {
            phase: self.phase,
            instructions: self.phase.instructions(),
            power: MeterView::from(&self.power_meter),
            accuracy: MeterView::from(&self.accuracy_meter),
            ball_pos: self.ball.pos,
            ball_scale: self.ball.scale,
            ball_rotation: self.ball.rotation,
            rush_progress: if show_rush { self.rush_progress } else { 0.0 },
            snap_fraction: self.snap_remaining / self.tuning.snap_time_secs,
            blocked: self.is_blocked(),
            distance_yards: self.distance.yards(),
            player_scale: self.distance.perspective_scale(),
            line_of_scrimmage_y: self.distance.line_of_scrimmage_y(),
            wind: self.wind.label(),
            stats: self.stats,
            message,
            color,
        }
    }
}

/// Meter as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeterView {
    pub value: f32,
    pub locked: bool,
    pub active: bool,
}

impl From<&Meter> for MeterView {
    fn from(meter: &Meter) -> Self {
        Self {
            value: meter.display_value(),
            locked: meter.is_locked(),
            active: meter.active,
        }
    }
}

/// One frame of renderable state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub instructions: &'static str,
    pub power: MeterView,
    pub accuracy: MeterView,
    pub ball_pos: Vec2,
    pub ball_scale: f32,
    pub ball_rotation: f32,
    pub rush_progress: f32,
    /// Remaining snap time as a fraction of the limit
    pub snap_fraction: f32,
    pub blocked: bool,
    pub distance_yards: u32,
    pub player_scale: f32,
    pub line_of_scrimmage_y: f32,
    pub wind: String,
    pub stats: Stats,
    pub message: &'static str,
    pub color: &'static str,
}
