//! Kick trajectory model
//!
//! Pure functions from a locked kick to where the ball is along its flight.
//! The ball rises and falls on a parabola while drifting sideways: accuracy
//! error pushes it linearly in `t`, wind quadratically (the longer it hangs,
//! the more the wind compounds).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::Uprights;
use super::wind::Wind;
use crate::consts::*;
use crate::lerp;
use crate::tuning::Tuning;

/// Everything fixed at the moment of the kick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KickAttempt {
    /// Kick distance in yards, within [20, 60]
    pub distance_yards: f32,
    /// Locked power meter value
    pub power: f32,
    /// Locked accuracy meter value (0.5 is dead center)
    pub accuracy: f32,
    pub wind: Wind,
}

/// Where the ball leaves the ground from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchSpot {
    pub pos: Vec2,
    pub scale: f32,
}

/// Ball position and perspective scale at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallPose {
    pub pos: Vec2,
    pub scale: f32,
}

/// How a kick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KickOutcome {
    Good,
    Short,
    WideLeft,
    WideRight,
    /// Snap countdown ran out before the kick
    Blocked,
}

impl KickOutcome {
    pub fn is_good(self) -> bool {
        self == KickOutcome::Good
    }

    /// Result banner text
    pub fn message(self) -> &'static str {
        match self {
            KickOutcome::Good => "GOOD!",
            KickOutcome::Short => "NO GOOD! (Short)",
            KickOutcome::WideLeft => "NO GOOD! (Wide Left)",
            KickOutcome::WideRight => "NO GOOD! (Wide Right)",
            KickOutcome::Blocked => "BLOCKED!",
        }
    }

    /// Result banner color (CSS hex)
    pub fn color(self) -> &'static str {
        match self {
            KickOutcome::Good => "#4ade80",
            _ => "#ef4444",
        }
    }
}

/// Minimum power that still reaches the crossbar from `distance_yards`
pub fn min_power(distance_yards: f32, tuning: &Tuning) -> f32 {
    tuning.min_power_base + (distance_yards - MIN_DISTANCE_YARDS) * tuning.min_power_per_yard
}

/// Flight time in flight-clock units
pub fn flight_duration(attempt: &KickAttempt, tuning: &Tuning) -> f32 {
    (tuning.flight_base_duration + attempt.power * tuning.flight_power_duration)
        * tuning.distance_factor(attempt.distance_yards)
}

/// Normalized progress for `elapsed` flight-clock units; landed at >= 1
pub fn progress(elapsed: f32, attempt: &KickAttempt, tuning: &Tuning) -> f32 {
    elapsed / flight_duration(attempt, tuning)
}

/// Arc apex height above the straight launch-to-goal line (px)
pub fn arc_height(attempt: &KickAttempt, tuning: &Tuning) -> f32 {
    (tuning.arc_base_height + attempt.power * tuning.arc_power_height)
        * tuning.distance_factor(attempt.distance_yards)
}

/// Sideways drift at full accuracy error (px)
pub fn max_drift(distance_yards: f32, tuning: &Tuning) -> f32 {
    tuning.drift_base + (distance_yards - MIN_DISTANCE_YARDS) * tuning.drift_per_yard
}

/// Horizontal offset from the launch x at progress `t`
pub fn horizontal_drift(t: f32, attempt: &KickAttempt, tuning: &Tuning) -> f32 {
    let accuracy_deviation = (attempt.accuracy - 0.5) * 2.0;
    let accuracy_drift = accuracy_deviation * max_drift(attempt.distance_yards, tuning) * t;

    let wind_drift = attempt.wind.signed_speed()
        * t
        * t
        * (attempt.distance_yards / tuning.wind_reference_yards)
        * tuning.wind_multiplier;

    accuracy_drift + wind_drift
}

/// Ball pose at progress `t` (clamped to [0, 1])
pub fn position(t: f32, attempt: &KickAttempt, launch: &LaunchSpot, tuning: &Tuning) -> BallPose {
    let t = t.clamp(0.0, 1.0);

    let end_y = FIELD_HEIGHT * tuning.arc_end_height_frac;
    let lift = -arc_height(attempt, tuning) * 4.0 * t * (1.0 - t);
    let y = lerp(launch.pos.y, end_y, t) + lift;

    let x = launch.pos.x + horizontal_drift(t, attempt, tuning);

    BallPose {
        pos: Vec2::new(x, y),
        scale: lerp(launch.scale, tuning.ball_end_scale, t),
    }
}

/// Decide a landed kick from its final horizontal position
///
/// Short takes precedence over wide: a kick without enough power never
/// reaches the uprights.
pub fn judge(attempt: &KickAttempt, final_x: f32, tuning: &Tuning) -> KickOutcome {
    if attempt.power < min_power(attempt.distance_yards, tuning) {
        return KickOutcome::Short;
    }

    let uprights = Uprights::new(tuning);
    if final_x <= uprights.left {
        KickOutcome::WideLeft
    } else if final_x >= uprights.right {
        KickOutcome::WideRight
    } else {
        KickOutcome::Good
    }
}

/// Fly the whole kick and judge where it lands
pub fn resolve(
    attempt: &KickAttempt,
    launch: &LaunchSpot,
    tuning: &Tuning,
) -> (BallPose, KickOutcome) {
    let landed = position(1.0, attempt, launch, tuning);
    (landed, judge(attempt, landed.pos.x, tuning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::field::{KickDistance, field_center_x};
    use crate::sim::wind::WindDirection;

    fn attempt(distance_yards: f32, power: f32, accuracy: f32, wind: Wind) -> KickAttempt {
        KickAttempt {
            distance_yards,
            power,
            accuracy,
            wind,
        }
    }

    fn launch_from(distance: KickDistance) -> LaunchSpot {
        LaunchSpot {
            pos: distance.ball_spot(),
            scale: distance.perspective_scale(),
        }
    }

    #[test]
    fn test_flight_duration() {
        let tuning = Tuning::default();
        let kick = attempt(20.0, 0.5, 0.5, Wind::CALM);
        assert!((flight_duration(&kick, &tuning) - 1.0).abs() < 1e-6);

        let long = attempt(50.0, 1.0, 0.5, Wind::CALM);
        assert!((flight_duration(&long, &tuning) - 1.8).abs() < 1e-5);
    }

    #[test]
    fn test_min_power_curve() {
        let tuning = Tuning::default();
        assert!((min_power(20.0, &tuning) - 0.4).abs() < 1e-6);
        assert!((min_power(60.0, &tuning) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_straight_kick_lands_centered_and_good() {
        let tuning = Tuning::default();
        let kick = attempt(20.0, 0.8, 0.5, Wind::CALM);
        let launch = launch_from(KickDistance::Twenty);
        let (landed, outcome) = resolve(&kick, &launch, &tuning);
        assert_eq!(landed.pos.x, launch.pos.x);
        assert_eq!(landed.pos.x, field_center_x());
        assert_eq!(outcome, KickOutcome::Good);
    }

    #[test]
    fn test_endpoints() {
        let tuning = Tuning::default();
        let kick = attempt(40.0, 0.7, 0.9, Wind::CALM);
        let launch = launch_from(KickDistance::Forty);

        let start = position(0.0, &kick, &launch, &tuning);
        assert_eq!(start.pos, launch.pos);
        assert_eq!(start.scale, launch.scale);

        let end = position(1.0, &kick, &launch, &tuning);
        assert!((end.pos.y - FIELD_HEIGHT * 0.38).abs() < 1e-3);
        assert!((end.scale - BALL_END_SCALE).abs() < 1e-6);
    }

    #[test]
    fn test_apex_is_above_straight_line() {
        let tuning = Tuning::default();
        let kick = attempt(30.0, 0.6, 0.5, Wind::CALM);
        let launch = launch_from(KickDistance::Thirty);
        let mid = position(0.5, &kick, &launch, &tuning);
        let straight = lerp(launch.pos.y, FIELD_HEIGHT * 0.38, 0.5);
        assert!((straight - mid.pos.y - arc_height(&kick, &tuning)).abs() < 1e-3);
    }

    #[test]
    fn test_wind_grows_quadratically() {
        let tuning = Tuning::default();
        let wind = Wind {
            speed_mph: 10.0,
            direction: WindDirection::Right,
        };
        let kick = attempt(30.0, 0.8, 0.5, wind);
        let half = horizontal_drift(0.5, &kick, &tuning);
        let full = horizontal_drift(1.0, &kick, &tuning);
        assert!((full - 35.0).abs() < 1e-4);
        assert!((full / half - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_accuracy_drift_is_linear() {
        let tuning = Tuning::default();
        let kick = attempt(20.0, 0.8, 1.0, Wind::CALM);
        let half = horizontal_drift(0.5, &kick, &tuning);
        let full = horizontal_drift(1.0, &kick, &tuning);
        assert!((full - 80.0).abs() < 1e-4);
        assert!((full / half - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_wide_calls() {
        let tuning = Tuning::default();
        let launch = launch_from(KickDistance::Twenty);

        let hook = attempt(20.0, 0.8, 0.0, Wind::CALM);
        assert_eq!(resolve(&hook, &launch, &tuning).1, KickOutcome::WideLeft);

        let slice = attempt(20.0, 0.8, 1.0, Wind::CALM);
        assert_eq!(resolve(&slice, &launch, &tuning).1, KickOutcome::WideRight);
    }

    #[test]
    fn test_wind_can_push_wide() {
        let tuning = Tuning::default();
        let launch = launch_from(KickDistance::Fifty);
        let gale = Wind {
            speed_mph: 25.0,
            direction: WindDirection::Left,
        };
        let kick = attempt(50.0, 0.9, 0.5, gale);
        assert_eq!(resolve(&kick, &launch, &tuning).1, KickOutcome::WideLeft);
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(KickOutcome::Good.message(), "GOOD!");
        assert_eq!(KickOutcome::Blocked.message(), "BLOCKED!");
        assert_eq!(KickOutcome::Good.color(), "#4ade80");
        assert_eq!(KickOutcome::Short.color(), "#ef4444");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn min_power_never_decreases(a in 20.0f32..=60.0, b in 20.0f32..=60.0) {
                let tuning = Tuning::default();
                let (near, far) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(min_power(near, &tuning) <= min_power(far, &tuning));
            }

            #[test]
            fn underpowered_kick_is_short(accuracy in 0.0f32..=1.0, speed in 0.0f32..25.0) {
                let tuning = Tuning::default();
                let wind = Wind { speed_mph: speed, direction: WindDirection::Right };
                let kick = attempt(20.0, 0.3, accuracy, wind);
                let launch = launch_from(KickDistance::Twenty);
                prop_assert_eq!(resolve(&kick, &launch, &tuning).1, KickOutcome::Short);
            }

            #[test]
            fn scale_shrinks_monotonically(t1 in 0.0f32..=1.0, t2 in 0.0f32..=1.0) {
                let tuning = Tuning::default();
                let kick = attempt(60.0, 0.7, 0.5, Wind::CALM);
                let launch = launch_from(KickDistance::Sixty);
                let (early, late) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
                let a = position(early, &kick, &launch, &tuning);
                let b = position(late, &kick, &launch, &tuning);
                prop_assert!(b.scale <= a.scale + 1e-6);
            }
        }
    }
}
