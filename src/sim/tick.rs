//! Fixed timestep simulation tick
//!
//! The kick state machine. Every transition is a function of the session and
//! one input, and reports what happened as a list of [`GameEvent`]s.
//!
//! ```text
//! Ready --advance--> Power --advance--> Accuracy --advance--> Kicking
//!   ^                                      |                     |
//!   |                               snap countdown            landed
//!   |                                      v                     v
//!   +-------advance or timer---------- Result <------------------+
//! ```

use super::field::KickDistance;
use super::meter::MeterKind;
use super::state::{GameEvent, GamePhase, GameState, KickResult, Rejection};
use super::trajectory::{self, KickAttempt, KickOutcome, LaunchSpot};
use super::wind::WindMode;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Click, tap or space
    pub advance: bool,
    /// Distance button or number key
    pub select_distance: Option<KickDistance>,
    /// Wind button
    pub select_wind: Option<WindMode>,
}

/// Advance the session by one fixed timestep of `dt` seconds
///
/// Order within a tick: inputs, meters, ball, timers.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(distance) = input.select_distance {
        events.extend(select_distance(state, distance));
    }
    if let Some(mode) = input.select_wind {
        events.extend(select_wind(state, mode));
    }
    if input.advance {
        events.extend(advance(state));
    }

    state.time_ticks += 1;

    state.power_meter.update();
    state.accuracy_meter.update();

    events.extend(update_ball(state, dt));
    events.extend(update_timers(state, dt));

    events
}

/// Handle the single "advance" action for the current phase
pub fn advance(state: &mut GameState) -> Vec<GameEvent> {
    match state.phase {
        GamePhase::Ready => {
            let speed = state.meter_speed(MeterKind::Power);
            state.power_meter.start(speed);
            state.phase = GamePhase::Power;
            log::debug!("Power meter started ({} yds)", state.distance.yards());
            vec![GameEvent::PowerStarted]
        }
        GamePhase::Power => {
            let power = state.power_meter.stop();
            let speed = state.meter_speed(MeterKind::Accuracy);
            state.accuracy_meter.start(speed);
            state.snap_remaining = state.tuning.snap_time_secs;
            state.rush_progress = 0.0;
            state.phase = GamePhase::Accuracy;
            log::debug!("Power locked at {power:.3}");
            vec![GameEvent::PowerLocked {
                power,
                quality: state.power_meter.quality(),
            }]
        }
        GamePhase::Accuracy => {
            let accuracy = state.accuracy_meter.stop();
            launch_kick(state, accuracy)
        }
        // Ball in the air: nothing to do until it lands
        GamePhase::Kicking => Vec::new(),
        GamePhase::Result => {
            state.reset_for_next_kick();
            vec![GameEvent::ReadyForNextKick]
        }
    }
}

fn launch_kick(state: &mut GameState, accuracy: f32) -> Vec<GameEvent> {
    let wind = state.wind_mode.roll(&mut state.rng, &state.tuning);
    state.wind = wind;

    let attempt = KickAttempt {
        distance_yards: state.distance.yards() as f32,
        power: state.power_meter.display_value(),
        accuracy,
        wind,
    };
    let launch = LaunchSpot {
        pos: state.distance.ball_spot(),
        scale: state.distance.perspective_scale(),
    };

    state.ball.pos = launch.pos;
    state.ball.scale = launch.scale;
    state.ball.flight_time = 0.0;
    state.ball.in_flight = true;
    state.attempt = Some(attempt);
    state.launch = Some(launch);
    state.stats.attempts += 1;
    state.phase = GamePhase::Kicking;

    log::debug!(
        "Kick away: power {:.3}, accuracy {:.3}, wind {}",
        attempt.power,
        attempt.accuracy,
        wind.label()
    );
    vec![GameEvent::KickLaunched { attempt }]
}

/// Change the kick distance
///
/// Refused while the ball is in flight. Mid-meter changes abandon the attempt.
pub fn select_distance(state: &mut GameState, distance: KickDistance) -> Vec<GameEvent> {
    if !state.phase.accepts_selection() {
        log::debug!("Distance change refused: kick in flight");
        return vec![GameEvent::SelectionRejected {
            reason: Rejection::KickInFlight,
        }];
    }

    state.distance = distance;
    let reset = matches!(state.phase, GamePhase::Power | GamePhase::Accuracy);
    if reset {
        state.reset_for_next_kick();
    } else {
        state.ball.place(distance);
    }

    let mut events = vec![GameEvent::DistanceChanged { distance, reset }];
    if reset {
        events.push(GameEvent::ReadyForNextKick);
    }
    events
}

/// Change the wind mode and roll a preview reading
pub fn select_wind(state: &mut GameState, mode: WindMode) -> Vec<GameEvent> {
    if !state.phase.accepts_selection() {
        log::debug!("Wind change refused: kick in flight");
        return vec![GameEvent::SelectionRejected {
            reason: Rejection::KickInFlight,
        }];
    }

    state.wind_mode = mode;
    state.wind = mode.roll(&mut state.rng, &state.tuning);
    vec![GameEvent::WindChanged {
        mode,
        wind: state.wind,
    }]
}

/// Move the ball along its arc; resolve the kick once it lands
fn update_ball(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    if !state.ball.in_flight {
        return Vec::new();
    }
    let (Some(attempt), Some(launch)) = (state.attempt, state.launch) else {
        state.ball.in_flight = false;
        return Vec::new();
    };

    state.ball.flight_time += dt * state.tuning.flight_clock_rate;
    let t = trajectory::progress(state.ball.flight_time, &attempt, &state.tuning);
    if t >= 1.0 {
        return end_kick(state, &attempt, &launch);
    }

    let pose = trajectory::position(t, &attempt, &launch, &state.tuning);
    state.ball.pos = pose.pos;
    state.ball.scale = pose.scale;
    state.ball.rotation += dt * state.tuning.ball_spin_rate;

    Vec::new()
}

fn end_kick(state: &mut GameState, attempt: &KickAttempt, launch: &LaunchSpot) -> Vec<GameEvent> {
    let (landed, outcome) = trajectory::resolve(attempt, launch, &state.tuning);
    state.ball.pos = landed.pos;
    state.ball.scale = landed.scale;
    state.ball.in_flight = false;

    let points = if outcome.is_good() {
        let points = state.distance.points();
        state.stats.score += points;
        state.stats.streak += 1;
        state.stats.makes += 1;
        points
    } else {
        state.stats.streak = 0;
        0
    };

    log::info!(
        "{} yd kick: {} ({}/{} made, score {})",
        state.distance.yards(),
        outcome.message(),
        state.stats.makes,
        state.stats.attempts,
        state.stats.score
    );

    let result = KickResult { outcome, points };
    state.result = Some(result);
    state.result_remaining = state.tuning.result_display_secs;
    state.phase = GamePhase::Result;
    vec![GameEvent::KickResolved { result }]
}

/// Run the snap countdown and the result banner timer
fn update_timers(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::Accuracy && state.snap_remaining > 0.0 {
        state.snap_remaining -= dt;
        let limit = state.tuning.snap_time_secs;
        state.rush_progress = (1.0 - state.snap_remaining / limit).clamp(0.0, 1.0);

        if state.snap_remaining <= 0.0 {
            events.extend(block_kick(state));
        }
    }

    if state.result_remaining > 0.0 {
        state.result_remaining -= dt;
        if state.result_remaining <= 0.0 && state.phase == GamePhase::Result {
            state.reset_for_next_kick();
            events.push(GameEvent::ReadyForNextKick);
        }
    }

    events
}

/// The defense got there first
fn block_kick(state: &mut GameState) -> Vec<GameEvent> {
    state.accuracy_meter.stop();
    state.snap_remaining = 0.0;
    state.rush_progress = 1.0;
    state.stats.attempts += 1;
    state.stats.streak = 0;
    state.result = Some(KickResult {
        outcome: KickOutcome::Blocked,
        points: 0,
    });
    state.result_remaining = state.tuning.blocked_display_secs;
    state.phase = GamePhase::Result;

    log::info!(
        "{} yd kick: BLOCKED ({}/{} made)",
        state.distance.yards(),
        state.stats.makes,
        state.stats.attempts
    );
    vec![GameEvent::KickBlocked]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::field::field_center_x;
    use crate::sim::wind::Wind;

    fn press() -> TickInput {
        TickInput {
            advance: true,
            ..Default::default()
        }
    }

    /// Tick with no input until `done` or the limit runs out
    fn run_until(
        state: &mut GameState,
        limit: usize,
        done: impl Fn(&GameState) -> bool,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..limit {
            if done(state) {
                break;
            }
            events.extend(tick(state, &TickInput::default(), SIM_DT));
        }
        events
    }

    #[test]
    fn test_full_cycle() {
        let mut state = GameState::new(12345);

        let events = tick(&mut state, &press(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Power);
        assert_eq!(events, vec![GameEvent::PowerStarted]);

        run_until(&mut state, 30, |_| false);
        tick(&mut state, &press(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Accuracy);
        assert!(state.power_meter.is_locked());

        tick(&mut state, &press(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Kicking);
        assert_eq!(state.stats.attempts, 1);
        assert!(state.ball.in_flight);

        let events = run_until(&mut state, 600, |s| s.phase != GamePhase::Kicking);
        assert_eq!(state.phase, GamePhase::Result);
        assert!(events.iter().any(|e| matches!(e, GameEvent::KickResolved { .. })));
        assert_eq!(state.stats.attempts, 1);

        let events = tick(&mut state, &press(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Ready);
        assert!(events.contains(&GameEvent::ReadyForNextKick));
        assert!(state.attempt.is_none());
        assert!(!state.power_meter.is_locked());
    }

    #[test]
    fn test_straight_kick_is_good() {
        let mut state = GameState::new(1);
        advance(&mut state);
        advance(&mut state);
        advance(&mut state);
        // Pin the locked values to a dead-center, solid kick
        let attempt = KickAttempt {
            distance_yards: 20.0,
            power: 0.8,
            accuracy: 0.5,
            wind: Wind::CALM,
        };
        state.attempt = Some(attempt);

        run_until(&mut state, 600, |s| s.phase != GamePhase::Kicking);
        assert_eq!(state.ball.pos.x, field_center_x());
        let result = state.result.unwrap();
        assert_eq!(result.outcome, KickOutcome::Good);
        assert_eq!(result.points, 2);
        assert_eq!(state.stats.score, 2);
        assert_eq!(state.stats.streak, 1);
        assert_eq!(state.stats.makes, 1);
    }

    #[test]
    fn test_weak_kick_falls_short() {
        let mut state = GameState::new(1);
        advance(&mut state);
        // Stop the power meter right away: one tick of travel is far below 0.4
        tick(&mut state, &TickInput::default(), SIM_DT);
        advance(&mut state);
        advance(&mut state);
        assert!(state.attempt.unwrap().power < 0.4);

        state.stats.streak = 3;
        run_until(&mut state, 600, |s| s.phase != GamePhase::Kicking);
        assert_eq!(state.result.unwrap().outcome, KickOutcome::Short);
        assert_eq!(state.stats.streak, 0);
        assert_eq!(state.stats.score, 0);
    }

    #[test]
    fn test_snap_countdown_blocks_kick() {
        let mut state = GameState::new(7);
        advance(&mut state);
        advance(&mut state);
        assert_eq!(state.phase, GamePhase::Accuracy);

        let events = run_until(&mut state, 100, |_| false);
        assert_eq!(state.phase, GamePhase::Result);
        assert!(state.is_blocked());
        assert_eq!(state.stats.attempts, 1);
        assert_eq!(events.iter().filter(|e| **e == GameEvent::KickBlocked).count(), 1);
        assert!(state.accuracy_meter.is_locked());
        assert_eq!(state.snapshot().message, "BLOCKED!");
    }

    #[test]
    fn test_rush_progress_tracks_countdown() {
        let mut state = GameState::new(7);
        advance(&mut state);
        advance(&mut state);
        run_until(&mut state, 45, |_| false);
        assert!((state.rush_progress - 0.5).abs() < 0.02, "rush {}", state.rush_progress);
    }

    #[test]
    fn test_result_auto_advances() {
        let mut state = GameState::new(7);
        advance(&mut state);
        advance(&mut state);
        run_until(&mut state, 100, |s| s.phase == GamePhase::Result);
        assert!(state.is_blocked());

        // Blocked banner holds for 2.5 s
        run_until(&mut state, 140, |_| false);
        assert_eq!(state.phase, GamePhase::Result);
        run_until(&mut state, 20, |s| s.phase == GamePhase::Ready);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.stats.attempts, 1);
    }

    /// Launch a dead-center, solid 20 yd kick and fly it until the result
    fn kick_straight(state: &mut GameState) {
        advance(state);
        advance(state);
        advance(state);
        state.attempt = Some(KickAttempt {
            distance_yards: 20.0,
            power: 0.8,
            accuracy: 0.5,
            wind: Wind::CALM,
        });
        run_until(state, 600, |s| s.phase == GamePhase::Result);
    }

    #[test]
    fn test_made_result_auto_advances_after_two_seconds() {
        let mut state = GameState::new(1);
        kick_straight(&mut state);
        assert_eq!(state.phase, GamePhase::Result);
        assert_eq!(state.result.unwrap().outcome, KickOutcome::Good);

        // Made banner holds for 2.0 s, counting the tick that landed the ball
        run_until(&mut state, 115, |_| false);
        assert_eq!(state.phase, GamePhase::Result);
        let events = run_until(&mut state, 10, |s| s.phase == GamePhase::Ready);
        assert_eq!(state.phase, GamePhase::Ready);
        assert!(events.contains(&GameEvent::ReadyForNextKick));
        assert!(state.result.is_none());
        assert_eq!(state.stats.makes, 1);
        assert_eq!(state.stats.attempts, 1);
    }

    #[test]
    fn test_distance_change_during_result_keeps_banner() {
        let mut state = GameState::new(1);
        kick_straight(&mut state);
        let result = state.result;
        assert!(result.is_some());

        let events = select_distance(&mut state, KickDistance::Forty);
        assert_eq!(
            events,
            vec![GameEvent::DistanceChanged {
                distance: KickDistance::Forty,
                reset: false
            }]
        );
        assert_eq!(state.phase, GamePhase::Result);
        assert_eq!(state.result, result);
        assert_eq!(state.snapshot().message, "GOOD!");
        assert_eq!(state.distance, KickDistance::Forty);
        assert_eq!(state.ball.pos, KickDistance::Forty.ball_spot());
        assert_eq!(state.stats.makes, 1);
    }

    #[test]
    fn test_distance_change_rejected_in_flight() {
        let mut state = GameState::new(3);
        advance(&mut state);
        advance(&mut state);
        advance(&mut state);
        assert_eq!(state.phase, GamePhase::Kicking);

        let events = select_distance(&mut state, KickDistance::Fifty);
        assert_eq!(
            events,
            vec![GameEvent::SelectionRejected {
                reason: Rejection::KickInFlight
            }]
        );
        assert_eq!(state.distance, KickDistance::Twenty);
        assert_eq!(state.phase, GamePhase::Kicking);

        let events = select_wind(&mut state, WindMode::Heavy);
        assert_eq!(events.len(), 1);
        assert_eq!(state.wind_mode, WindMode::None);
    }

    #[test]
    fn test_distance_change_mid_meter_resets() {
        let mut state = GameState::new(3);
        advance(&mut state);
        run_until(&mut state, 10, |_| false);
        advance(&mut state);
        assert_eq!(state.phase, GamePhase::Accuracy);
        assert!(state.power_meter.is_locked());

        let events = tick(
            &mut state,
            &TickInput {
                select_distance: Some(KickDistance::Forty),
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.distance, KickDistance::Forty);
        assert_eq!(state.power_meter.locked, None);
        assert_eq!(state.power_meter.value, 0.0);
        assert_eq!(state.ball.pos, KickDistance::Forty.ball_spot());
        assert!(events.contains(&GameEvent::DistanceChanged {
            distance: KickDistance::Forty,
            reset: true
        }));
        assert_eq!(state.stats.attempts, 0);
    }

    #[test]
    fn test_distance_change_when_ready_moves_ball() {
        let mut state = GameState::new(3);
        let events = select_distance(&mut state, KickDistance::Sixty);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.ball.pos, KickDistance::Sixty.ball_spot());
        assert_eq!(state.ball.scale, KickDistance::Sixty.perspective_scale());
        assert_eq!(
            events,
            vec![GameEvent::DistanceChanged {
                distance: KickDistance::Sixty,
                reset: false
            }]
        );
    }

    #[test]
    fn test_advance_ignored_in_flight() {
        let mut state = GameState::new(3);
        advance(&mut state);
        advance(&mut state);
        advance(&mut state);
        assert!(advance(&mut state).is_empty());
        assert_eq!(state.phase, GamePhase::Kicking);
        assert_eq!(state.stats.attempts, 1);
    }

    #[test]
    fn test_each_kick_rolls_wind() {
        let mut state = GameState::new(11);
        select_wind(&mut state, WindMode::Heavy);
        advance(&mut state);
        advance(&mut state);
        let events = advance(&mut state);
        let Some(GameEvent::KickLaunched { attempt }) = events.first() else {
            panic!("expected launch, got {events:?}");
        };
        assert!(attempt.wind.speed_mph >= 15.0);
        assert_eq!(attempt.wind, state.wind);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        for state in [&mut state1, &mut state2] {
            select_wind(state, WindMode::Light);
        }

        let schedule = [0usize, 25, 12, 0];
        for _ in 0..3 {
            for wait in schedule {
                for state in [&mut state1, &mut state2] {
                    run_until(state, wait, |_| false);
                    tick(state, &press(), SIM_DT);
                }
            }
            for state in [&mut state1, &mut state2] {
                run_until(state, 600, |s| s.phase == GamePhase::Ready);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.stats, state2.stats);
        assert_eq!(state1.wind, state2.wind);
        assert_eq!(state1.ball.pos, state2.ball.pos);
    }
}
