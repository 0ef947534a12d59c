//! CPU kicker for attract/demo mode
//!
//! Picks a target for each meter when it starts sweeping and presses advance
//! when the marker passes it. Targets are jittered from its own seeded RNG so
//! demo sessions miss now and then but replay identically.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::meter::Meter;
use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Demo-mode input source
#[derive(Debug, Clone)]
pub struct AutoKicker {
    rng: Pcg32,
    /// Lowest power it will aim for
    pub min_power_target: f32,
    /// Largest distance from center it will aim for on accuracy
    pub accuracy_spread: f32,
    power_target: Option<f32>,
    accuracy_target: Option<f32>,
}

impl AutoKicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            min_power_target: 0.55,
            accuracy_spread: 0.2,
            power_target: None,
            accuracy_target: None,
        }
    }

    /// Decide this tick's input from the current state
    pub fn input(&mut self, state: &GameState) -> TickInput {
        let advance = match state.phase {
            GamePhase::Ready => {
                self.power_target = None;
                self.accuracy_target = None;
                true
            }
            GamePhase::Power => {
                let target = match self.power_target {
                    Some(target) => target,
                    None => {
                        let target = self.rng.random_range(self.min_power_target..=1.0);
                        self.power_target = Some(target);
                        target
                    }
                };
                crossing(&state.power_meter, target)
            }
            GamePhase::Accuracy => {
                let target = match self.accuracy_target {
                    Some(target) => target,
                    None => {
                        let spread = self.accuracy_spread;
                        let target = 0.5 + self.rng.random_range(-spread..=spread);
                        self.accuracy_target = Some(target);
                        target
                    }
                };
                crossing(&state.accuracy_meter, target)
            }
            // Let the result banner time out on its own
            GamePhase::Kicking | GamePhase::Result => false,
        };

        TickInput {
            advance,
            ..Default::default()
        }
    }
}

/// True when the next meter update would carry the marker past `target`
fn crossing(meter: &Meter, target: f32) -> bool {
    if !meter.active {
        return false;
    }
    let next = meter.value + meter.direction * meter.speed;
    let (lo, hi) = if meter.value <= next {
        (meter.value, next)
    } else {
        (next, meter.value)
    };
    // The bounce clamps at the ends, so a target at the edge is hit at the edge
    (lo..=hi).contains(&target) || (target >= 1.0 && next >= 1.0) || (target <= 0.0 && next <= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::tick::tick;

    #[test]
    fn test_plays_full_kicks() {
        let mut state = GameState::new(5);
        let mut kicker = AutoKicker::new(5);

        for _ in 0..3000 {
            let input = kicker.input(&state);
            tick(&mut state, &input, SIM_DT);
        }

        assert!(state.stats.attempts >= 5, "attempts {}", state.stats.attempts);
        assert!(state.stats.makes > 0, "never made a kick: {:?}", state.stats);
    }

    #[test]
    fn test_presses_when_marker_crosses_target() {
        let mut meter = Meter::new(crate::sim::meter::MeterKind::Power);
        meter.start(0.1);
        meter.value = 0.55;
        assert!(crossing(&meter, 0.6));
        assert!(!crossing(&meter, 0.7));

        meter.direction = -1.0;
        assert!(crossing(&meter, 0.5));
        assert!(!crossing(&meter, 0.6));
    }

    #[test]
    fn test_waits_during_flight_and_result() {
        let mut state = GameState::new(5);
        let mut kicker = AutoKicker::new(5);
        state.phase = GamePhase::Kicking;
        assert!(!kicker.input(&state).advance);
        state.phase = GamePhase::Result;
        assert!(!kicker.input(&state).advance);
    }
}
