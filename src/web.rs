//! Browser bindings
//!
//! The page owns the canvas, the animation frame loop and speech synthesis.
//! It drives a [`FieldGoal`] handle: forward input, call `frame` with the
//! frame time, draw the returned snapshot and speak any drained lines.

use wasm_bindgen::prelude::*;

use crate::announcer::{RecordingAnnouncer, Voice};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::settings::Settings;
use crate::sim::{GameState, KickDistance, TickInput, WindMode, select_distance, select_wind, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Field Goal starting...");
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct FieldGoal {
    state: GameState,
    settings: Settings,
    voice: Voice<RecordingAnnouncer>,
    input: TickInput,
    accumulator: f32,
}

#[wasm_bindgen]
impl FieldGoal {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> FieldGoal {
        let settings = Settings::load();
        let mut state = GameState::with_tuning(seed as u64, Tuning::load());
        select_distance(&mut state, settings.distance);
        select_wind(&mut state, settings.wind);
        let voice = Voice::from_settings(RecordingAnnouncer::default(), &settings);
        log::info!("New session with seed {}", state.seed);
        FieldGoal {
            state,
            settings,
            voice,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    /// Click, tap or space
    pub fn advance(&mut self) {
        self.input.advance = true;
    }

    /// Distance button (yards); unknown values are ignored
    ///
    /// Applied on the next tick, which may still refuse it.
    pub fn select_distance(&mut self, yards: u32) {
        if let Some(distance) = KickDistance::from_yards(yards) {
            self.input.select_distance = Some(distance);
        }
    }

    /// Number keys 1-5
    pub fn select_distance_key(&mut self, digit: u32) {
        if let Some(distance) = KickDistance::from_digit(digit) {
            self.select_distance(distance.yards());
        }
    }

    /// Wind button: "none", "light" or "heavy"
    pub fn select_wind(&mut self, mode: &str) {
        if let Some(mode) = WindMode::from_str(mode) {
            self.input.select_wind = Some(mode);
        }
    }

    pub fn set_announcer(&mut self, enabled: bool) {
        self.settings.announcer = enabled;
        self.voice.set_muted(!enabled);
        self.settings.save();
    }

    /// Run simulation ticks for `dt` seconds of frame time
    pub fn frame(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = std::mem::take(&mut self.input);
            let events = tick(&mut self.state, &input, SIM_DT);
            self.voice.handle_events(&events);
            if self.settings.apply_events(&events) {
                self.settings.save();
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// Current frame as JSON for the renderer
    pub fn snapshot(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_default()
    }

    /// Announcer lines since the last call, as a JSON array
    pub fn drain_speech(&mut self) -> String {
        let lines = self.voice.backend_mut().drain();
        serde_json::to_string(&lines).unwrap_or_default()
    }
}
