//! Player preferences
//!
//! Persisted in LocalStorage on the web; native builds use defaults.

use serde::{Deserialize, Serialize};

use crate::sim::{GameEvent, KickDistance, WindMode};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Distance selected when a session starts
    pub distance: KickDistance,
    /// Wind mode selected when a session starts
    pub wind: WindMode,

    // === Audio ===
    /// Spoken announcer cues
    pub announcer: bool,
    /// Announcer volume (0.0 - 1.0)
    pub announcer_volume: f32,

    // === Accessibility ===
    /// Reduced motion (renderer skips ball spin and rush animation)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            distance: KickDistance::Twenty,
            wind: WindMode::None,
            announcer: true,
            announcer_volume: 1.0,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "field_goal_settings";

    /// Parse settings JSON, `None` if it is not valid
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(mut settings) => {
                settings.announcer_volume = settings.announcer_volume.clamp(0.0, 1.0);
                Some(settings)
            }
            Err(e) => {
                log::warn!("Discarding saved settings: {e}");
                None
            }
        }
    }

    /// Remember selections the game accepted; `true` if anything changed
    ///
    /// Only `DistanceChanged`/`WindChanged` count, so a selection the sim
    /// rejected never reaches storage.
    pub fn apply_events(&mut self, events: &[GameEvent]) -> bool {
        let before = (self.distance, self.wind);
        for event in events {
            match event {
                GameEvent::DistanceChanged { distance, .. } => self.distance = *distance,
                GameEvent::WindChanged { mode, .. } => self.wind = *mode,
                _ => {}
            }
        }
        before != (self.distance, self.wind)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
