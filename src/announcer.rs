//! Stadium announcer
//!
//! Turns kick events into short spoken lines. The speech engine itself is
//! pluggable: the browser host wires in speech synthesis, the native binary
//! logs the lines, tests record them.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Spoken cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Power meter starts
    KickStart,
    /// Kick went through
    Good,
    /// Short or wide
    NoGood,
    /// Snap countdown ran out
    Blocked,
}

impl Cue {
    pub fn text(self) -> &'static str {
        match self {
            Cue::KickStart => "If they make, they win!",
            Cue::Good => "It's good!",
            Cue::NoGood => "No good.",
            Cue::Blocked => "Blocked!",
        }
    }

    /// Cue for a transition, if it gets one
    pub fn for_event(event: &GameEvent) -> Option<Cue> {
        match event {
            GameEvent::PowerStarted => Some(Cue::KickStart),
            GameEvent::KickResolved { result } if result.outcome.is_good() => Some(Cue::Good),
            GameEvent::KickResolved { .. } => Some(Cue::NoGood),
            GameEvent::KickBlocked => Some(Cue::Blocked),
            _ => None,
        }
    }
}

/// A speech backend
///
/// `speak` is fire-and-forget; callers always `cancel` first so a new line
/// never queues behind an old one.
pub trait Announcer {
    /// Stop whatever is being said
    fn cancel(&mut self);
    /// Start saying `text` at `volume` (0.0 - 1.0)
    fn speak(&mut self, text: &str, volume: f32);
}

/// Backend that writes lines to the log
#[derive(Debug, Default)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn cancel(&mut self) {}

    fn speak(&mut self, text: &str, _volume: f32) {
        log::info!("Announcer: {text}");
    }
}

/// Backend that keeps every line, for hosts that drain cues themselves
#[derive(Debug, Default)]
pub struct RecordingAnnouncer {
    pub lines: Vec<String>,
    pub cancels: usize,
}

impl RecordingAnnouncer {
    /// Take all recorded lines
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Announcer for RecordingAnnouncer {
    fn cancel(&mut self) {
        self.cancels += 1;
    }

    fn speak(&mut self, text: &str, _volume: f32) {
        self.lines.push(text.to_string());
    }
}

/// Announcer with volume and mute, fed by game events
pub struct Voice<A: Announcer> {
    backend: A,
    volume: f32,
    muted: bool,
}

impl<A: Announcer> Voice<A> {
    pub fn new(backend: A) -> Self {
        Self {
            backend,
            volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(backend: A, settings: &Settings) -> Self {
        let mut voice = Self::new(backend);
        voice.set_volume(settings.announcer_volume);
        voice.set_muted(!settings.announcer);
        voice
    }

    /// Set volume (0.0 - 1.0)
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Say a cue, interrupting anything in progress
    pub fn play(&mut self, cue: Cue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.cancel();
        self.backend.speak(cue.text(), vol);
    }

    /// Play the cue for each event that has one
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(Cue::for_event) {
            self.play(cue);
        }
    }

    pub fn backend(&self) -> &A {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut A {
        &mut self.backend
    }
}
