//! Audio hook
//!
//! The simulation never plays sound itself. After each tick the host hands
//! the tick's events to an `AudioManager`, which maps them to sound effects
//! and forwards them, fire-and-forget, to whatever `AudioSink` the platform
//! provides.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Jump started
    Jump,
    /// Lost a life
    Hit,
    /// Picked up a healing item
    Heal,
    /// Shooter fired
    Shot,
    /// Stage threshold reached
    StageClear,
    /// Next stage started
    StageStart,
    /// Run lost
    GameOver,
    /// Final stage cleared
    Victory,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::Damaged { lives } if *lives > 0 => Some(SoundEffect::Hit),
            GameEvent::Damaged { .. } => None,
            GameEvent::Healed { .. } => Some(SoundEffect::Heal),
            GameEvent::ShotFired => Some(SoundEffect::Shot),
            GameEvent::StageCleared { .. } => Some(SoundEffect::StageClear),
            GameEvent::StageStarted { .. } => Some(SoundEffect::StageStart),
            GameEvent::GameOver { won: true, .. } => Some(SoundEffect::Victory),
            GameEvent::GameOver { won: false, .. } => Some(SoundEffect::GameOver),
            GameEvent::Spawned { .. } | GameEvent::Restarted => None,
        }
    }
}

/// Platform audio backend. Playback results are never reported back.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Sound {:?} at volume {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        Self {
            sink,
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            muted: settings.muted,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        let volume = self.master_volume * self.sfx_volume;
        if volume <= 0.0 {
            return;
        }
        self.sink.play(effect, volume);
    }

    /// Play whatever the last tick's events call for
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.play(effect);
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
