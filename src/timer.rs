use crate::audio::AudioHandle;
use crate::config::TimerConfig;
use crate::state::{Phase, TimerEvent, TimerState};
use tracing::{debug, info};

pub struct Timer {
    state: TimerState,
    config: TimerConfig,
    audio: AudioHandle,
}

impl Timer {
    pub fn new(config: TimerConfig, audio: AudioHandle) -> Self {
        Self {
            state: TimerState::new(&config),
            config,
            audio,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn toggle(&mut self) -> Phase {
        let before = self.state.phase;
        let after = self.state.toggle();
        if before != after {
            info!("Timer {:?} -> {:?} at {}", before, after, self.state.format_time());
        }
        after
    }

    pub fn reset(&mut self) {
        self.state.reset(&self.config);
        info!("Timer reset to {}", self.state.format_time());
    }

    /// Advance one second and queue the sound for any event it produced.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        let events = self.state.tick();
        debug!("Tick {}", self.state.format_time());

        for event in &events {
            match event {
                TimerEvent::ZeroReached => {
                    info!("Timer reached zero");
                    self.audio.play(self.config.zero_sound.clone());
                }
                TimerEvent::LimitReached => {
                    info!("Timer reached limit {}, stopping", self.state.format_time());
                    self.audio.play(self.config.limit_sound.clone());
                }
            }
        }

        events
    }
}
