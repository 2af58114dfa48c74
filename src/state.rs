use crate::config::TimerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Stopped,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn start(&self) -> Option<Phase> {
        match self {
            Phase::Idle | Phase::Paused => Some(Phase::Running),
            _ => None,
        }
    }

    pub fn pause(&self) -> Option<Phase> {
        match self {
            Phase::Running => Some(Phase::Paused),
            _ => None,
        }
    }

    /// Label for the start/pause button in this phase.
    pub fn button_label(&self) -> &str {
        match self {
            Phase::Running => "Pause",
            _ => "Start",
        }
    }
}

/// Notifications produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    ZeroReached,
    LimitReached,
}

#[derive(Debug, Clone)]
pub struct TimerState {
    pub current_seconds: i64,
    pub limit_threshold: i64,
    pub phase: Phase,
}

impl TimerState {
    pub fn new(config: &TimerConfig) -> Self {
        let mut state = Self {
            current_seconds: 0,
            limit_threshold: 0,
            phase: Phase::Idle,
        };
        state.reset(config);
        state
    }

    pub fn reset(&mut self, config: &TimerConfig) {
        self.current_seconds = i64::from(config.start_seconds);
        self.limit_threshold = -i64::from(config.limit_seconds);
        self.phase = Phase::Idle;
    }

    /// Returns true if the phase changed.
    pub fn start(&mut self) -> bool {
        match self.phase.start() {
            Some(phase) => {
                self.phase = phase;
                true
            }
            None => false,
        }
    }

    /// Returns true if the phase changed.
    pub fn pause(&mut self) -> bool {
        match self.phase.pause() {
            Some(phase) => {
                self.phase = phase;
                true
            }
            None => false,
        }
    }

    /// Start when idle or paused, pause when running. Does nothing once stopped.
    pub fn toggle(&mut self) -> Phase {
        if self.phase.is_running() {
            self.pause();
        } else {
            self.start();
        }
        self.phase
    }

    /// Advance one second. Ticks outside `Running` are ignored.
    ///
    /// The zero and limit checks are independent, so with a zero limit both
    /// events come out of the same tick, `ZeroReached` first.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        if !self.phase.is_running() {
            return events;
        }

        self.current_seconds -= 1;

        if self.current_seconds == 0 {
            events.push(TimerEvent::ZeroReached);
        }

        if self.current_seconds == self.limit_threshold {
            events.push(TimerEvent::LimitReached);
            self.phase = Phase::Stopped;
        }

        events
    }

    pub fn is_negative(&self) -> bool {
        self.current_seconds < 0
    }

    /// Whether the start/pause button should be visible.
    pub fn shows_start_button(&self) -> bool {
        self.phase != Phase::Stopped
    }

    pub fn format_time(&self) -> String {
        format_time(self.current_seconds)
    }
}

/// Render seconds as `[-]MM:SS`, the sign only for negative values.
pub fn format_time(total_seconds: i64) -> String {
    let abs = total_seconds.unsigned_abs();
    let minutes = abs / 60;
    let seconds = abs % 60;
    let sign = if total_seconds < 0 { "-" } else { "" };
    format!("{}{:02}:{:02}", sign, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(start: u32, limit: u32) -> TimerConfig {
        TimerConfig {
            start_seconds: start,
            limit_seconds: limit,
            ..TimerConfig::default()
        }
    }

    fn running(start: u32, limit: u32) -> TimerState {
        let mut state = TimerState::new(&config(start, limit));
        assert!(state.start());
        state
    }

    #[test]
    fn test_reset_shows_start_time_without_sign() {
        let state = TimerState::new(&config(5 * 60 + 7, 30));
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.current_seconds, 307);
        assert_eq!(state.limit_threshold, -30);
        assert_eq!(state.format_time(), "05:07");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(-1), "-00:01");
        assert_eq!(format_time(-10), "-00:10");
        assert_eq!(format_time(-125), "-02:05");
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn test_zero_fires_once_at_start_seconds() {
        let mut state = running(10, 10);
        for _ in 0..9 {
            assert!(state.tick().is_empty());
        }
        assert_eq!(state.tick(), vec![TimerEvent::ZeroReached]);
        assert_eq!(state.current_seconds, 0);
        assert_eq!(state.format_time(), "00:00");

        assert!(state.tick().is_empty());
        assert_eq!(state.format_time(), "-00:01");
    }

    #[test]
    fn test_limit_stops_timer() {
        let mut state = running(10, 10);
        let mut zero = 0;
        let mut limit = 0;
        for _ in 0..20 {
            for event in state.tick() {
                match event {
                    TimerEvent::ZeroReached => zero += 1,
                    TimerEvent::LimitReached => limit += 1,
                }
            }
        }
        assert_eq!(zero, 1);
        assert_eq!(limit, 1);
        assert_eq!(state.phase, Phase::Stopped);
        assert_eq!(state.current_seconds, -10);
        assert_eq!(state.format_time(), "-00:10");
        assert!(!state.shows_start_button());
    }

    #[test]
    fn test_ticks_ignored_after_stop() {
        let mut state = running(1, 1);
        state.tick();
        state.tick();
        assert_eq!(state.phase, Phase::Stopped);

        for _ in 0..5 {
            assert!(state.tick().is_empty());
        }
        assert_eq!(state.current_seconds, -1);

        assert!(!state.start());
        assert_eq!(state.toggle(), Phase::Stopped);
        assert!(state.tick().is_empty());
        assert_eq!(state.current_seconds, -1);
    }

    #[test]
    fn test_pause_freezes_counter() {
        let mut state = running(30, 0);
        state.tick();
        state.tick();
        assert!(state.pause());
        assert_eq!(state.phase, Phase::Paused);

        for _ in 0..10 {
            assert!(state.tick().is_empty());
        }
        assert_eq!(state.current_seconds, 28);

        assert!(state.start());
        state.tick();
        assert_eq!(state.current_seconds, 27);
    }

    #[test]
    fn test_ticks_ignored_while_idle() {
        let mut state = TimerState::new(&config(3, 3));
        assert!(state.tick().is_empty());
        assert_eq!(state.current_seconds, 3);
    }

    #[test]
    fn test_invalid_transitions_are_noops() {
        let mut state = TimerState::new(&config(3, 3));
        assert!(!state.pause());
        assert_eq!(state.phase, Phase::Idle);

        assert!(state.start());
        assert!(!state.start());
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_toggle_cycles_running_and_paused() {
        let mut state = TimerState::new(&config(3, 3));
        assert_eq!(state.phase.button_label(), "Start");
        assert_eq!(state.toggle(), Phase::Running);
        assert_eq!(state.phase.button_label(), "Pause");
        assert_eq!(state.toggle(), Phase::Paused);
        assert_eq!(state.phase.button_label(), "Start");
        assert_eq!(state.toggle(), Phase::Running);
    }

    #[test]
    fn test_zero_limit_fires_both_on_same_tick() {
        let mut state = running(2, 0);
        assert!(state.tick().is_empty());
        assert_eq!(
            state.tick(),
            vec![TimerEvent::ZeroReached, TimerEvent::LimitReached]
        );
        assert_eq!(state.phase, Phase::Stopped);
        assert_eq!(state.current_seconds, 0);
    }

    #[test]
    fn test_zero_start_and_zero_limit_never_stops() {
        let mut state = running(0, 0);
        for _ in 0..100 {
            assert!(state.tick().is_empty());
        }
        assert_eq!(state.current_seconds, -100);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_zero_start_reaches_limit() {
        let mut state = running(0, 3);
        state.tick();
        state.tick();
        assert_eq!(state.tick(), vec![TimerEvent::LimitReached]);
        assert_eq!(state.current_seconds, -3);
    }

    #[test]
    fn test_reset_from_any_phase() {
        let cfg = config(2, 1);
        let mut state = TimerState::new(&cfg);
        state.start();
        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(state.phase, Phase::Stopped);

        state.reset(&cfg);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.current_seconds, 2);
        assert!(state.shows_start_button());
        assert!(!state.is_negative());

        state.start();
        state.tick();
        state.pause();
        state.reset(&cfg);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.current_seconds, 2);
    }
}
