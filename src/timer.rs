use crate::domain::TimerMode;
use crate::persistence::Settings;

/// Outcome of asking the engine to change mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The session was untouched; the switch happened immediately
    Switched,
    /// Progress would be discarded; confirmation is required
    NeedsConfirmation,
    /// Already in the requested mode
    Unchanged,
}

/// Outcome of asking the engine to give up the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiveUpOutcome {
    /// Pomodoro sessions require confirmation before discarding
    NeedsConfirmation,
    /// Break sessions reset instantly
    Reset,
}

/// Countdown state machine over the three timer modes.
///
/// The engine only counts; what a completed session means (pomodoro
/// credit, break rotation) is decided by the caller consuming the
/// completion signal from `tick`.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    settings: Settings,
    mode: TimerMode,
    remaining_secs: u32,
    running: bool,
    pending_mode: Option<TimerMode>,
}

impl TimerEngine {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.clamped();
        Self {
            settings,
            mode: TimerMode::Pomodoro,
            remaining_secs: duration_secs(&settings, TimerMode::Pomodoro),
            running: false,
            pending_mode: None,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending_mode(&self) -> Option<TimerMode> {
        self.pending_mode
    }

    /// Default duration of a mode under the current settings, in seconds
    pub fn duration_for(&self, mode: TimerMode) -> u32 {
        duration_secs(&self.settings, mode)
    }

    /// Whether the session has been started or altered since the last reset
    pub fn is_dirty(&self) -> bool {
        self.remaining_secs != self.duration_for(self.mode)
    }

    /// Flip between running and paused; a finished session stays stopped
    /// until it is reset
    pub fn toggle_running(&mut self) {
        if self.remaining_secs == 0 {
            return;
        }
        self.running = !self.running;
    }

    /// Advance the countdown by one second. Returns the completed mode
    /// when the session just reached zero.
    pub fn tick(&mut self) -> Option<TimerMode> {
        if !self.running {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
            return Some(self.mode);
        }
        None
    }

    /// Ask for a mode change. Untouched sessions switch immediately and
    /// keep the running flag; dirty sessions park the request behind a
    /// confirmation.
    pub fn request_mode(&mut self, new_mode: TimerMode) -> SwitchOutcome {
        if new_mode == self.mode {
            return SwitchOutcome::Unchanged;
        }

        if self.is_dirty() {
            self.pending_mode = Some(new_mode);
            return SwitchOutcome::NeedsConfirmation;
        }

        self.mode = new_mode;
        self.remaining_secs = self.duration_for(new_mode);
        SwitchOutcome::Switched
    }

    /// Confirm a parked mode switch, discarding the session's progress
    pub fn confirm_switch(&mut self) {
        if let Some(new_mode) = self.pending_mode.take() {
            self.mode = new_mode;
            self.remaining_secs = self.duration_for(new_mode);
        }
    }

    /// Cancel a parked mode switch; mode and remaining time are untouched
    pub fn cancel_switch(&mut self) {
        self.pending_mode = None;
    }

    /// Ask to abandon the session. Pomodoros need confirmation; breaks
    /// reset on the spot.
    pub fn request_give_up(&mut self) -> GiveUpOutcome {
        if self.mode == TimerMode::Pomodoro {
            GiveUpOutcome::NeedsConfirmation
        } else {
            self.reset();
            GiveUpOutcome::Reset
        }
    }

    /// Confirm giving up: stop and reset to the mode default. The
    /// discarded session earns no completion credit.
    pub fn confirm_give_up(&mut self) {
        self.reset();
    }

    /// Stop and reset the current mode to its default duration
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.duration_for(self.mode);
    }

    /// Jump straight to a mode at its default duration, stopped. Used by
    /// the session rotation after a completed session.
    pub fn reset_to(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.running = false;
        self.pending_mode = None;
        self.remaining_secs = self.duration_for(mode);
    }

    /// Apply new settings; a clean session snaps to the new default,
    /// a dirty one keeps its remaining time
    pub fn apply_settings(&mut self, settings: Settings) {
        let was_clean = !self.is_dirty();
        self.settings = settings.clamped();
        if was_clean {
            self.remaining_secs = self.duration_for(self.mode);
        }
    }

    /// Remaining time as zero-padded `MM:SS`; the minute field widens
    /// past two digits instead of rolling to hours
    pub fn format_remaining(&self) -> String {
        format_secs(self.remaining_secs)
    }
}

fn duration_secs(settings: &Settings, mode: TimerMode) -> u32 {
    let mins = match mode {
        TimerMode::Pomodoro => settings.pomodoro_mins,
        TimerMode::Short => settings.short_break_mins,
        TimerMode::Long => settings.long_break_mins,
    };
    mins * 60
}

/// Format whole seconds as zero-padded `MM:SS`
pub fn format_secs(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
