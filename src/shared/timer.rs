//! Cooldown/duration primitive shared by the player, shop and trees.

use bevy::prelude::*;
use std::time::Duration;

/// What happens when an [`ActionTimer`] expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerAction {
    UseTool,
    UseSeed,
}

/// A one-shot timer that is either idle or running. Expiry is reported
/// exactly once per activation, then the timer goes idle again.
#[derive(Debug, Clone)]
pub struct ActionTimer {
    timer: Timer,
    active: bool,
    on_expire: Option<TimerAction>,
}

impl ActionTimer {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            timer: Timer::new(Duration::from_millis(duration_ms), TimerMode::Once),
            active: false,
            on_expire: None,
        }
    }

    pub fn with_action(duration_ms: u64, action: TimerAction) -> Self {
        Self {
            on_expire: Some(action),
            ..Self::new(duration_ms)
        }
    }

    /// Start (or restart) the countdown.
    pub fn activate(&mut self) {
        self.timer.reset();
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.timer.reset();
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Advance by `dt`. Returns `Some(expired)` on the tick the timer runs
    /// out, carrying its on-expire action if any.
    pub fn tick(&mut self, dt: Duration) -> Option<Option<TimerAction>> {
        if !self.active {
            return None;
        }
        self.timer.tick(dt);
        if self.timer.finished() {
            self.deactivate();
            Some(self.on_expire)
        } else {
            None
        }
    }

    /// Like [`tick`](Self::tick) but only reports the action.
    pub fn update(&mut self, dt: Duration) -> Option<TimerAction> {
        self.tick(dt).flatten()
    }
}
