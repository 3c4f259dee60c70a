//! Staged reveal: a phase counter that climbs on a fixed step until it
//! reaches the number of fragments, plus an optional delayed fade-in.

use super::{Command, Commands, Controller, TimerKey};

pub const STEP_TIMER: TimerKey = "reveal-step";
pub const FADE_TIMER: TimerKey = "reveal-fade";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    Step,
    FadeIn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedReveal {
    phase: u32,
    max_phase: u32,
    step_ms: u32,
    fade_in_ms: Option<u32>,
    visible: bool,
}

impl StagedReveal {
    pub fn new(max_phase: u32, step_ms: u32) -> Self {
        Self {
            phase: 0,
            max_phase,
            step_ms,
            fade_in_ms: None,
            visible: true,
        }
    }

    /// Start hidden and become visible after `ms`.
    pub fn with_fade_in(mut self, ms: u32) -> Self {
        self.fade_in_ms = Some(ms);
        self.visible = false;
        self
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn max_phase(&self) -> u32 {
        self.max_phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase >= self.max_phase
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Controller for StagedReveal {
    type Event = RevealEvent;
    type Output = ();

    fn mount(&mut self) -> Commands<Self> {
        let mut commands = Vec::new();
        if !self.is_complete() {
            commands.push(Command::every(STEP_TIMER, self.step_ms, RevealEvent::Step));
        }
        if let Some(ms) = self.fade_in_ms.filter(|_| !self.visible) {
            commands.push(Command::once(FADE_TIMER, ms, RevealEvent::FadeIn));
        }
        commands
    }

    fn handle(&mut self, event: RevealEvent) -> Commands<Self> {
        match event {
            RevealEvent::Step => {
                if self.phase < self.max_phase {
                    self.phase += 1;
                }
                if self.is_complete() {
                    return vec![Command::Cancel(STEP_TIMER)];
                }
            }
            RevealEvent::FadeIn => self.visible = true,
        }
        Vec::new()
    }

    fn unmount(&mut self) -> Commands<Self> {
        vec![Command::Cancel(STEP_TIMER), Command::Cancel(FADE_TIMER)]
    }
}
