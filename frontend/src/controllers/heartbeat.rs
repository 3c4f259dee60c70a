//! Debounced "beat" shared by the decorative heart widgets.
//!
//! A trigger makes the heart active and arms the settle timer; until that
//! timer fires every further trigger is dropped. The playful variant also
//! shimmers through idle colours before the first beat and celebrates a set
//! number of beats with a short easter-egg message.

use tracing::debug;

use super::{Command, Commands, Controller, TimerKey};
use crate::config::Timings;

pub const SETTLE_TIMER: TimerKey = "settle";
pub const SHIMMER_TIMER: TimerKey = "shimmer";
pub const EGG_TIMER: TimerKey = "easter-egg";

/// Idle hues stay in the blue-green band.
pub const IDLE_HUES: std::ops::Range<u16> = 160..220;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EasterEggConfig {
    pub after_beats: u32,
    pub delay_ms: u32,
    pub hold_ms: u32,
    pub fade_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatConfig {
    pub debounce_ms: u32,
    pub shimmer_ms: Option<u32>,
    pub easter_egg: Option<EasterEggConfig>,
}

impl HeartbeatConfig {
    pub fn pulsing(timings: &Timings) -> Self {
        Self {
            debounce_ms: timings.pulse_debounce_ms,
            shimmer_ms: None,
            easter_egg: None,
        }
    }

    pub fn playful(timings: &Timings) -> Self {
        Self {
            debounce_ms: timings.heart_debounce_ms,
            shimmer_ms: Some(timings.shimmer_interval_ms),
            easter_egg: Some(EasterEggConfig {
                after_beats: 5,
                delay_ms: timings.egg_delay_ms,
                hold_ms: timings.egg_hold_ms,
                fade_ms: timings.egg_fade_ms,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EggStage {
    Hidden,
    Pending,
    Shown,
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeartbeatEvent {
    Trigger,
    Settle,
    ShimmerDue,
    /// Idle hue picked by the host.
    SetHue(u16),
    EggStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeartbeatOutput {
    Beat { count: u32 },
    /// Time to pick a new idle hue.
    Shimmer,
    EasterEgg,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heartbeat {
    config: HeartbeatConfig,
    active: bool,
    reset_pending: bool,
    beats: u32,
    hue: Option<u16>,
    egg: EggStage,
}

impl Heartbeat {
    pub fn new(config: HeartbeatConfig) -> Self {
        Self {
            config,
            active: false,
            reset_pending: false,
            beats: 0,
            hue: None,
            egg: EggStage::Hidden,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn beats(&self) -> u32 {
        self.beats
    }

    pub fn idle_hue(&self) -> Option<u16> {
        self.hue
    }

    pub fn egg(&self) -> EggStage {
        self.egg
    }

    fn trigger(&mut self) -> Commands<Self> {
        if self.active || self.reset_pending {
            debug!("heartbeat trigger dropped inside debounce window");
            return Vec::new();
        }

        self.active = true;
        self.reset_pending = true;
        self.beats += 1;

        let mut commands = vec![
            Command::Emit(HeartbeatOutput::Beat { count: self.beats }),
            Command::once(SETTLE_TIMER, self.config.debounce_ms, HeartbeatEvent::Settle),
        ];
        if self.beats == 1 && self.config.shimmer_ms.is_some() {
            commands.push(Command::Cancel(SHIMMER_TIMER));
        }
        if let Some(egg) = &self.config.easter_egg {
            if self.beats == egg.after_beats {
                self.egg = EggStage::Pending;
                commands.push(Command::Emit(HeartbeatOutput::EasterEgg));
                commands.push(Command::once(EGG_TIMER, egg.delay_ms, HeartbeatEvent::EggStep));
            }
        }
        commands
    }

    fn egg_step(&mut self) -> Commands<Self> {
        let Some(egg) = &self.config.easter_egg else {
            return Vec::new();
        };
        let (next, wait) = match self.egg {
            EggStage::Pending => (EggStage::Shown, Some(egg.hold_ms)),
            EggStage::Shown => (EggStage::Fading, Some(egg.fade_ms)),
            EggStage::Fading | EggStage::Hidden => (EggStage::Hidden, None),
        };
        self.egg = next;
        wait.map(|ms| Command::once(EGG_TIMER, ms, HeartbeatEvent::EggStep))
            .into_iter()
            .collect()
    }
}

impl Controller for Heartbeat {
    type Event = HeartbeatEvent;
    type Output = HeartbeatOutput;

    fn mount(&mut self) -> Commands<Self> {
        match self.config.shimmer_ms {
            Some(ms) if self.beats == 0 => {
                vec![Command::every(SHIMMER_TIMER, ms, HeartbeatEvent::ShimmerDue)]
            }
            _ => Vec::new(),
        }
    }

    fn handle(&mut self, event: HeartbeatEvent) -> Commands<Self> {
        match event {
            HeartbeatEvent::Trigger => self.trigger(),
            HeartbeatEvent::Settle => {
                self.active = false;
                self.reset_pending = false;
                Vec::new()
            }
            HeartbeatEvent::ShimmerDue if self.beats == 0 => {
                vec![Command::Emit(HeartbeatOutput::Shimmer)]
            }
            HeartbeatEvent::ShimmerDue => Vec::new(),
            HeartbeatEvent::SetHue(hue) => {
                if self.beats == 0 {
                    self.hue = Some(hue.clamp(IDLE_HUES.start, IDLE_HUES.end - 1));
                }
                Vec::new()
            }
            HeartbeatEvent::EggStep => self.egg_step(),
        }
    }

    fn unmount(&mut self) -> Commands<Self> {
        vec![
            Command::Cancel(SETTLE_TIMER),
            Command::Cancel(SHIMMER_TIMER),
            Command::Cancel(EGG_TIMER),
        ]
    }
}
