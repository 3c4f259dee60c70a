//! UI state machines.
//!
//! Each controller owns its state exclusively and reacts to events with a
//! list of [`Command`]s. Commands are the only way a controller reaches the
//! outside world: timers are started and cancelled by key, and anything the
//! page has to do (play a video, post a message, show a celebration) is an
//! output the host performs. Nothing here touches the DOM, so the same
//! controller runs under `gloo-timers` in the browser and under
//! [`schedule::VirtualTimers`] in tests.

pub mod carousel;
pub mod contact_form;
pub mod heartbeat;
pub mod modal;
pub mod reveal;
pub mod schedule;

/// Name of a timer, unique within one controller.
pub type TimerKey = &'static str;

#[derive(Debug, Clone, PartialEq)]
pub enum Command<E, O> {
    /// Start (or restart) a timer. A running timer with the same key is replaced.
    Start {
        timer: TimerKey,
        delay_ms: u32,
        repeat: bool,
        event: E,
    },
    Cancel(TimerKey),
    Emit(O),
}

impl<E, O> Command<E, O> {
    pub fn once(timer: TimerKey, delay_ms: u32, event: E) -> Self {
        Command::Start { timer, delay_ms, repeat: false, event }
    }

    pub fn every(timer: TimerKey, delay_ms: u32, event: E) -> Self {
        Command::Start { timer, delay_ms, repeat: true, event }
    }
}

pub type Commands<C> = Vec<Command<<C as Controller>::Event, <C as Controller>::Output>>;

pub trait Controller {
    type Event: Clone + 'static;
    type Output: 'static;

    /// Called once when the owning view appears.
    fn mount(&mut self) -> Commands<Self> {
        Vec::new()
    }

    fn handle(&mut self, event: Self::Event) -> Commands<Self>;

    /// Called once when the owning view goes away. Hosts drop every timer
    /// after this regardless of what it returns.
    fn unmount(&mut self) -> Commands<Self> {
        Vec::new()
    }
}

/// Where timers live. Implemented by the browser host and by virtual time.
pub trait TimerHost<E> {
    fn start(&mut self, timer: TimerKey, delay_ms: u32, repeat: bool, event: E);
    fn cancel(&mut self, timer: TimerKey);
    /// Drop every running timer.
    fn clear(&mut self);
}

/// Perform `commands` against `timers`, handing outputs to `emit`.
pub fn apply_commands<E, O, H, F>(timers: &mut H, commands: Vec<Command<E, O>>, mut emit: F)
where
    H: TimerHost<E>,
    F: FnMut(O),
{
    for command in commands {
        match command {
            Command::Start { timer, delay_ms, repeat, event } => {
                timers.start(timer, delay_ms, repeat, event)
            }
            Command::Cancel(timer) => timers.cancel(timer),
            Command::Emit(output) => emit(output),
        }
    }
}

/// Unmount `controller`: perform what it asks for on the way out, then drop
/// every timer it still owns.
pub fn shut_down<C, H, F>(controller: &mut C, timers: &mut H, emit: F)
where
    C: Controller,
    H: TimerHost<C::Event>,
    F: FnMut(C::Output),
{
    let commands = controller.unmount();
    apply_commands(timers, commands, emit);
    timers.clear();
}

/// Index after `index` in a ring of `len` items.
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// Index before `index` in a ring of `len` items.
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}
