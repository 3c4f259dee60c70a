//! Deterministic virtual time for driving controllers without a browser.

use super::{apply_commands, shut_down, Controller, TimerHost, TimerKey};

struct Entry<E> {
    timer: TimerKey,
    deadline: u64,
    period: Option<u32>,
    event: E,
    seq: u64,
}

/// A clock that only moves when told to.
///
/// Due timers fire in deadline order; timers due at the same instant fire in
/// the order they were started. Repeating timers re-arm one period after the
/// deadline they fired at.
pub struct VirtualTimers<E> {
    now: u64,
    next_seq: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for VirtualTimers<E> {
    fn default() -> Self {
        Self { now: 0, next_seq: 0, entries: Vec::new() }
    }
}

impl<E: Clone> VirtualTimers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn is_running(&self, timer: TimerKey) -> bool {
        self.entries.iter().any(|e| e.timer == timer)
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Deadline of `timer`, if it is running.
    pub fn deadline(&self, timer: TimerKey) -> Option<u64> {
        self.entries.iter().find(|e| e.timer == timer).map(|e| e.deadline)
    }

    /// Fire the earliest timer due at or before `until`, moving the clock to
    /// its deadline.
    pub fn fire_next(&mut self, until: u64) -> Option<(TimerKey, E)> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= until)
            .min_by_key(|(_, e)| (e.deadline, e.seq))
            .map(|(pos, _)| pos)?;

        let deadline = self.entries[pos].deadline;
        self.now = self.now.max(deadline);

        match self.entries[pos].period {
            Some(period) => {
                let seq = self.bump_seq();
                let entry = &mut self.entries[pos];
                entry.deadline = deadline + u64::from(period.max(1));
                entry.seq = seq;
                Some((entry.timer, entry.event.clone()))
            }
            None => {
                let entry = self.entries.remove(pos);
                Some((entry.timer, entry.event))
            }
        }
    }

    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

impl<E: Clone> TimerHost<E> for VirtualTimers<E> {
    fn start(&mut self, timer: TimerKey, delay_ms: u32, repeat: bool, event: E) {
        self.cancel(timer);
        let seq = self.bump_seq();
        self.entries.push(Entry {
            timer,
            deadline: self.now + u64::from(delay_ms),
            period: repeat.then_some(delay_ms),
            event,
            seq,
        });
    }

    fn cancel(&mut self, timer: TimerKey) {
        self.entries.retain(|e| e.timer != timer);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Runs a controller against [`VirtualTimers`], collecting its outputs.
pub struct Harness<C: Controller> {
    controller: C,
    timers: VirtualTimers<C::Event>,
    outputs: Vec<C::Output>,
}

impl<C: Controller> Harness<C> {
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            timers: VirtualTimers::new(),
            outputs: Vec::new(),
        }
    }

    /// A harness that has already mounted its controller.
    pub fn mounted(controller: C) -> Self {
        let mut harness = Self::new(controller);
        harness.mount();
        harness
    }

    pub fn mount(&mut self) {
        let commands = self.controller.mount();
        self.apply(commands);
    }

    pub fn unmount(&mut self) {
        let outputs = &mut self.outputs;
        shut_down(&mut self.controller, &mut self.timers, |output| outputs.push(output));
    }

    pub fn send(&mut self, event: C::Event) {
        let commands = self.controller.handle(event);
        self.apply(commands);
    }

    /// Move virtual time forward, firing every timer that comes due.
    pub fn advance(&mut self, ms: u64) {
        let until = self.timers.now() + ms;
        while let Some((_, event)) = self.timers.fire_next(until) {
            let commands = self.controller.handle(event);
            self.apply(commands);
        }
        self.timers.settle(until);
    }

    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn timers(&self) -> &VirtualTimers<C::Event> {
        &self.timers
    }

    pub fn outputs(&self) -> &[C::Output] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<C::Output> {
        std::mem::take(&mut self.outputs)
    }

    fn apply(&mut self, commands: super::Commands<C>) {
        let outputs = &mut self.outputs;
        apply_commands(&mut self.timers, commands, |output| outputs.push(output));
    }
}
