//! Hosting a [`Controller`] inside a function component.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Deref;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::controllers::{apply_commands, shut_down, Command, Controller, TimerHost, TimerKey};

// Dropping either handle clears the browser timer.
enum TimerHandle {
    #[allow(dead_code)]
    Once(Timeout),
    #[allow(dead_code)]
    Every(Interval),
}

/// `gloo-timers` backed timers that feed fired events back into a component.
pub struct BrowserTimers<E: 'static> {
    running: HashMap<TimerKey, TimerHandle>,
    sink: Callback<E>,
}

impl<E: 'static> BrowserTimers<E> {
    pub fn new(sink: Callback<E>) -> Self {
        Self {
            running: HashMap::new(),
            sink,
        }
    }
}

impl<E: Clone + 'static> TimerHost<E> for BrowserTimers<E> {
    fn start(&mut self, timer: TimerKey, delay_ms: u32, repeat: bool, event: E) {
        let sink = self.sink.clone();
        let handle = if repeat {
            TimerHandle::Every(Interval::new(delay_ms, move || sink.emit(event.clone())))
        } else {
            TimerHandle::Once(Timeout::new(delay_ms, move || sink.emit(event)))
        };
        self.running.insert(timer, handle);
    }

    fn cancel(&mut self, timer: TimerKey) {
        self.running.remove(timer);
    }

    fn clear(&mut self) {
        self.running.clear();
    }
}

pub enum HostAction<E> {
    Mount,
    Event(E),
}

pub struct Hosted<C: Controller> {
    controller: C,
    outbox: Rc<RefCell<Vec<Command<C::Event, C::Output>>>>,
}

impl<C> Reducible for Hosted<C>
where
    C: Controller + Clone + 'static,
{
    type Action = HostAction<C::Event>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();
        let commands = match action {
            HostAction::Mount => controller.mount(),
            HostAction::Event(event) => controller.handle(event),
        };
        self.outbox.borrow_mut().extend(commands);
        Rc::new(Self {
            controller,
            outbox: self.outbox.clone(),
        })
    }
}

/// Sends events to a hosted controller from callbacks and futures.
pub struct ControllerDispatcher<C: Controller + Clone + 'static> {
    inner: UseReducerDispatcher<Hosted<C>>,
}

impl<C: Controller + Clone + 'static> Clone for ControllerDispatcher<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C: Controller + Clone + 'static> ControllerDispatcher<C> {
    pub fn dispatch(&self, event: C::Event) {
        self.inner.dispatch(HostAction::Event(event));
    }
}

pub struct UseControllerHandle<C: Controller + Clone + 'static> {
    state: UseReducerHandle<Hosted<C>>,
}

impl<C: Controller + Clone + 'static> Clone for UseControllerHandle<C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<C: Controller + Clone + 'static> Deref for UseControllerHandle<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.state.controller
    }
}

impl<C: Controller + Clone + 'static> UseControllerHandle<C> {
    pub fn dispatch(&self, event: C::Event) {
        self.state.dispatch(HostAction::Event(event));
    }

    pub fn dispatcher(&self) -> ControllerDispatcher<C> {
        ControllerDispatcher {
            inner: self.state.dispatcher(),
        }
    }

    /// A callback that maps its input to an event for this controller.
    pub fn callback<IN, F>(&self, f: F) -> Callback<IN>
    where
        IN: 'static,
        F: Fn(IN) -> C::Event + 'static,
    {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |input| dispatcher.dispatch(HostAction::Event(f(input))))
    }
}

/// Run a controller for the lifetime of the calling component.
///
/// The controller is mounted after the first render. When the component goes
/// away the latest controller is unmounted, its last outputs are delivered,
/// and every `gloo-timers` handle is dropped, so no callback outlives the
/// view. Outputs go to `on_output` after each render, together with a
/// dispatcher for reporting back (playback results, delivery outcomes).
#[hook]
pub fn use_controller<C, F>(
    init: F,
    on_output: Callback<(C::Output, ControllerDispatcher<C>)>,
) -> UseControllerHandle<C>
where
    C: Controller + Clone + 'static,
    F: FnOnce() -> C,
{
    let state = use_reducer(move || Hosted {
        controller: init(),
        outbox: Rc::new(RefCell::new(Vec::new())),
    });

    let timers = {
        let dispatcher = state.dispatcher();
        use_mut_ref(move || {
            BrowserTimers::new(Callback::from(move |event| {
                dispatcher.dispatch(HostAction::Event(event))
            }))
        })
    };

    // Mirrors of the last rendered state and output handler for the unmount path.
    let latest = use_mut_ref(|| None::<UseReducerHandle<Hosted<C>>>);
    let latest_output = {
        let on_output = on_output.clone();
        use_mut_ref(move || on_output)
    };

    {
        let dispatcher = state.dispatcher();
        let timers = timers.clone();
        let latest = latest.clone();
        let latest_output = latest_output.clone();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(HostAction::Mount);
                move || {
                    let Some(hosted) = latest.borrow_mut().take() else {
                        timers.borrow_mut().clear();
                        return;
                    };
                    let on_output = latest_output.borrow().clone();
                    let back = ControllerDispatcher {
                        inner: hosted.dispatcher(),
                    };
                    let mut controller = hosted.controller.clone();
                    shut_down(&mut controller, &mut *timers.borrow_mut(), |output| {
                        on_output.emit((output, back.clone()))
                    });
                }
            },
            (),
        );
    }

    {
        let outbox = state.outbox.clone();
        let timers = timers.clone();
        let dispatcher = ControllerDispatcher {
            inner: state.dispatcher(),
        };
        let rendered = state.clone();
        use_effect(move || {
            *latest.borrow_mut() = Some(rendered);
            *latest_output.borrow_mut() = on_output.clone();
            let commands: Vec<_> = outbox.borrow_mut().drain(..).collect();
            if !commands.is_empty() {
                apply_commands(&mut *timers.borrow_mut(), commands, |output| {
                    on_output.emit((output, dispatcher.clone()))
                });
            }
            || ()
        });
    }

    UseControllerHandle { state }
}
