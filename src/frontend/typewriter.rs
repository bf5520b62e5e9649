//! Browser driver for [`crate::typewriter::Typewriter`].
//!
//! A run owns exactly one armed gloo timer at a time: a `Timeout` while the
//! start delay is pending, an `Interval` while characters are revealed, and
//! nothing once complete. Timer callbacks only hold a `Weak` to the run, so
//! after [`RevealRun`] is dropped no callback can reach the engine, and the
//! drop itself cancels whichever timer is armed.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::{Interval, Timeout};
use tracing::{error, warn};
use yew::prelude::*;

use crate::typewriter::{Step, Timer, Typewriter, TypewriterConfig, TypewriterState};

enum TimerHandle {
    Once(Timeout),
    Every(Interval),
}

impl TimerHandle {
    fn cancel(self) {
        match self {
            Self::Once(timeout) => drop(timeout.cancel()),
            Self::Every(interval) => drop(interval.cancel()),
        }
    }
}

struct Reveal {
    engine: Typewriter,
    armed: Option<(Timer, TimerHandle)>,
    publish: Callback<TypewriterState>,
}

pub struct RevealRun {
    inner: Rc<RefCell<Reveal>>,
}

impl RevealRun {
    pub fn start(engine: Typewriter, publish: Callback<TypewriterState>) -> Self {
        let inner = Rc::new(RefCell::new(Reveal {
            engine,
            armed: None,
            publish,
        }));
        rearm(&inner);
        Self { inner }
    }
}

impl Drop for RevealRun {
    fn drop(&mut self) {
        match self.inner.try_borrow_mut() {
            Ok(mut reveal) => {
                reveal.engine.cancel();
                if let Some((_, handle)) = reveal.armed.take() {
                    handle.cancel();
                }
            }
            Err(_) => error!("typewriter run dropped while a tick was in progress"),
        }
    }
}

fn rearm(inner: &Rc<RefCell<Reveal>>) {
    let mut reveal = inner.borrow_mut();
    let wanted = reveal.engine.timer();
    if reveal.armed.as_ref().map(|(timer, _)| *timer) == wanted {
        return;
    }

    if let Some((_, previous)) = reveal.armed.take() {
        previous.cancel();
    }

    let weak = Rc::downgrade(inner);
    reveal.armed = wanted.map(|timer| {
        let handle = match timer {
            Timer::Once(ms) => TimerHandle::Once(Timeout::new(ms, move || on_fire(&weak))),
            Timer::Every(ms) => TimerHandle::Every(Interval::new(ms, move || on_fire(&weak))),
        };
        (timer, handle)
    });
}

fn on_fire(weak: &Weak<RefCell<Reveal>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };

    let published = {
        let mut reveal = inner.borrow_mut();
        match reveal.engine.fire() {
            None => return,
            Some(Step::Started) => None,
            Some(_) => Some((reveal.engine.state(), reveal.publish.clone())),
        }
    };

    if let Some((state, publish)) = published {
        publish.emit(state);
    }
    rearm(&inner);
}

/// Restarts from an empty prefix whenever `config` changes.
#[hook]
pub fn use_typewriter(config: TypewriterConfig) -> TypewriterState {
    let state = use_state(TypewriterState::default);

    {
        let state = state.clone();
        use_effect_with(config, move |config| {
            state.set(TypewriterState::default());

            let run = match Typewriter::new(config) {
                Ok(engine) => Some(RevealRun::start(
                    engine,
                    Callback::from(move |next| state.set(next)),
                )),
                Err(err) => {
                    warn!(%err, "typewriter disabled");
                    None
                }
            };

            move || drop(run)
        });
    }

    (*state).clone()
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub config: TypewriterConfig,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let state = use_typewriter(props.config.clone());

    html! {
        <span
            class={classes!(
                "typewriter",
                props.class.clone(),
                state.is_complete.then_some("is-complete"),
            )}
            aria-label={props.config.text.clone()}
        >
            { for state.segments.iter().map(|segment| {
                if segment.highlighted {
                    html! { <span class="highlight">{segment.text.clone()}</span> }
                } else {
                    html! { <>{segment.text.clone()}</> }
                }
            }) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    type Published = Rc<RefCell<Vec<TypewriterState>>>;

    fn recording_run(text: &str, speed_ms: i32) -> (RevealRun, Published) {
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = published.clone();
        let engine = Typewriter::new(&TypewriterConfig::new(text).with_speed(speed_ms)).unwrap();
        let run = RevealRun::start(
            engine,
            Callback::from(move |state| sink.borrow_mut().push(state)),
        );
        (run, published)
    }

    #[wasm_bindgen_test]
    async fn dropped_run_publishes_nothing_more() {
        let (run, published) = recording_run("0123456789", 25);

        TimeoutFuture::new(100).await;
        drop(run);
        let frozen = published.borrow().clone();
        assert!(!frozen.is_empty());
        assert!(frozen.iter().all(|state| !state.is_complete));

        TimeoutFuture::new(400).await;
        assert_eq!(*published.borrow(), frozen);
    }

    #[wasm_bindgen_test]
    async fn finished_run_disarms_its_timer() {
        let (run, published) = recording_run("abc", 10);

        TimeoutFuture::new(200).await;
        let states = published.borrow().clone();
        assert_eq!(states.len(), 3);
        assert!(states.last().is_some_and(|state| state.is_complete));
        assert!(run.inner.borrow().armed.is_none());
    }
}
