use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{window, Document};
use yew::prelude::*;

use super::parallax::current_viewport;
use crate::scroll::{ScrollMetrics, ScrollSnapshot, ScrollTracker, SectionLayout, SectionRect};

struct DomLayout {
    document: Option<Document>,
}

impl SectionLayout for DomLayout {
    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        let rect = self
            .document
            .as_ref()?
            .get_element_by_id(id)?
            .get_bounding_client_rect();
        Some(SectionRect::new(rect.top(), rect.bottom()))
    }
}

fn sample_metrics() -> ScrollMetrics {
    let Some(win) = window() else {
        return ScrollMetrics::default();
    };

    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let viewport_height = current_viewport().map_or(0.0, |viewport| viewport.height);
    let document_height = win
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);

    ScrollMetrics {
        scroll_y,
        viewport_height,
        document_height,
    }
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Keeps a [`ScrollTracker`] in sync with the page.
///
/// Scroll and resize events are coalesced to one recomputation per animation
/// frame; the frame always samples the latest positions, so the settled
/// result matches recomputing on every event. Dropping the watcher removes
/// both listeners and any pending frame.
struct ScrollWatcher {
    _listeners: Vec<EventListener>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        // The pending frame's callback holds a clone of `frame`; taking it
        // cancels the callback and breaks that cycle.
        if let Ok(mut frame) = self.frame.try_borrow_mut() {
            frame.take();
        }
    }
}

impl ScrollWatcher {
    fn attach(tracker: ScrollTracker, publish: Callback<ScrollSnapshot>) -> Self {
        let tracker = Rc::new(RefCell::new(tracker));
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

        let recompute = Rc::new(move || {
            let layout = DomLayout {
                document: window().and_then(|w| w.document()),
            };
            let changed = tracker.borrow_mut().update(&sample_metrics(), &layout);
            if changed {
                publish.emit(tracker.borrow().snapshot().clone());
            }
        });
        recompute();

        let schedule = {
            let frame = frame.clone();
            Rc::new(move || {
                if frame.borrow().is_some() {
                    return;
                }
                let slot = frame.clone();
                let recompute = recompute.clone();
                let pending = request_animation_frame(move |_timestamp| {
                    slot.borrow_mut().take();
                    recompute();
                });
                *frame.borrow_mut() = Some(pending);
            })
        };

        let listeners: Vec<EventListener> = window()
            .map(|win| {
                ["scroll", "resize"]
                    .into_iter()
                    .map(|event| {
                        let schedule = schedule.clone();
                        EventListener::new(&win, event, move |_| schedule())
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            _listeners: listeners,
            frame,
        }
    }
}

#[hook]
pub fn use_scroll_tracker(section_ids: Vec<String>) -> ScrollSnapshot {
    let snapshot = use_state(ScrollSnapshot::default);

    {
        let snapshot = snapshot.clone();
        use_effect_with(section_ids, move |ids| {
            let watcher = ScrollWatcher::attach(
                ScrollTracker::new(ids.iter().cloned()),
                Callback::from(move |next| snapshot.set(next)),
            );
            move || drop(watcher)
        });
    }

    (*snapshot).clone()
}
