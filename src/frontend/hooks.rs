use super::dom;
use crate::scroll::RevealGate;
use crate::visibility::{observer_thresholds, viewport_coverage, VisibilityLatch};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

/// Events that re-evaluate scroll-position effects.
pub const SCROLL_EVENTS: &[&str] = &["scroll", "resize", "load"];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ListenOn {
    Window,
    Document,
}

impl ListenOn {
    fn event_target(self) -> Option<EventTarget> {
        match self {
            Self::Window => window().map(EventTarget::from),
            Self::Document => dom::document().map(EventTarget::from),
        }
    }
}

/// Attaches `handler` to `events` for the component's lifetime.
///
/// Only the handler from the first render is kept, so it must capture
/// stable handles (dispatchers, setters, node refs, shared cells).
#[hook]
pub fn use_global_listeners<F>(target: ListenOn, events: &'static [&'static str], handler: F)
where
    F: Fn(&Event) + 'static,
{
    use_effect_with(target, move |target| {
        let handler = Rc::new(handler);
        let listeners: Vec<EventListener> = target
            .event_target()
            .map(|event_target| {
                events
                    .iter()
                    .map(|event_type| {
                        let handler = Rc::clone(&handler);
                        EventListener::new(&event_target, *event_type, move |event| handler(event))
                    })
                    .collect()
            })
            .unwrap_or_default();

        move || drop(listeners)
    });
}

/// Node ref plus whether it has scrolled into view. Once revealed, stays
/// revealed.
#[hook]
pub fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);
    let gate = use_mut_ref(RevealGate::default);

    let check = {
        let node = node.clone();
        let revealed = revealed.setter();
        Rc::new(move || {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let top = element.get_bounding_client_rect().top();
            if gate.borrow_mut().observe(top, dom::viewport_height()) {
                revealed.set(true);
            }
        })
    };

    {
        let check = Rc::clone(&check);
        use_global_listeners(ListenOn::Window, SCROLL_EVENTS, move |_| check());
    }
    use_effect_with((), move |_| {
        check();
        || ()
    });

    (node, *revealed)
}

/// `true` from the first time `node` counts as seen at `threshold`. The
/// observer disconnects as soon as it fires.
#[hook]
pub fn use_visible_once(node: NodeRef, threshold: f64) -> bool {
    let triggered = use_state_eq(|| false);

    {
        let triggered = triggered.setter();
        use_effect_with(node, move |node| {
            let latch = RefCell::new(VisibilityLatch::new(threshold));
            let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> = Rc::default();

            let callback = {
                let observer_slot = Rc::clone(&observer_slot);
                Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let coverage = entry
                            .root_bounds()
                            .map(|root| {
                                viewport_coverage(entry.intersection_rect().height(), root.height())
                            })
                            .unwrap_or(0.0);
                        if latch.borrow_mut().observe_with_coverage(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            coverage,
                        ) {
                            triggered.set(true);
                            if let Some(observer) = observer_slot.borrow().as_ref() {
                                observer.disconnect();
                            }
                        }
                    }
                })
            };

            let options = IntersectionObserverInit::new();
            let steps: js_sys::Array = observer_thresholds(threshold)
                .into_iter()
                .map(JsValue::from_f64)
                .collect();
            options.set_threshold(&steps);
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .ok();

            if let (Some(observer), Some(element)) = (observer.as_ref(), node.cast::<Element>()) {
                observer.observe(&element);
            }
            *observer_slot.borrow_mut() = observer;

            move || {
                if let Some(observer) = observer_slot.borrow_mut().take() {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }

    *triggered
}
