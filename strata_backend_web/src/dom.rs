// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM render target.
//!
//! [`DomTarget`] writes commits to an `HtmlElement`'s inline style and maps
//! transition-end listeners onto the element's `transitionend` event.
//!
//! Each listener is a separate JS closure. The first `transitionend` the
//! element sees removes the closure from the element and then invokes the
//! callback, so a later event never re-invokes it.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use strata_core::target::{
    ListenerId, ListenerRegistry, RenderTarget, Transition, TransitionEndCallback,
};
use strata_core::transform::Transform3d;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement};

const TRANSITION_END: &str = "transitionend";

type EventClosure = Closure<dyn FnMut(Event)>;

/// Listener state shared between the target and its JS closures.
struct Listeners {
    /// Closures still attached to the element.
    active: Vec<(ListenerId, EventClosure)>,

    /// Closures that have fired and been detached.
    ///
    /// A closure cannot be freed while it is running, so these are kept until
    /// the next registration made outside of any callback.
    retired: Vec<EventClosure>,

    /// Number of callbacks currently on the call stack.
    dispatching: u32,
}

/// A [`RenderTarget`] backed by a DOM element.
///
/// Dropping the target detaches every pending listener; their callbacks
/// never run.
pub struct DomTarget {
    element: HtmlElement,
    ids: ListenerRegistry,
    listeners: Rc<RefCell<Listeners>>,
}

impl core::fmt::Debug for DomTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let listeners = self.listeners.borrow();
        f.debug_struct("DomTarget")
            .field("element", &"HtmlElement")
            .field("pending", &listeners.active.len())
            .field("retired", &listeners.retired.len())
            .finish_non_exhaustive()
    }
}

impl DomTarget {
    /// Creates a target that styles `element`.
    #[must_use]
    pub fn new(element: HtmlElement) -> Self {
        Self {
            element,
            ids: ListenerRegistry::new(),
            listeners: Rc::new(RefCell::new(Listeners {
                active: Vec::new(),
                retired: Vec::new(),
                dispatching: 0,
            })),
        }
    }

    /// Returns a reference to the styled element.
    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Number of listeners still attached to the element.
    #[must_use]
    pub fn pending_listeners(&self) -> usize {
        self.listeners.borrow().active.len()
    }
}

impl RenderTarget for DomTarget {
    fn set_transition(&mut self, transition: Option<&Transition>) {
        let s = self.element.style();
        match transition {
            None => {
                let _ = s.remove_property("transition-property");
            }
            Some(t) => {
                for (name, value) in transition_declarations(t) {
                    let _ = s.set_property(name, &value);
                }
            }
        }
    }

    fn set_transform(&mut self, transform: &Transform3d) {
        let _ = self
            .element
            .style()
            .set_property("transform", &transform.to_string());
    }

    fn set_opacity(&mut self, opacity: f32) {
        let _ = self
            .element
            .style()
            .set_property("opacity", &format!("{opacity}"));
    }

    fn add_transition_end_listener(&mut self, callback: TransitionEndCallback) -> ListenerId {
        let id = self.ids.allocate();
        {
            let mut listeners = self.listeners.borrow_mut();
            if listeners.dispatching == 0 {
                listeners.retired.clear();
            }
        }

        let shared = Rc::downgrade(&self.listeners);
        let element = self.element.clone();
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            let Some(callback) = callback.take() else {
                return;
            };
            dispatch(&shared, &element, id, callback);
        }) as Box<dyn FnMut(Event)>);

        let _ = self
            .element
            .add_event_listener_with_callback(TRANSITION_END, closure.as_ref().unchecked_ref());
        self.listeners.borrow_mut().active.push((id, closure));
        id
    }

    fn remove_transition_end_listener(&mut self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let Some(pos) = listeners.active.iter().position(|(l, _)| *l == id) else {
            return false;
        };
        let (_, closure) = listeners.active.remove(pos);
        let _ = self
            .element
            .remove_event_listener_with_callback(TRANSITION_END, closure.as_ref().unchecked_ref());
        if listeners.dispatching == 0 {
            drop(closure);
        } else {
            listeners.retired.push(closure);
        }
        true
    }
}

impl Drop for DomTarget {
    fn drop(&mut self) {
        let mut listeners = self.listeners.borrow_mut();
        for (_, closure) in listeners.active.drain(..) {
            let _ = self
                .element
                .remove_event_listener_with_callback(TRANSITION_END, closure.as_ref().unchecked_ref());
        }
    }
}

/// Detaches listener `id` from `element`, then runs its callback.
fn dispatch(
    shared: &Weak<RefCell<Listeners>>,
    element: &HtmlElement,
    id: ListenerId,
    callback: TransitionEndCallback,
) {
    // The target detaches everything on drop, so a dead `Weak` means the
    // event raced the drop.
    let Some(shared) = shared.upgrade() else {
        return;
    };
    {
        let mut listeners = shared.borrow_mut();
        if let Some(pos) = listeners.active.iter().position(|(l, _)| *l == id) {
            let (_, closure) = listeners.active.remove(pos);
            let _ = element
                .remove_event_listener_with_callback(TRANSITION_END, closure.as_ref().unchecked_ref());
            listeners.retired.push(closure);
        }
        listeners.dispatching += 1;
    }
    // No borrow is held here: the callback may commit again on this target.
    callback();
    shared.borrow_mut().dispatching -= 1;
}

/// CSS declarations written for an enabled transition, in write order.
fn transition_declarations(t: &Transition) -> [(&'static str, String); 3] {
    [
        ("transition-property", t.css_properties()),
        ("transition-duration", t.css_duration()),
        ("transition-timing-function", t.css_timing()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::timing::TimingFunction;

    #[test]
    fn transition_declarations_cover_both_properties() {
        let decls = transition_declarations(&Transition {
            duration: Some(0.3),
            timing: Some(TimingFunction::EaseIn),
        });
        assert_eq!(decls[0], ("transition-property", "transform, opacity".into()));
        assert_eq!(decls[1], ("transition-duration", "0.3s, 0.3s".into()));
        assert_eq!(decls[2], ("transition-timing-function", "ease-in".into()));
    }

    #[test]
    fn transition_declarations_default_timing_is_ease() {
        let decls = transition_declarations(&Transition::default());
        assert_eq!(decls[1].1, "0s, 0s");
        assert_eq!(decls[2].1, "ease");
    }
}
