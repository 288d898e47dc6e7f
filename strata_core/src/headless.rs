// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory render target.
//!
//! [`HeadlessTarget`] keeps the style state a DOM element would hold after a
//! commit and renders it back as CSS text, without a browser. The
//! transition-end signal is raised explicitly with
//! [`fire_transition_end`](HeadlessTarget::fire_transition_end).

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::target::{
    ListenerId, ListenerRegistry, RenderTarget, Transition, TransitionEndCallback,
};
use crate::transform::Transform3d;

/// A single style write, in the order the target received it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleWrite {
    /// `set_transition` was called.
    Transition(Option<Transition>),
    /// `set_transform` was called.
    Transform(Transform3d),
    /// `set_opacity` was called.
    Opacity(f32),
}

/// A render target that records style state in memory.
///
/// Clearing the transition only disables it: the last duration and timing
/// stay readable, the way clearing `transition-property` on a DOM element
/// leaves `transition-duration` in place.
#[derive(Debug, Default)]
pub struct HeadlessTarget {
    transition_enabled: bool,
    last_transition: Option<Transition>,
    transform: Option<Transform3d>,
    opacity: Option<f32>,
    writes: Vec<StyleWrite>,
    listeners: ListenerRegistry,
}

impl HeadlessTarget {
    /// Creates a target with no style set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active transition, or `None` if the last commit skipped it.
    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        if self.transition_enabled {
            self.last_transition
        } else {
            None
        }
    }

    /// The last written transform.
    #[must_use]
    pub fn transform(&self) -> Option<Transform3d> {
        self.transform
    }

    /// The last written opacity.
    #[must_use]
    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    /// Every style write since creation or the last
    /// [`take_writes`](Self::take_writes).
    #[must_use]
    pub fn writes(&self) -> &[StyleWrite] {
        &self.writes
    }

    /// Drains the write log.
    pub fn take_writes(&mut self) -> Vec<StyleWrite> {
        core::mem::take(&mut self.writes)
    }

    /// Renders a style property as CSS text.
    ///
    /// Recognized names: `transition-property`, `transition-duration`,
    /// `transition-timing-function`, `transform`, `opacity`. Unset or
    /// unrecognized properties return `None`.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        match property {
            "transition-property" => self.transition().map(|t| t.css_properties()),
            "transition-duration" => self.last_transition.map(|t| t.css_duration()),
            "transition-timing-function" => self.last_transition.map(|t| t.css_timing()),
            "transform" => self.transform.map(|t| t.to_string()),
            "opacity" => self.opacity.map(|o| format!("{o}")),
            _ => None,
        }
    }

    /// Number of listeners waiting for the transition-end signal.
    #[must_use]
    pub fn pending_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Whether the listener `id` is still waiting.
    #[must_use]
    pub fn is_pending(&self, id: ListenerId) -> bool {
        self.listeners.contains(id)
    }

    /// Raises the transition-end signal.
    ///
    /// Every pending listener is deregistered and then invoked once. Returns
    /// the number of callbacks invoked.
    pub fn fire_transition_end(&mut self) -> usize {
        let fired = self.listeners.take_all();
        let count = fired.len();
        for (_, callback) in fired {
            callback();
        }
        count
    }
}

impl RenderTarget for HeadlessTarget {
    fn set_transition(&mut self, transition: Option<&Transition>) {
        self.transition_enabled = transition.is_some();
        if let Some(t) = transition {
            self.last_transition = Some(*t);
        }
        self.writes.push(StyleWrite::Transition(transition.copied()));
    }

    fn set_transform(&mut self, transform: &Transform3d) {
        self.transform = Some(*transform);
        self.writes.push(StyleWrite::Transform(*transform));
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = Some(opacity);
        self.writes.push(StyleWrite::Opacity(opacity));
    }

    fn add_transition_end_listener(&mut self, callback: TransitionEndCallback) -> ListenerId {
        self.listeners.register(callback)
    }

    fn remove_transition_end_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }
}
