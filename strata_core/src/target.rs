// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-target contract for platform integrations.
//!
//! A *render target* is the visual element a
//! [`TransformStack`](crate::compositor::TransformStack) commits to. Each
//! target provides:
//!
//! - **Style surface**: typed setters for the transition configuration, the
//!   transform and the opacity. A DOM target maps these to CSS properties; a
//!   native compositor maps them to layer properties.
//!
//! - **Transition-end signal**: one-shot listeners that the target invokes
//!   when the visual transition started by a commit finishes. Listeners are
//!   identified by [`ListenerId`] and must be removed by the target *before*
//!   their callback runs, so a second signal never re-invokes them.
//!
//! [`ListenerRegistry`] implements the listener bookkeeping for targets that
//! do not get it from their platform.
//!
//! # Crate boundaries
//!
//! `strata_core` owns the stack, the commit protocol, this contract and the
//! in-memory [`HeadlessTarget`](crate::headless::HeadlessTarget). Backend
//! crates (e.g. `strata_backend_web`) depend on `strata_core` and provide the
//! platform glue.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::timing::TimingFunction;
use crate::transform::Transform3d;

/// Callback invoked once when a transition ends.
pub type TransitionEndCallback = Box<dyn FnOnce() + 'static>;

/// Identifies a transition-end listener registered on a target.
///
/// Targets assign these; the compositor only hands them back for removal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Debug for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerId({})", self.0)
    }
}

/// A style property animated by a commit's transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    /// The transform.
    Transform,
    /// The opacity.
    Opacity,
}

impl TransitionProperty {
    /// CSS property name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Opacity => "opacity",
        }
    }
}

/// Transition configuration written by a non-skipped commit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transition {
    /// Duration in seconds, applied to every animated property.
    pub duration: Option<f64>,
    /// Timing function, applied to every animated property.
    pub timing: Option<TimingFunction>,
}

impl Transition {
    /// Properties every commit animates, in order.
    pub const PROPERTIES: [TransitionProperty; 2] =
        [TransitionProperty::Transform, TransitionProperty::Opacity];

    /// CSS `transition-property` value: `"transform, opacity"`.
    #[must_use]
    pub fn css_properties(&self) -> String {
        Self::PROPERTIES
            .iter()
            .map(|p| p.css_name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// CSS `transition-duration` value.
    ///
    /// One entry per animated property, each in seconds: a duration of `0.3`
    /// renders as `"0.3s, 0.3s"`. An unset duration renders as `0s`.
    #[must_use]
    pub fn css_duration(&self) -> String {
        let seconds = self.duration.unwrap_or(0.0);
        Self::PROPERTIES
            .iter()
            .map(|_| alloc::format!("{seconds}s"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// CSS `transition-timing-function` value; `ease` when unset.
    #[must_use]
    pub fn css_timing(&self) -> String {
        self.timing.unwrap_or_default().to_string()
    }
}

/// Receives committed state and reports transition completion.
///
/// Both DOM-based and in-memory targets implement this trait, enabling test
/// doubles for the commit protocol.
pub trait RenderTarget {
    /// Configures the transition used for the following style writes.
    ///
    /// `None` clears the transition so the writes apply instantly.
    fn set_transition(&mut self, transition: Option<&Transition>);

    /// Writes the transform.
    fn set_transform(&mut self, transform: &Transform3d);

    /// Writes the opacity.
    fn set_opacity(&mut self, opacity: f32);

    /// Registers a one-shot transition-end listener.
    ///
    /// The target must deregister the listener before invoking `callback`,
    /// and must invoke it at most once.
    fn add_transition_end_listener(&mut self, callback: TransitionEndCallback) -> ListenerId;

    /// Removes a pending listener without invoking it.
    ///
    /// Returns `false` if `id` already fired or was never registered.
    fn remove_transition_end_listener(&mut self, id: ListenerId) -> bool;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn set_transition(&mut self, transition: Option<&Transition>) {
        (**self).set_transition(transition);
    }

    fn set_transform(&mut self, transform: &Transform3d) {
        (**self).set_transform(transform);
    }

    fn set_opacity(&mut self, opacity: f32) {
        (**self).set_opacity(opacity);
    }

    fn add_transition_end_listener(&mut self, callback: TransitionEndCallback) -> ListenerId {
        (**self).add_transition_end_listener(callback)
    }

    fn remove_transition_end_listener(&mut self, id: ListenerId) -> bool {
        (**self).remove_transition_end_listener(id)
    }
}

/// One-shot listener table.
///
/// Ids are allocated monotonically and never reused, so a stale id can never
/// remove a newer listener.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(ListenerId, TransitionEndCallback)>,
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("next_id", &self.next_id)
            .field(
                "pending",
                &self.entries.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `callback` and returns its id.
    pub fn register(&mut self, callback: TransitionEndCallback) -> ListenerId {
        let id = self.allocate();
        self.entries.push((id, callback));
        id
    }

    /// Allocates an id without storing a callback, for targets that keep the
    /// callback elsewhere.
    pub fn allocate(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Removes the listener with the given id, returning its callback.
    pub fn remove(&mut self, id: ListenerId) -> Option<TransitionEndCallback> {
        let pos = self.entries.iter().position(|(l, _)| *l == id)?;
        Some(self.entries.remove(pos).1)
    }

    /// Removes and returns every pending listener in registration order.
    ///
    /// Callers invoke the returned callbacks after this call, so listeners
    /// registered from inside a callback land in the next batch.
    pub fn take_all(&mut self) -> Vec<(ListenerId, TransitionEndCallback)> {
        core::mem::take(&mut self.entries)
    }

    /// Whether `id` is still pending.
    #[must_use]
    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(l, _)| *l == id)
    }

    /// Number of pending listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listener is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
