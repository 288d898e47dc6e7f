// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform compositor and commit protocol.
//!
//! [`TransformStack`] owns a [`MatrixStack`] plus the persisted
//! [`TransitionOptions`], and writes both to a [`RenderTarget`] in a single
//! [`commit`](TransformStack::commit).
//!
//! ```text
//!   rotate / scale / translate ──► current frame (read-modify-write)
//!   push_matrix / pop_matrix   ──► which frame is current
//!
//!   commit(target, options)
//!     1. take skip_transition + on_finish, merge the rest into options
//!     2. Supersede policy: remove the previous pending listener
//!     3. set_transition(None | Some(duration, timing))
//!     4. on_finish: call now, or register a one-shot transition-end listener
//!     5. set_transform(cumulative transform)
//!     6. set_opacity(opacity), if set
//! ```
//!
//! Nothing in a commit mutates the matrix stack. Overlapping commits are
//! allowed: the target's style surface is last-write-wins, and the
//! [`OverlapPolicy`] decides what happens to a listener whose transition was
//! interrupted.

use core::fmt;

use crate::axes::Axes;
use crate::error::OptionError;
use crate::options::{OptionValue, OptionsUpdate, OverlapPolicy, TransitionOptions};
use crate::stack::MatrixStack;
use crate::target::{ListenerId, RenderTarget, Transition, TransitionEndCallback};
use crate::timing::TimingFunction;
use crate::trace::{CommitEvent, Completion, SupersedeEvent, Tracer, TransitionMode};
use crate::transform::Transform3d;

/// One-shot arguments for a single [`commit`](TransformStack::commit).
///
/// `skip_transition` and `on_finish` apply to this commit only. The
/// [`OptionsUpdate`] is merged into the persisted options before the commit
/// writes anything, so it also affects later commits.
#[derive(Default)]
pub struct CommitOptions {
    /// Clear the transition so this commit applies instantly.
    pub skip_transition: bool,
    /// Called once when this commit's transition ends.
    pub on_finish: Option<TransitionEndCallback>,
    /// Persisted options to change before committing.
    pub update: OptionsUpdate,
}

impl fmt::Debug for CommitOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommitOptions")
            .field("skip_transition", &self.skip_transition)
            .field("on_finish", &self.on_finish.as_ref().map(|_| "FnOnce"))
            .field("update", &self.update)
            .finish()
    }
}

impl CommitOptions {
    /// Creates empty commit options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips the transition for this commit.
    #[must_use]
    pub fn skip_transition(mut self) -> Self {
        self.skip_transition = true;
        self
    }

    /// Sets the completion callback.
    #[must_use]
    pub fn on_finish(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_finish = Some(alloc::boxed::Box::new(callback));
        self
    }

    /// Sets the persisted duration before committing.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.update = self.update.duration(seconds);
        self
    }

    /// Sets the persisted timing function before committing.
    #[must_use]
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.update = self.update.timing(timing);
        self
    }

    /// Sets the persisted opacity before committing.
    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.update = self.update.opacity(opacity);
        self
    }

    /// Replaces the whole options update.
    #[must_use]
    pub fn update(mut self, update: OptionsUpdate) -> Self {
        self.update = update;
        self
    }
}

/// Matrix stack plus pending commit state for one element.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformStack {
    matrices: MatrixStack,
    options: TransitionOptions,
    pending: Option<ListenerId>,
    commits: u64,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Creates a stack with default options and one identity frame.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(TransitionOptions::default())
    }

    /// Creates a stack with the given options and one identity frame.
    #[must_use]
    pub fn with_options(options: TransitionOptions) -> Self {
        let mut matrices = MatrixStack::new();
        matrices.push_identity();
        Self {
            matrices,
            options,
            pending: None,
            commits: 0,
        }
    }

    // -- Matrix stack --

    /// The underlying matrix stack.
    #[must_use]
    pub fn matrices(&self) -> &MatrixStack {
        &self.matrices
    }

    /// Mutable access to the underlying matrix stack.
    pub fn matrices_mut(&mut self) -> &mut MatrixStack {
        &mut self.matrices
    }

    /// Pushes `matrix` as the new current frame.
    pub fn push_matrix(&mut self, matrix: Transform3d) -> &mut Self {
        self.matrices.push(matrix);
        self
    }

    /// Pushes an identity frame.
    pub fn push_identity(&mut self) -> &mut Self {
        self.matrices.push_identity();
        self
    }

    /// Pops the current frame. Popping an empty stack does nothing.
    pub fn pop_matrix(&mut self) -> &mut Self {
        let _ = self.matrices.pop();
        self
    }

    /// The current frame, auto-vivified if the stack is empty.
    pub fn current_matrix(&mut self) -> Transform3d {
        self.matrices.current()
    }

    /// Replaces the current frame, auto-vivifying first if needed.
    pub fn set_current_matrix(&mut self, matrix: Transform3d) -> &mut Self {
        self.matrices.set_current(matrix);
        self
    }

    /// Rotates the current frame; angles in degrees.
    pub fn rotate(&mut self, degrees: impl Into<Axes>) -> &mut Self {
        let a = degrees.into();
        let m = self.matrices.current_mut();
        *m = m.rotate(a.x, a.y, a.z);
        self
    }

    /// Scales the current frame.
    pub fn scale(&mut self, factors: impl Into<Axes>) -> &mut Self {
        let a = factors.into();
        let m = self.matrices.current_mut();
        *m = m.scale(a.x, a.y, a.z);
        self
    }

    /// Translates the current frame.
    pub fn translate(&mut self, offset: impl Into<Axes>) -> &mut Self {
        let a = offset.into();
        let m = self.matrices.current_mut();
        *m = m.translate(a.x, a.y, a.z);
        self
    }

    /// Product of every frame; see [`MatrixStack::cumulative`].
    #[must_use]
    pub fn cumulative_transform(&self) -> Transform3d {
        self.matrices.cumulative()
    }

    /// Translation of the cumulative transform.
    #[must_use]
    pub fn cumulative_translation(&self) -> Axes {
        self.matrices.cumulative_translation()
    }

    /// Diagonal scale of the cumulative transform.
    #[must_use]
    pub fn cumulative_scale(&self) -> Axes {
        self.matrices.cumulative_scale()
    }

    // -- Options --

    /// The persisted options.
    #[must_use]
    pub fn options(&self) -> &TransitionOptions {
        &self.options
    }

    /// Merges `update` into the persisted options.
    pub fn set_options(&mut self, update: OptionsUpdate) -> &mut Self {
        self.options.merge(&update);
        self
    }

    /// Applies one keyed option.
    ///
    /// # Errors
    ///
    /// See [`TransitionOptions::apply`]. The options are unchanged on error.
    pub fn apply_option(&mut self, key: &str, value: OptionValue) -> Result<&mut Self, OptionError> {
        self.options.apply(key, value)?;
        Ok(self)
    }

    /// Sets the transition duration in seconds.
    pub fn set_duration(&mut self, seconds: f64) -> &mut Self {
        self.options.duration = Some(seconds);
        self
    }

    /// Sets the transition timing function.
    pub fn set_timing(&mut self, timing: TimingFunction) -> &mut Self {
        self.options.timing = Some(timing);
        self
    }

    /// Sets the opacity written by subsequent commits.
    pub fn set_opacity(&mut self, opacity: f32) -> &mut Self {
        self.options.opacity = Some(opacity);
        self
    }

    /// Stops writing opacity on subsequent commits.
    pub fn clear_opacity(&mut self) -> &mut Self {
        self.options.opacity = None;
        self
    }

    /// Sets the overlap policy.
    pub fn set_overlap(&mut self, overlap: OverlapPolicy) -> &mut Self {
        self.options.overlap = overlap;
        self
    }

    // -- Commit --

    /// The listener registered by the most recent deferred commit, if this
    /// stack has not superseded it yet.
    ///
    /// The listener may already have fired; only the target knows.
    #[must_use]
    pub fn pending_listener(&self) -> Option<ListenerId> {
        self.pending
    }

    /// Number of commits issued so far.
    #[must_use]
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    /// Writes the pending state to `target`.
    ///
    /// See the [module documentation](self) for the exact sequence.
    pub fn commit<T>(&mut self, target: &mut T, options: CommitOptions) -> &mut Self
    where
        T: RenderTarget + ?Sized,
    {
        self.commit_traced(target, options, &mut Tracer::none())
    }

    /// Like [`commit`](Self::commit), reporting to `tracer`.
    pub fn commit_traced<T>(
        &mut self,
        target: &mut T,
        options: CommitOptions,
        tracer: &mut Tracer<'_>,
    ) -> &mut Self
    where
        T: RenderTarget + ?Sized,
    {
        let CommitOptions {
            skip_transition,
            on_finish,
            update,
        } = options;
        self.options.merge(&update);
        let commit_index = self.commits;
        self.commits += 1;

        if self.options.overlap == OverlapPolicy::Supersede
            && let Some(previous) = self.pending.take()
        {
            let was_pending = target.remove_transition_end_listener(previous);
            tracer.supersede(&SupersedeEvent {
                commit_index,
                listener: previous,
                was_pending,
            });
        }

        let transition_mode = if skip_transition {
            target.set_transition(None);
            TransitionMode::Skipped
        } else {
            let transition = Transition {
                duration: self.options.duration,
                timing: self.options.timing,
            };
            target.set_transition(Some(&transition));
            TransitionMode::Animated {
                duration: self.options.duration,
            }
        };

        let completion = match on_finish {
            None => Completion::None,
            Some(callback) if skip_transition || !self.options.has_duration() => {
                callback();
                Completion::Immediate
            }
            Some(callback) => {
                let id = target.add_transition_end_listener(callback);
                self.pending = Some(id);
                Completion::Deferred(id)
            }
        };

        let transform = self.matrices.cumulative();
        target.set_transform(&transform);
        if let Some(opacity) = self.options.opacity {
            target.set_opacity(opacity);
        }

        tracer.commit(&CommitEvent {
            commit_index,
            depth: self.matrices.len(),
            transform,
            opacity: self.options.opacity,
            transition: transition_mode,
            completion,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::cell::Cell;

    use super::*;
    use crate::headless::{HeadlessTarget, StyleWrite};

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        (hits, move || h.set(h.get() + 1))
    }

    #[test]
    fn new_stack_has_one_identity_frame() {
        let stack = TransformStack::new();
        assert_eq!(stack.matrices().len(), 1);
        assert_eq!(stack.cumulative_transform(), Transform3d::IDENTITY);
    }

    #[test]
    fn rotate_scalar_applies_to_all_axes() {
        let mut a = TransformStack::new();
        let mut b = TransformStack::new();
        a.rotate(5.0);
        b.rotate((5.0, 5.0, 5.0));
        assert_eq!(a.cumulative_transform(), b.cumulative_transform());
    }

    #[test]
    fn rotate_triple_and_axes_agree() {
        let mut a = TransformStack::new();
        let mut b = TransformStack::new();
        a.rotate((1.0, 2.0, 3.0));
        b.rotate(Axes::new(1.0, 2.0, 3.0));
        assert_eq!(a.cumulative_transform(), b.cumulative_transform());
        assert_eq!(
            a.cumulative_transform(),
            Transform3d::IDENTITY.rotate(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn operations_only_touch_current_frame() {
        let mut stack = TransformStack::new();
        stack.translate((10.0, 0.0, 0.0)).push_identity().scale(2.0);
        let frames = stack.matrices().frames();
        assert_eq!(frames[0], Transform3d::from_translation(10.0, 0.0, 0.0));
        assert_eq!(frames[1], Transform3d::from_scale(2.0, 2.0, 2.0));
    }

    #[test]
    fn pop_restores_outer_context() {
        let mut stack = TransformStack::new();
        stack.translate((5.0, 0.0, 0.0));
        let before = stack.cumulative_transform();
        stack.push_identity().rotate((0.0, 0.0, 45.0)).pop_matrix();
        assert_eq!(stack.cumulative_transform(), before);
    }

    #[test]
    fn operations_after_popping_everything_auto_vivify() {
        let mut stack = TransformStack::new();
        stack.pop_matrix().pop_matrix().translate((1.0, 2.0, 3.0));
        assert_eq!(stack.matrices().len(), 1);
        assert_eq!(stack.cumulative_translation(), Axes::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn cumulative_queries_do_not_vivify() {
        let mut stack = TransformStack::new();
        stack.pop_matrix();
        assert_eq!(stack.cumulative_transform(), Transform3d::IDENTITY);
        assert_eq!(stack.cumulative_scale(), Axes::splat(1.0));
        assert!(stack.matrices().is_empty());
    }

    #[test]
    fn nested_frames_compose_outer_on_top() {
        let mut stack = TransformStack::new();
        stack.scale(2.0).push_identity().translate((10.0, 0.0, 0.0));
        // Outer scale applies on top of the inner translation.
        assert_eq!(stack.cumulative_translation(), Axes::new(20.0, 0.0, 0.0));
        assert_eq!(stack.cumulative_scale(), Axes::splat(2.0));
    }

    #[test]
    fn chaining_returns_same_host() {
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        let host: *const TransformStack = &stack;
        let returned: *const TransformStack = stack
            .rotate(1.0)
            .scale(2.0)
            .translate(3.0)
            .commit(&mut target, CommitOptions::new());
        assert!(core::ptr::eq(host, returned), "commit returns the host");
    }

    #[test]
    fn commit_writes_transition_then_transform_then_opacity() {
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack
            .set_duration(0.3)
            .set_timing(TimingFunction::EaseOut)
            .set_opacity(0.25)
            .translate((4.0, 0.0, 0.0))
            .commit(&mut target, CommitOptions::new());

        let transition = Transition {
            duration: Some(0.3),
            timing: Some(TimingFunction::EaseOut),
        };
        assert_eq!(
            target.writes(),
            [
                StyleWrite::Transition(Some(transition)),
                StyleWrite::Transform(Transform3d::from_translation(4.0, 0.0, 0.0)),
                StyleWrite::Opacity(0.25),
            ]
        );
    }

    #[test]
    fn duration_is_rendered_per_property() {
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.set_duration(0.3).commit(&mut target, CommitOptions::new());
        assert_eq!(
            target.style("transition-duration").as_deref(),
            Some("0.3s, 0.3s")
        );
        assert_eq!(
            target.style("transition-property").as_deref(),
            Some("transform, opacity")
        );
    }

    #[test]
    fn skip_transition_clears_transition() {
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.set_duration(1.0);
        stack.commit(&mut target, CommitOptions::new());
        assert!(target.transition().is_some());

        stack.commit(&mut target, CommitOptions::new().skip_transition());
        assert_eq!(target.transition(), None);
        assert_eq!(target.style("transition-property"), None);
    }

    #[test]
    fn skip_transition_is_one_shot() {
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.set_duration(1.0);
        stack.commit(&mut target, CommitOptions::new().skip_transition());
        stack.commit(&mut target, CommitOptions::new());
        assert!(target.transition().is_some(), "next commit animates again");
    }

    #[test]
    fn no_opacity_means_no_opacity_write() {
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.commit(&mut target, CommitOptions::new());
        assert_eq!(target.opacity(), None);
        assert!(
            !target
                .writes()
                .iter()
                .any(|w| matches!(w, StyleWrite::Opacity(_))),
            "opacity must not be written while unset"
        );
    }

    #[test]
    fn commit_update_persists() {
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.commit(&mut target, CommitOptions::new().duration(0.5).opacity(0.8));
        assert_eq!(stack.options().duration, Some(0.5));

        let mut second = HeadlessTarget::new();
        stack.commit(&mut second, CommitOptions::new());
        assert_eq!(second.opacity(), Some(0.8));
        assert_eq!(
            second.style("transition-duration").as_deref(),
            Some("0.5s, 0.5s")
        );
    }

    #[test]
    fn skip_transition_finishes_synchronously() {
        let (hits, on_finish) = counter();
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.set_duration(2.0);
        stack.commit(
            &mut target,
            CommitOptions::new().skip_transition().on_finish(on_finish),
        );
        assert_eq!(hits.get(), 1);
        assert_eq!(target.pending_listeners(), 0);
        target.fire_transition_end();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn missing_duration_finishes_synchronously() {
        let (hits, on_finish) = counter();
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.commit(&mut target, CommitOptions::new().on_finish(on_finish));
        assert_eq!(hits.get(), 1);
        assert_eq!(target.pending_listeners(), 0);
    }

    #[test]
    fn zero_duration_finishes_synchronously() {
        let (hits, on_finish) = counter();
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack
            .set_duration(0.0)
            .commit(&mut target, CommitOptions::new().on_finish(on_finish));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn positive_duration_waits_for_transition_end() {
        let (hits, on_finish) = counter();
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack
            .set_duration(0.3)
            .commit(&mut target, CommitOptions::new().on_finish(on_finish));

        assert_eq!(hits.get(), 0, "must not fire before transition end");
        assert_eq!(target.pending_listeners(), 1);

        target.fire_transition_end();
        assert_eq!(hits.get(), 1);
        assert_eq!(target.pending_listeners(), 0, "listener removes itself");

        target.fire_transition_end();
        assert_eq!(hits.get(), 1, "second signal must not re-invoke");
    }

    #[test]
    fn keep_policy_lets_both_listeners_fire() {
        let (first_hits, first) = counter();
        let (second_hits, second) = counter();
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.set_duration(0.3);
        stack.commit(&mut target, CommitOptions::new().on_finish(first));
        stack
            .translate(5.0)
            .commit(&mut target, CommitOptions::new().on_finish(second));

        assert_eq!(target.pending_listeners(), 2);
        target.fire_transition_end();
        assert_eq!(first_hits.get(), 1);
        assert_eq!(second_hits.get(), 1);
    }

    #[test]
    fn keep_policy_listener_fires_after_latest_write() {
        let (hits, on_finish) = counter();
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.set_duration(0.3);
        stack.commit(&mut target, CommitOptions::new().on_finish(on_finish));
        stack
            .translate((7.0, 0.0, 0.0))
            .commit(&mut target, CommitOptions::new());

        assert_eq!(hits.get(), 0);
        target.fire_transition_end();
        assert_eq!(hits.get(), 1);
        assert_eq!(
            target.transform(),
            Some(Transform3d::from_translation(7.0, 0.0, 0.0)),
            "style surface is last-write-wins"
        );
    }

    #[test]
    fn supersede_policy_removes_previous_listener() {
        let (first_hits, first) = counter();
        let (second_hits, second) = counter();
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.set_duration(0.3).set_overlap(OverlapPolicy::Supersede);

        stack.commit(&mut target, CommitOptions::new().on_finish(first));
        let first_id = stack.pending_listener();
        assert!(first_id.is_some());

        stack.commit(&mut target, CommitOptions::new().on_finish(second));
        assert_ne!(stack.pending_listener(), first_id);
        assert_eq!(target.pending_listeners(), 1);

        target.fire_transition_end();
        assert_eq!(first_hits.get(), 0, "superseded callback never runs");
        assert_eq!(second_hits.get(), 1);
    }

    #[test]
    fn supersede_applies_to_commits_without_callback() {
        let (hits, on_finish) = counter();
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.set_duration(0.3).set_overlap(OverlapPolicy::Supersede);
        stack.commit(&mut target, CommitOptions::new().on_finish(on_finish));
        stack.commit(&mut target, CommitOptions::new());
        assert_eq!(stack.pending_listener(), None);
        assert_eq!(target.fire_transition_end(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn commit_does_not_mutate_stack() {
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.translate(1.0).push_identity().scale(3.0);
        let before = stack.matrices().clone();
        stack.commit(&mut target, CommitOptions::new());
        assert_eq!(stack.matrices(), &before);
    }

    #[test]
    fn single_frame_scenario() {
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.pop_matrix().push_identity();
        stack
            .translate((10.0, 0.0, 0.0))
            .scale(2.0)
            .commit(&mut target, CommitOptions::new().opacity(0.5));

        let expected = Transform3d::IDENTITY
            .translate(10.0, 0.0, 0.0)
            .scale(2.0, 2.0, 2.0);
        assert_eq!(target.transform(), Some(expected));
        assert_eq!(target.style("transform"), Some(expected.to_string()));
        assert_eq!(target.opacity(), Some(0.5));
        assert_eq!(target.style("opacity").as_deref(), Some("0.5"));
    }

    #[test]
    fn apply_option_rejects_unknown_keys() {
        let mut stack = TransformStack::new();
        assert!(stack.apply_option("skipTransition", 1.0.into()).is_err());
        stack.apply_option("duration", 0.3.into()).unwrap();
        assert_eq!(stack.options().duration, Some(0.3));
    }

    #[test]
    fn commit_counter_advances() {
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.commit(&mut target, CommitOptions::new());
        stack.commit(&mut target, CommitOptions::new());
        assert_eq!(stack.commit_count(), 2);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn commit_traced_reports_events() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Sink {
            commits: Vec<CommitEvent>,
            superseded: Vec<SupersedeEvent>,
        }
        impl TraceSink for Sink {
            fn on_commit(&mut self, e: &CommitEvent) {
                self.commits.push(*e);
            }
            fn on_supersede(&mut self, e: &SupersedeEvent) {
                self.superseded.push(*e);
            }
        }

        let mut sink = Sink::default();
        let mut stack = TransformStack::new();
        let mut target = HeadlessTarget::new();
        stack.set_duration(0.3).set_overlap(OverlapPolicy::Supersede);
        {
            let mut tracer = Tracer::new(&mut sink);
            stack.commit_traced(
                &mut target,
                CommitOptions::new().on_finish(|| {}),
                &mut tracer,
            );
            stack.commit_traced(
                &mut target,
                CommitOptions::new().skip_transition(),
                &mut tracer,
            );
        }

        assert_eq!(sink.commits.len(), 2);
        assert!(matches!(sink.commits[0].completion, Completion::Deferred(_)));
        assert_eq!(sink.commits[1].transition, TransitionMode::Skipped);
        assert_eq!(sink.superseded.len(), 1);
        assert!(sink.superseded[0].was_pending);
    }
}
