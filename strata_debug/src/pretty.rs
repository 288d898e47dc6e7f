// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use strata_core::trace::{CommitEvent, Completion, SupersedeEvent, TraceSink, TransitionMode};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn transition_label(mode: TransitionMode) -> String {
    match mode {
        TransitionMode::Skipped => "skipped".into(),
        TransitionMode::Animated { duration: Some(d) } => format!("{d}s"),
        TransitionMode::Animated { duration: None } => "none".into(),
    }
}

fn completion_label(completion: Completion) -> String {
    match completion {
        Completion::None => "none".into(),
        Completion::Immediate => "immediate".into(),
        Completion::Deferred(id) => format!("deferred({})", id.0),
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_commit(&mut self, e: &CommitEvent) {
        let opacity = e
            .opacity
            .map_or_else(|| "-".into(), |o| format!("{o}"));
        let _ = writeln!(
            self.writer,
            "[commit] #{} depth={} transition={} finish={} opacity={opacity} transform={}",
            e.commit_index,
            e.depth,
            transition_label(e.transition),
            completion_label(e.completion),
            e.transform,
        );
    }

    fn on_supersede(&mut self, e: &SupersedeEvent) {
        let state = if e.was_pending { "pending" } else { "already fired" };
        let _ = writeln!(
            self.writer,
            "[supersede] #{} listener={} {state}",
            e.commit_index, e.listener.0,
        );
    }
}
