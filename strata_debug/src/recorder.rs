// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as little-endian records. [`decode`] reads them back as an
//! iterator of [`RecordedEvent`].

use strata_core::target::ListenerId;
use strata_core::trace::{CommitEvent, Completion, SupersedeEvent, TraceSink, TransitionMode};
use strata_core::transform::Transform3d;

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_COMMIT: u8 = 1;
const TAG_SUPERSEDE: u8 = 2;

const MODE_SKIPPED: u8 = 0;
const MODE_ANIMATED: u8 = 1;

const COMPLETION_NONE: u8 = 0;
const COMPLETION_IMMEDIATE: u8 = 1;
const COMPLETION_DEFERRED: u8 = 2;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f32(&mut self, v: f32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_option_f32(&mut self, v: Option<f32>) {
        self.write_u8(u8::from(v.is_some()));
        self.write_f32(v.unwrap_or(0.0));
    }

    fn write_option_f64(&mut self, v: Option<f64>) {
        self.write_u8(u8::from(v.is_some()));
        self.write_f64(v.unwrap_or(0.0));
    }

    fn write_transform(&mut self, t: &Transform3d) {
        for col in t.cols {
            for v in col {
                self.write_f64(v);
            }
        }
    }

    fn write_mode(&mut self, m: TransitionMode) {
        match m {
            TransitionMode::Skipped => {
                self.write_u8(MODE_SKIPPED);
                self.write_option_f64(None);
            }
            TransitionMode::Animated { duration } => {
                self.write_u8(MODE_ANIMATED);
                self.write_option_f64(duration);
            }
        }
    }

    fn write_completion(&mut self, c: Completion) {
        let (tag, id) = match c {
            Completion::None => (COMPLETION_NONE, 0),
            Completion::Immediate => (COMPLETION_IMMEDIATE, 0),
            Completion::Deferred(id) => (COMPLETION_DEFERRED, id.0),
        };
        self.write_u8(tag);
        self.write_u64(id);
    }
}

impl TraceSink for RecorderSink {
    fn on_commit(&mut self, e: &CommitEvent) {
        self.write_u8(TAG_COMMIT);
        self.write_u64(e.commit_index);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "stack depth capped at u32::MAX for recording"
        )]
        self.write_u32(e.depth.min(u32::MAX as usize) as u32);
        self.write_transform(&e.transform);
        self.write_option_f32(e.opacity);
        self.write_mode(e.transition);
        self.write_completion(e.completion);
    }

    fn on_supersede(&mut self, e: &SupersedeEvent) {
        self.write_u8(TAG_SUPERSEDE);
        self.write_u64(e.commit_index);
        self.write_u64(e.listener.0);
        self.write_u8(u8::from(e.was_pending));
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`CommitEvent`].
    Commit(CommitEvent),
    /// A [`SupersedeEvent`].
    Supersede(SupersedeEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first unknown tag or truncated record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?;
        self.pos += N;
        bytes.try_into().ok()
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.read_array::<1>().map(|[v]| v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    fn read_f32(&mut self) -> Option<f32> {
        self.read_array().map(f32::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_array().map(f64::from_le_bytes)
    }

    fn read_option_f32(&mut self) -> Option<Option<f32>> {
        let present = self.read_u8()?;
        let val = self.read_f32()?;
        Some((present != 0).then_some(val))
    }

    fn read_option_f64(&mut self) -> Option<Option<f64>> {
        let present = self.read_u8()?;
        let val = self.read_f64()?;
        Some((present != 0).then_some(val))
    }

    fn read_transform(&mut self) -> Option<Transform3d> {
        let mut cols = [[0.0; 4]; 4];
        for col in &mut cols {
            for v in col {
                *v = self.read_f64()?;
            }
        }
        Some(Transform3d { cols })
    }

    fn read_mode(&mut self) -> Option<TransitionMode> {
        let tag = self.read_u8()?;
        let duration = self.read_option_f64()?;
        Some(match tag {
            MODE_SKIPPED => TransitionMode::Skipped,
            _ => TransitionMode::Animated { duration },
        })
    }

    fn read_completion(&mut self) -> Option<Completion> {
        let tag = self.read_u8()?;
        let id = self.read_u64()?;
        Some(match tag {
            COMPLETION_NONE => Completion::None,
            COMPLETION_IMMEDIATE => Completion::Immediate,
            _ => Completion::Deferred(ListenerId(id)),
        })
    }

    fn decode_commit(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Commit(CommitEvent {
            commit_index: self.read_u64()?,
            depth: self.read_u32()? as usize,
            transform: self.read_transform()?,
            opacity: self.read_option_f32()?,
            transition: self.read_mode()?,
            completion: self.read_completion()?,
        }))
    }

    fn decode_supersede(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Supersede(SupersedeEvent {
            commit_index: self.read_u64()?,
            listener: ListenerId(self.read_u64()?),
            was_pending: self.read_u8()? != 0,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_u8()? {
            TAG_COMMIT => self.decode_commit(),
            TAG_SUPERSEDE => self.decode_supersede(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
