// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes one JSON object per event, as a single array, to the given
//! writer.

use std::io::{self, Write};

use serde_json::{Value, json};

use strata_core::trace::{Completion, TransitionMode};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as a pretty-printed JSON array.
///
/// Commit objects carry `"event": "commit"`, the commit index, stack depth,
/// the CSS text of the transform and its 16 column-major components, the
/// opacity (`null` when unset), the transition and the completion handling.
/// Supersede objects carry `"event": "supersede"`.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Commit(e) => {
                let transition = match e.transition {
                    TransitionMode::Skipped => json!({ "mode": "skipped" }),
                    TransitionMode::Animated { duration } => json!({
                        "mode": "animated",
                        "duration": duration,
                    }),
                };
                let completion = match e.completion {
                    Completion::None => json!({ "mode": "none" }),
                    Completion::Immediate => json!({ "mode": "immediate" }),
                    Completion::Deferred(id) => json!({
                        "mode": "deferred",
                        "listener": id.0,
                    }),
                };
                events.push(json!({
                    "event": "commit",
                    "commit_index": e.commit_index,
                    "depth": e.depth,
                    "transform": e.transform.to_string(),
                    "matrix": e.transform.cols.iter().flatten().collect::<Vec<_>>(),
                    "opacity": e.opacity,
                    "transition": transition,
                    "completion": completion,
                }));
            }
            RecordedEvent::Supersede(e) => {
                events.push(json!({
                    "event": "supersede",
                    "commit_index": e.commit_index,
                    "listener": e.listener.0,
                    "was_pending": e.was_pending,
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use strata_core::target::ListenerId;
    use strata_core::trace::{CommitEvent, SupersedeEvent, TraceSink};
    use strata_core::transform::Transform3d;

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_commit(&CommitEvent {
            commit_index: 0,
            depth: 1,
            transform: Transform3d::from_scale(2.0, 2.0, 2.0),
            opacity: None,
            transition: TransitionMode::Animated {
                duration: Some(0.3),
            },
            completion: Completion::Deferred(ListenerId(0)),
        });
        rec.on_supersede(&SupersedeEvent {
            commit_index: 1,
            listener: ListenerId(0),
            was_pending: true,
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0]["event"], "commit");
        assert_eq!(parsed[0]["opacity"], Value::Null);
        assert_eq!(parsed[0]["transition"]["duration"], 0.3);
        assert_eq!(parsed[0]["completion"]["mode"], "deferred");
        assert_eq!(parsed[0]["matrix"].as_array().map(Vec::len), Some(16));
        assert_eq!(
            parsed[0]["transform"],
            "matrix3d(2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1)"
        );

        assert_eq!(parsed[1]["event"], "supersede");
        assert_eq!(parsed[1]["was_pending"], true);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
