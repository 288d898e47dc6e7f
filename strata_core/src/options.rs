// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted commit configuration.
//!
//! [`TransitionOptions`] holds the state that survives between commits:
//! transition duration, timing function, opacity, and the policy for
//! overlapping completions. It changes only through the typed setters on
//! [`TransformStack`](crate::compositor::TransformStack), an
//! [`OptionsUpdate`] merge, or the keyed [`apply`](TransitionOptions::apply)
//! surface.
//!
//! The keyed surface accepts exactly four keys:
//!
//! | key        | value                                   |
//! |------------|-----------------------------------------|
//! | `duration` | non-negative number of seconds          |
//! | `timing`   | timing-function text, e.g. `"ease-in"`  |
//! | `opacity`  | number in `[0, 1]`                      |
//! | `overlap`  | `"keep"` or `"supersede"`               |
//!
//! Every key also accepts [`OptionValue::Unset`], which restores the default.
//! Any other key is rejected with [`OptionError::UnknownKey`].

use alloc::string::{String, ToString};

use crate::error::OptionError;
use crate::timing::TimingFunction;

/// What happens to a pending completion listener when another commit lands
/// before its transition ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OverlapPolicy {
    /// Earlier listeners stay registered and fire on their own
    /// transition-end signal, observing whatever the latest commit wrote.
    #[default]
    Keep,
    /// A new commit removes the previous commit's pending listener; its
    /// callback never runs.
    Supersede,
}

/// Configuration persisted across commits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct TransitionOptions {
    /// Transition duration in seconds. `None` means no animation.
    pub duration: Option<f64>,
    /// Timing function. `None` leaves the target's default (`ease`).
    pub timing: Option<TimingFunction>,
    /// Opacity written on every commit once set.
    pub opacity: Option<f32>,
    /// Policy for overlapping completion listeners.
    pub overlap: OverlapPolicy,
}

impl TransitionOptions {
    /// Whether a commit would animate: the duration is set, positive and not
    /// NaN.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration.is_some_and(|d| d > 0.0)
    }

    /// Overwrites every field that is `Some` in `update`.
    pub fn merge(&mut self, update: &OptionsUpdate) {
        if let Some(duration) = update.duration {
            self.duration = Some(duration);
        }
        if let Some(timing) = update.timing {
            self.timing = Some(timing);
        }
        if let Some(opacity) = update.opacity {
            self.opacity = Some(opacity);
        }
        if let Some(overlap) = update.overlap {
            self.overlap = overlap;
        }
    }

    /// Applies a single keyed option.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError`] for unknown keys, values of the wrong shape, or
    /// unparsable timing functions. On error `self` is unchanged.
    pub fn apply(&mut self, key: &str, value: OptionValue) -> Result<(), OptionError> {
        match key {
            "duration" => {
                self.duration = match value {
                    OptionValue::Unset => None,
                    OptionValue::Number(d) if d >= 0.0 => Some(d),
                    _ => {
                        return Err(OptionError::InvalidValue {
                            key: "duration",
                            expected: "a non-negative number of seconds",
                        });
                    }
                };
            }
            "timing" => {
                self.timing = match value {
                    OptionValue::Unset => None,
                    OptionValue::Text(text) => Some(text.parse()?),
                    OptionValue::Number(_) => {
                        return Err(OptionError::InvalidValue {
                            key: "timing",
                            expected: "a timing function name",
                        });
                    }
                };
            }
            "opacity" => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "opacity lies in [0, 1]; f32 precision is plenty"
                )]
                let opacity = match value {
                    OptionValue::Unset => None,
                    OptionValue::Number(o) if (0.0..=1.0).contains(&o) => Some(o as f32),
                    _ => {
                        return Err(OptionError::InvalidValue {
                            key: "opacity",
                            expected: "a number in [0, 1]",
                        });
                    }
                };
                self.opacity = opacity;
            }
            "overlap" => {
                self.overlap = match value {
                    OptionValue::Unset => OverlapPolicy::default(),
                    OptionValue::Text(text) if text == "keep" => OverlapPolicy::Keep,
                    OptionValue::Text(text) if text == "supersede" => OverlapPolicy::Supersede,
                    _ => {
                        return Err(OptionError::InvalidValue {
                            key: "overlap",
                            expected: "\"keep\" or \"supersede\"",
                        });
                    }
                };
            }
            _ => return Err(OptionError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Applies a batch of keyed options atomically.
    ///
    /// # Errors
    ///
    /// Returns the first [`OptionError`] encountered; in that case none of the
    /// entries are applied.
    pub fn apply_all<'a, I>(&mut self, entries: I) -> Result<(), OptionError>
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        let mut next = *self;
        for (key, value) in entries {
            next.apply(key, value)?;
        }
        *self = next;
        Ok(())
    }
}

/// A value for the keyed option surface.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    /// A numeric value.
    Number(f64),
    /// A textual value.
    Text(String),
    /// Restore the key's default.
    Unset,
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// A partial set of options; `Some` fields overwrite the persisted value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OptionsUpdate {
    /// New duration in seconds.
    pub duration: Option<f64>,
    /// New timing function.
    pub timing: Option<TimingFunction>,
    /// New opacity.
    pub opacity: Option<f32>,
    /// New overlap policy.
    pub overlap: Option<OverlapPolicy>,
}

impl OptionsUpdate {
    /// Sets the duration.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Sets the timing function.
    #[must_use]
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Sets the opacity.
    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Sets the overlap policy.
    #[must_use]
    pub fn overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = Some(overlap);
        self
    }

    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
