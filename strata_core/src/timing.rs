// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition timing functions.
//!
//! [`TimingFunction`] names the easing curve a render target uses for the
//! transition configured by a commit. It parses from and renders to the CSS
//! `transition-timing-function` syntax; evaluating the curve is left to the
//! target.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseTimingError;

/// An easing curve identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TimingFunction {
    /// `ease`, the CSS default.
    #[default]
    Ease,
    /// `linear`.
    Linear,
    /// `ease-in`.
    EaseIn,
    /// `ease-out`.
    EaseOut,
    /// `ease-in-out`.
    EaseInOut,
    /// `step-start`.
    StepStart,
    /// `step-end`.
    StepEnd,
    /// `cubic-bezier(x1, y1, x2, y2)`. `x1` and `x2` lie in `[0, 1]`.
    CubicBezier(f64, f64, f64, f64),
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ease => f.write_str("ease"),
            Self::Linear => f.write_str("linear"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::StepStart => f.write_str("step-start"),
            Self::StepEnd => f.write_str("step-end"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl FromStr for TimingFunction {
    type Err = ParseTimingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimingError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let keyword = [
            ("ease", Self::Ease),
            ("linear", Self::Linear),
            ("ease-in", Self::EaseIn),
            ("ease-out", Self::EaseOut),
            ("ease-in-out", Self::EaseInOut),
            ("step-start", Self::StepStart),
            ("step-end", Self::StepEnd),
        ]
        .into_iter()
        .find(|(name, _)| trimmed.eq_ignore_ascii_case(name));
        if let Some((_, timing)) = keyword {
            return Ok(timing);
        }

        let args = trimmed
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let mut values = [0.0_f64; 4];
        let mut parts = args.split(',');
        for slot in &mut values {
            let part = parts.next().ok_or_else(err)?;
            *slot = part.trim().parse::<f64>().map_err(|_| err())?;
        }
        if parts.next().is_some() {
            return Err(err());
        }
        let [x1, y1, x2, y2] = values;
        let x_in_range = (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2);
        if !x_in_range || !y1.is_finite() || !y2.is_finite() {
            return Err(err());
        }
        Ok(Self::CubicBezier(x1, y1, x2, y2))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimingFunction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <alloc::string::String as serde::Deserialize<'de>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
