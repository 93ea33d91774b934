//! Dual-shape animation parameters.
//!
//! Delay, duration, and easing can each be given either as a single value
//! applied to both directions, or as per-direction overrides for entering
//! and exiting. The per-direction lookup rules differ on purpose: a time
//! override of exactly `0` counts as set, while an empty easing string
//! counts as unset and falls back.

use serde::{Deserialize, Serialize};

/// Direction of the running transition, derived from visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Becoming visible
    In,
    /// Becoming hidden
    Out,
}

impl Direction {
    /// Derive the direction from a visibility flag.
    pub fn from_visibility(is_visible: bool) -> Self {
        if is_visible {
            Direction::In
        } else {
            Direction::Out
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::In => write!(f, "in"),
            Direction::Out => write!(f, "out"),
        }
    }
}

/// A time value in milliseconds, either uniform or split per direction.
///
/// Deserializes from a bare number (`300`) or from a partial mapping
/// (`{"in": 100, "out": 50}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeParam {
    /// One value for both directions
    Uniform(u32),
    /// Per-direction overrides; a missing side falls back to the default
    PerDirection {
        #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
        enter: Option<u32>,
        #[serde(rename = "out", default, skip_serializing_if = "Option::is_none")]
        exit: Option<u32>,
    },
}

impl TimeParam {
    /// Build a per-direction time parameter.
    pub fn per_direction(enter: Option<u32>, exit: Option<u32>) -> Self {
        TimeParam::PerDirection { enter, exit }
    }

    /// Resolve the value for `direction`, using `fallback` when the
    /// matching side is not set.
    ///
    /// An override of exactly `0` is a set value, never a fallback trigger.
    pub fn for_direction(&self, direction: Direction, fallback: u32) -> u32 {
        match self {
            TimeParam::Uniform(value) => *value,
            TimeParam::PerDirection { enter, exit } => {
                let side = match direction {
                    Direction::In => enter,
                    Direction::Out => exit,
                };
                side.unwrap_or(fallback)
            }
        }
    }
}

impl From<u32> for TimeParam {
    fn from(value: u32) -> Self {
        TimeParam::Uniform(value)
    }
}

/// A CSS easing keyword or function, either uniform or split per direction.
///
/// Deserializes from a bare string (`"ease-out"`) or from a partial mapping
/// (`{"in": "linear"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EasingParam {
    /// One easing for both directions
    Uniform(String),
    /// Per-direction overrides; a missing or empty side falls back
    PerDirection {
        #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
        enter: Option<String>,
        #[serde(rename = "out", default, skip_serializing_if = "Option::is_none")]
        exit: Option<String>,
    },
}

impl EasingParam {
    /// Build a per-direction easing parameter.
    pub fn per_direction(enter: Option<&str>, exit: Option<&str>) -> Self {
        EasingParam::PerDirection {
            enter: enter.map(str::to_string),
            exit: exit.map(str::to_string),
        }
    }

    /// Resolve the easing for `direction`, using `fallback` when the
    /// matching side is missing or empty.
    pub fn for_direction<'a>(&'a self, direction: Direction, fallback: &'a str) -> &'a str {
        match self {
            EasingParam::Uniform(value) => value,
            EasingParam::PerDirection { enter, exit } => {
                let side = match direction {
                    Direction::In => enter,
                    Direction::Out => exit,
                };
                match side {
                    Some(value) if !value.is_empty() => value,
                    _ => fallback,
                }
            }
        }
    }
}

impl From<&str> for EasingParam {
    fn from(value: &str) -> Self {
        EasingParam::Uniform(value.to_string())
    }
}

impl From<String> for EasingParam {
    fn from(value: String) -> Self {
        EasingParam::Uniform(value)
    }
}
