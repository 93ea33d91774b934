//! Pure resolution of the animation state for a visibility flip.

use crate::animation::params::{Direction, EasingParam, TimeParam};
use crate::constants::{DEFAULT_DELAY_MS, DEFAULT_DURATION_MS, DEFAULT_EASING};
use serde::{Deserialize, Serialize};

/// The resolved animation choice for one direction of a visibility flip.
///
/// This is the only state an [`AnimatedContainer`](crate::AnimatedContainer)
/// holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Animation name, looked up in the class registry at render time
    pub name: String,
    /// Delay before the animation starts, in milliseconds
    pub delay_ms: u32,
    /// Animation duration in milliseconds
    pub duration_ms: u32,
    /// CSS easing keyword or function
    pub easing: String,
}

/// Resolve the animation descriptor for the given visibility and parameters.
///
/// Deterministic and total: no I/O, no side effects, no error conditions.
/// The direction follows the visibility flag; the name is the matching one
/// of `animation_in`/`animation_out`; delay, duration, and easing come from
/// the per-direction lookup of their parameters, falling back to the crate
/// defaults when the active side is unset.
pub fn resolve(
    is_visible: bool,
    animation_in: &str,
    animation_out: &str,
    delay: &TimeParam,
    duration: &TimeParam,
    easing: &EasingParam,
) -> AnimationDescriptor {
    let direction = Direction::from_visibility(is_visible);

    let name = match direction {
        Direction::In => animation_in,
        Direction::Out => animation_out,
    };

    AnimationDescriptor {
        name: name.to_string(),
        delay_ms: delay.for_direction(direction, DEFAULT_DELAY_MS),
        duration_ms: duration.for_direction(direction, DEFAULT_DURATION_MS),
        easing: easing.for_direction(direction, DEFAULT_EASING).to_string(),
    }
}
