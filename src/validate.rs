//! Advisory configuration checks.
//!
//! Mirrors the non-blocking shape validation of the host layer: findings
//! are logged, never returned, and never stop a render. Malformed
//! configuration degrades into a container with no animation class.

use crate::container::props::AnimatedProps;
use crate::style::registry::ClassRegistry;

/// Warn about configuration that will silently render without an
/// animation class.
pub fn check_props<C>(props: &AnimatedProps<C>, registry: &ClassRegistry) {
    check_name("animation_in", &props.settings.animation_in, registry);
    check_name("animation_out", &props.settings.animation_out, registry);
}

fn check_name(field: &str, name: &str, registry: &ClassRegistry) {
    if name.is_empty() {
        log::warn!("{field} is empty; the container will render without an animation class");
    } else if registry.class_for(name).is_none() {
        log::warn!(
            "{field} {name:?} has no entry in the merged class registry; \
             the container will render without an animation class"
        );
    }
}
