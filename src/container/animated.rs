//! The animated container and its update protocol.

use crate::animation::resolver::{resolve, AnimationDescriptor};
use crate::constants::BASE_CLASS;
use crate::container::element::Element;
use crate::container::props::AnimatedProps;
use crate::style::classes::class_names;
use crate::style::inline::{
    InlineStyle, ANIMATION_DELAY, ANIMATION_DURATION, ANIMATION_TIMING_FUNCTION, OPACITY,
    POINTER_EVENTS,
};
use crate::style::registry::ClassRegistry;
use crate::validate;

/// A container that toggles CSS animation classes on a visibility flag.
///
/// The only mutable state is the resolved [`AnimationDescriptor`]. It is
/// recomputed exactly when the visibility flag flips; changing any other
/// prop leaves the already-resolved state alone until the next flip. The
/// registry layers (bundled table, bundled extras, custom mapping) are
/// merged once at construction.
pub struct AnimatedContainer<C> {
    props: AnimatedProps<C>,
    registry: ClassRegistry,
    descriptor: Option<AnimationDescriptor>,
}

impl<C> AnimatedContainer<C> {
    /// Create a container. Resolves a descriptor immediately iff
    /// `animate_on_mount` is set; otherwise the first render applies no
    /// animation class and forces opacity from the visibility flag.
    pub fn new(props: AnimatedProps<C>) -> Self {
        let registry = ClassRegistry::layered(&[&ClassRegistry::bundled(), &props.animations]);
        validate::check_props(&props, &registry);

        let descriptor = if props.settings.animate_on_mount {
            Some(resolve_from(&props))
        } else {
            None
        };

        Self {
            props,
            registry,
            descriptor,
        }
    }

    /// Replace the configuration.
    ///
    /// Recomputes the descriptor from the new configuration when, and only
    /// when, the incoming visibility differs from the previously observed
    /// one. The replacement is a single assignment, so a render never sees
    /// a stale animation against a new visibility value.
    pub fn update(&mut self, props: AnimatedProps<C>) {
        if props.is_visible != self.props.is_visible {
            log::debug!(
                "visibility flip {} -> {}: resolving {:?}",
                self.props.is_visible,
                props.is_visible,
                if props.is_visible {
                    &props.settings.animation_in
                } else {
                    &props.settings.animation_out
                }
            );
            self.descriptor = Some(resolve_from(&props));
        }
        self.props = props;
    }

    /// Flip only the visibility flag, keeping the rest of the
    /// configuration. Equivalent to [`update`](Self::update) with the
    /// current props and a new flag.
    pub fn set_visible(&mut self, is_visible: bool) {
        if is_visible != self.props.is_visible {
            self.props.is_visible = is_visible;
            self.descriptor = Some(resolve_from(&self.props));
        }
    }

    /// The current configuration.
    pub fn props(&self) -> &AnimatedProps<C> {
        &self.props
    }

    /// The current visibility flag.
    pub fn is_visible(&self) -> bool {
        self.props.is_visible
    }

    /// The resolved descriptor, `None` until the first resolution.
    pub fn descriptor(&self) -> Option<&AnimationDescriptor> {
        self.descriptor.as_ref()
    }

    /// Compose the render output for the host.
    ///
    /// Style composition order, later wins: animation timing properties
    /// (only once a descriptor exists) and pointer-events, then the opacity
    /// fallback when no animation is resolved, then the caller style
    /// overrides. The caller-supplied map is copied, never mutated.
    pub fn render(&self) -> Element<'_, C> {
        let mut style = InlineStyle::new();

        if let Some(descriptor) = &self.descriptor {
            style.set(ANIMATION_DELAY, &format!("{}ms", descriptor.delay_ms));
            style.set(ANIMATION_TIMING_FUNCTION, &descriptor.easing);
            style.set(ANIMATION_DURATION, &format!("{}ms", descriptor.duration_ms));
        }
        style.set(
            POINTER_EVENTS,
            if self.props.is_visible { "all" } else { "none" },
        );

        // With an animation resolved, its keyframes own the opacity.
        let animation_name = self
            .descriptor
            .as_ref()
            .map(|descriptor| descriptor.name.as_str())
            .filter(|name| !name.is_empty());
        if animation_name.is_none() {
            style.set(OPACITY, if self.props.is_visible { "1" } else { "0" });
        }

        style.merge(&self.props.style);

        let animation_class = animation_name.and_then(|name| {
            let class = self.registry.class_for(name);
            if class.is_none() {
                log::debug!("no class registered for animation {name:?}");
            }
            class
        });

        let class_name = class_names([
            self.props.class_name.as_deref(),
            Some(BASE_CLASS),
            animation_class,
        ]);

        Element {
            class_name,
            style,
            children: self.props.children.as_ref(),
            on_click: self.props.on_click.as_deref(),
            inner_ref: self.props.inner_ref.as_deref(),
        }
    }
}

fn resolve_from<C>(props: &AnimatedProps<C>) -> AnimationDescriptor {
    resolve(
        props.is_visible,
        &props.settings.animation_in,
        &props.settings.animation_out,
        &props.settings.delay,
        &props.settings.duration,
        &props.settings.easing,
    )
}
