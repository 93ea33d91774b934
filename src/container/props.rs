//! Configuration surface for [`AnimatedContainer`](crate::AnimatedContainer).

use crate::animation::params::{EasingParam, TimeParam};
use crate::constants::{
    DEFAULT_ANIMATION_IN, DEFAULT_ANIMATION_OUT, DEFAULT_DELAY_MS, DEFAULT_DURATION_MS,
    DEFAULT_EASING,
};
use crate::style::{inline::InlineStyle, registry::ClassRegistry};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Forwarded click handler; invoked by the host on container clicks.
pub type ClickHandler = dyn Fn() + Send + Sync;

/// Forwarded element-reference callback. The host invokes it with its
/// mounted element; the container never inspects the argument.
pub type RefCallback = dyn Fn(&dyn Any) + Send + Sync;

/// The declarative animation settings, separable from host concerns so
/// they can be loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Animation name when becoming visible
    pub animation_in: String,
    /// Animation name when becoming hidden
    pub animation_out: String,
    /// Per-direction delay in milliseconds
    pub delay: TimeParam,
    /// Per-direction duration in milliseconds
    pub duration: TimeParam,
    /// Per-direction CSS easing
    pub easing: EasingParam,
    /// Resolve a descriptor already at construction
    pub animate_on_mount: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            animation_in: DEFAULT_ANIMATION_IN.to_string(),
            animation_out: DEFAULT_ANIMATION_OUT.to_string(),
            delay: TimeParam::Uniform(DEFAULT_DELAY_MS),
            duration: TimeParam::Uniform(DEFAULT_DURATION_MS),
            easing: EasingParam::Uniform(DEFAULT_EASING.to_string()),
            animate_on_mount: false,
        }
    }
}

impl AnimationSettings {
    /// Parse settings from a JSON object; absent fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Full configuration of an animated container.
///
/// `C` is the host's child-content type; the container only forwards it.
pub struct AnimatedProps<C> {
    /// Caller class appended to the computed class list
    pub class_name: Option<String>,
    /// Caller styles merged last over the computed inline styles
    pub style: InlineStyle,
    /// Drives direction selection
    pub is_visible: bool,
    /// Custom animation-name→class registry, highest registry precedence
    pub animations: ClassRegistry,
    /// The declarative animation settings
    pub settings: AnimationSettings,
    /// Forwarded content
    pub children: Option<C>,
    /// Forwarded click handler
    pub on_click: Option<Box<ClickHandler>>,
    /// Forwarded element-reference callback
    pub inner_ref: Option<Box<RefCallback>>,
}

impl<C> Default for AnimatedProps<C> {
    fn default() -> Self {
        Self {
            class_name: None,
            style: InlineStyle::new(),
            is_visible: true,
            animations: ClassRegistry::new(),
            settings: AnimationSettings::default(),
            children: None,
            on_click: None,
            inner_ref: None,
        }
    }
}

impl<C> AnimatedProps<C> {
    /// Create props with the default configuration: visible, fadeIn /
    /// fadeOut, 300ms, no delay, `ease`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caller class name.
    pub fn with_class_name(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    /// Set the caller style overrides.
    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the visibility flag.
    pub fn with_visibility(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }

    /// Set the custom animation registry layer.
    pub fn with_animations(mut self, animations: ClassRegistry) -> Self {
        self.animations = animations;
        self
    }

    /// Replace the whole declarative settings block.
    pub fn with_settings(mut self, settings: AnimationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the entering animation name.
    pub fn with_animation_in(mut self, name: &str) -> Self {
        self.settings.animation_in = name.to_string();
        self
    }

    /// Set the exiting animation name.
    pub fn with_animation_out(mut self, name: &str) -> Self {
        self.settings.animation_out = name.to_string();
        self
    }

    /// Set the delay parameter.
    pub fn with_delay(mut self, delay: impl Into<TimeParam>) -> Self {
        self.settings.delay = delay.into();
        self
    }

    /// Set the duration parameter.
    pub fn with_duration(mut self, duration: impl Into<TimeParam>) -> Self {
        self.settings.duration = duration.into();
        self
    }

    /// Set the easing parameter.
    pub fn with_easing(mut self, easing: impl Into<EasingParam>) -> Self {
        self.settings.easing = easing.into();
        self
    }

    /// Resolve a descriptor already at construction.
    pub fn animate_on_mount(mut self, animate: bool) -> Self {
        self.settings.animate_on_mount = animate;
        self
    }

    /// Set the forwarded content.
    pub fn with_children(mut self, children: C) -> Self {
        self.children = Some(children);
        self
    }

    /// Set the forwarded click handler.
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Set the forwarded element-reference callback.
    pub fn inner_ref<F>(mut self, callback: F) -> Self
    where
        F: Fn(&dyn Any) + Send + Sync + 'static,
    {
        self.inner_ref = Some(Box::new(callback));
        self
    }
}
