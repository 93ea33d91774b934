//! # Fadelet
//!
//! A small, framework-agnostic show/hide animation container.
//!
//! Given a visibility flag and a per-direction animation configuration,
//! fadelet computes which CSS animation class and which inline timing styles
//! a container element should carry. The host rendering framework mounts the
//! element and the browser animation engine runs the keyframes; this crate
//! only derives the class list and style map.

pub mod animation;
pub mod constants;
pub mod container;
pub mod style;
pub mod validate;

// Re-export public API
pub use animation::{
    params::{Direction, EasingParam, TimeParam},
    resolver::{resolve, AnimationDescriptor},
};

pub use container::{
    animated::AnimatedContainer,
    element::Element,
    props::{AnimatedProps, AnimationSettings, ClickHandler, RefCallback},
};

pub use style::{classes::class_names, inline::InlineStyle, registry::ClassRegistry};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, FadeletError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum FadeletError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Style parse error: {0}")]
    StyleParse(String),
}

/// Error type alias for convenience
pub type Error = FadeletError;
