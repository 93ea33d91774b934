//! The animated container: configuration, state, and render output.

pub mod animated;
pub mod element;
pub mod props;

pub use animated::AnimatedContainer;
pub use element::Element;
pub use props::{AnimatedProps, AnimationSettings, ClickHandler, RefCallback};
