//! Animation parameter shapes and the descriptor resolver.

pub mod params;
pub mod resolver;

pub use params::{Direction, EasingParam, TimeParam};
pub use resolver::{resolve, AnimationDescriptor};
