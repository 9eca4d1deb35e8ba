//! Reusable greeting components
//!
//! Animation is expressed as CSS classes (`pulse`, `glow`, `twinkle`,
//! `pop-in`); the keyframes live in the page stylesheet.

mod button;
mod heart_message;
mod icons;
mod twinkling_sky;

pub use button::*;
pub use heart_message::*;
pub use icons::*;
pub use twinkling_sky::*;
