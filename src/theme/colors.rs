//! Color constants
//!
//! Valentine palette, mirrored as CSS custom properties in the stylesheet.

#![allow(dead_code)]

// === PINK (Hearts, Buttons) ===
pub const PINK: &str = "#ec4899";
pub const PINK_HOT: &str = "#ff69b4";
pub const PINK_PALE: &str = "#fbcfe8";
pub const PINK_SOFT: &str = "#f472b6";

// === PURPLE (Hug meter gradient) ===
pub const PURPLE: &str = "#9333ea";

// === NIGHT (Star map) ===
pub const MIDNIGHT: &str = "#0a192f";
pub const MIDNIGHT_LIGHTER: &str = "#112240";

// === STARLIGHT ===
pub const STAR_YELLOW: &str = "#fef08a";
pub const STAR_FILL: &str = "rgba(254, 240, 138, 0.5)";
pub const MOON_YELLOW: &str = "#fef9c3";
pub const MOON_FILL: &str = "rgba(254, 240, 138, 0.3)";

// === TEXT ===
pub const TEXT_LIGHT: &str = "#ffffff";
pub const TEXT_INK: &str = "#1f2937";
