//! Valentine Greeting UI Components
//!
//! Dioxus building blocks for the greeting page, styled by the class names
//! defined in the page's global stylesheet.
//!
//! ## Palette
//!
//! - **Pink (#ec4899)**: hearts, buttons, overlays
//! - **Hot pink (#ff69b4)**: glows and the cursor
//! - **Pale yellow (#fef08a)**: stars and the moon
//! - **Midnight (#0a192f)**: the night sky

pub mod components;

pub use components::*;
