//! Valentine Greeting Core Library
//!
//! The framework-free half of the greeting page: static data, the UI-state
//! model and the small async helpers that drive it.
//!
//! ## Overview
//!
//! The page owns a single [`GreetingState`]. Every interaction is a method
//! on it (or on one of its parts), so the whole behavior can be exercised
//! without a renderer:
//!
//! ```text
//! GreetingState
//! ├── sky:      SkyState       hovered nickname + moon flag
//! ├── proposal: Proposal       Asking ──accept──▶ Accepted
//! ├── letter:   LetterProgress Typing ──finish──▶ Typed
//! └── hug:      HugMeter       strength 1..=10 + delayed message
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use valentine_core::{GreetingState, HugStrength, RevealPolicy};
//!
//! let mut state = GreetingState::default();
//! state.sky.enter_star(2).unwrap();
//! assert_eq!(state.sky.selected_star().unwrap().name, "Sunshine");
//!
//! let ticket = state.hug.set_strength(HugStrength::new(8).unwrap());
//! assert!(!state.hug.message_visible());
//! state.hug.reveal(ticket, RevealPolicy::Latest);
//! assert!(state.hug.message_visible());
//! ```

pub mod config;
pub mod error;
pub mod hug;
pub mod letter;
pub mod logging;
pub mod nickname;
pub mod proposal;
pub mod sky;
pub mod state;
pub mod style;

// Re-exports
pub use config::{PageConfig, RevealPolicy};
pub use error::{GreetingError, GreetingResult};
pub use hug::{HugMeter, HugStrength, RevealTicket};
pub use letter::{type_out, LetterProgress, Typewriter, LOVE_LETTER};
pub use nickname::{Nickname, Position, SpecialNickname, NICKNAMES, SPECIAL_NICKNAME};
pub use proposal::Proposal;
pub use sky::{twinkles, SkyState, Twinkle};
pub use state::GreetingState;
pub use style::{ScopedStyle, StyleHost, HEART_CURSOR_CSS, HEART_CURSOR_STYLE_ID};
