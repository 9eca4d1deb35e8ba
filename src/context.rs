//! Page context for the Valentine greeting.
//!
//! The page's [`GreetingState`] and [`PageConfig`] are provided once at the
//! app root and read by every section through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(GreetingState::default()));
//!
//! // In child components
//! let mut greeting = use_greeting();
//! greeting.write().proposal.accept();
//! ```

use dioxus::prelude::*;
use valentine_core::{GreetingState, PageConfig};

/// Get the page config for the application.
/// Uses the global config set from command line args.
pub fn get_page_config() -> PageConfig {
    crate::get_page_config()
}

/// Hook to access the page's UI state from context.
pub fn use_greeting() -> Signal<GreetingState> {
    use_context::<Signal<GreetingState>>()
}

/// Hook to access the page config from context.
pub fn use_page_config() -> PageConfig {
    use_context::<PageConfig>()
}
