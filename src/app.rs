use dioxus::prelude::*;

use crate::context::get_page_config;
use crate::pages::Greeting;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the page config, then mounts the greeting.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_page_config);
    use_context_provider(|| config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Greeting {}
    }
}
