//! Greeting page - the whole Valentine's card.
//!
//! Five full-height sections stacked in a scroll-snapping container.
//! The page owns the only UI state and the heart cursor; both live exactly
//! as long as the page is mounted.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use valentine_core::{GreetingState, ScopedStyle, HEART_CURSOR_CSS, HEART_CURSOR_STYLE_ID};

use crate::components::{Forever, HugControl, LoveLetter, ProposalPanel, StarMap};
use crate::theme::DomStyleHost;

/// Greeting page component.
#[component]
pub fn Greeting() -> Element {
    let greeting = use_signal(GreetingState::default);
    use_context_provider(|| greeting);

    use_heart_cursor();

    rsx! {
        main { class: "greeting",
            ProposalPanel {}
            StarMap {}
            LoveLetter {}
            HugControl {}
            Forever {}
        }
    }
}

/// Swap the pointer for a heart until the calling component unmounts.
fn use_heart_cursor() {
    let cursor = use_hook(|| {
        Rc::new(RefCell::new(Some(ScopedStyle::acquire(
            DomStyleHost,
            HEART_CURSOR_STYLE_ID,
            HEART_CURSOR_CSS,
        ))))
    });

    use_drop(move || {
        if let Some(style) = cursor.borrow_mut().take() {
            style.release();
        }
    });
}
