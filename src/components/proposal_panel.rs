//! Proposal Panel
//!
//! "Will you be my Valentine?" with two ways to say yes and none to say no.
//! Accepting swaps the celebration gif for two hugging cats and the question
//! for an answer. Nothing undoes it short of reloading the page.

use dioxus::prelude::*;
use valentine_ui::Button;

use crate::context::use_greeting;
use crate::theme::assets::{ACCEPTED_GIF, ASKING_GIF, PROPOSAL_BACKGROUND};

/// Labels of the two equivalent accept buttons.
pub const AFFIRMATIVE_ANSWERS: [&str; 2] = ["Yes, of course!", "Yes, definitely!"];

#[component]
pub fn ProposalPanel() -> Element {
    let mut greeting = use_greeting();
    let accepted = greeting.read().proposal.is_accepted();

    rsx! {
        section { class: "snap-section proposal",
            div {
                class: "backdrop",
                style: "background-image: url('{PROPOSAL_BACKGROUND}'); opacity: 0.8;",
            }
            div { class: "proposal-tint" }

            div { class: "proposal-content",
                div { class: "proposal-card",
                    div { class: "pulse",
                        if accepted {
                            img { class: "proposal-gif", src: ACCEPTED_GIF, alt: "Cute cats hugging" }
                        } else {
                            img { class: "proposal-gif", src: ASKING_GIF, alt: "Celebration" }
                        }
                    }

                    if accepted {
                        div { class: "proposal-answer font-handwriting appear", "I Love You ❤️" }
                    } else {
                        h1 { class: "proposal-question font-handwriting glow",
                            "Will you be my Valentine?"
                        }
                        div { class: "proposal-actions",
                            for answer in AFFIRMATIVE_ANSWERS {
                                Button {
                                    key: "{answer}",
                                    onclick: move |_| {
                                        if greeting.write().proposal.accept() {
                                            tracing::info!(answer, "Valentine said yes");
                                        }
                                    },
                                    "{answer}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
