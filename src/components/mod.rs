//! Sections of the greeting page.

mod forever;
mod hug_control;
mod love_letter;
mod proposal_panel;
mod star_map;

pub use forever::Forever;
pub use hug_control::HugControl;
pub use love_letter::LoveLetter;
pub use proposal_panel::ProposalPanel;
pub use star_map::StarMap;
