//! The page's complete UI state.

use crate::hug::HugMeter;
use crate::letter::LetterProgress;
use crate::proposal::Proposal;
use crate::sky::SkyState;

/// Everything the greeting page can change at runtime.
///
/// Owned by one page instance and dropped with it; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingState {
    pub sky: SkyState,
    pub proposal: Proposal,
    pub letter: LetterProgress,
    pub hug: HugMeter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = GreetingState::default();
        assert!(state.sky.selected_star().is_none());
        assert!(!state.sky.moon_message_visible());
        assert_eq!(state.hug.strength().get(), 5);
        assert!(!state.hug.message_visible());
        assert!(!state.proposal.is_accepted());
        assert!(!state.letter.is_typed());
    }
}
