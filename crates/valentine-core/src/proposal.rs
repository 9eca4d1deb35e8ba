//! Proposal panel state.

/// Answer to "Will you be my Valentine?".
///
/// There is no decline control and no way back: `Accepted` is terminal
/// until the page is loaded again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Proposal {
    #[default]
    Asking,
    Accepted,
}

impl Proposal {
    /// Accept the proposal. Returns `true` only on the transition itself.
    pub fn accept(&mut self) -> bool {
        match self {
            Proposal::Asking => {
                *self = Proposal::Accepted;
                tracing::info!("proposal accepted");
                true
            }
            Proposal::Accepted => false,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Proposal::Accepted)
    }
}
