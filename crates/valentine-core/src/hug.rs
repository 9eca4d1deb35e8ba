//! Hug meter: a strength slider with a delayed message.
//!
//! Every strength change hides the message and hands back a
//! [`RevealTicket`]. The caller waits out the reveal delay and then presents
//! the ticket; whether a superseded ticket may still show the message is
//! decided by the [`RevealPolicy`].

use std::fmt;
use std::str::FromStr;

use crate::config::RevealPolicy;
use crate::error::{GreetingError, GreetingResult};

/// Hug intensity on the slider, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HugStrength(u8);

impl HugStrength {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> GreetingResult<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(GreetingError::HugStrengthOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Peak scale of the pulsing heart; 1.0 at the default strength.
    pub fn scale(self) -> f32 {
        f32::from(self.0) / 5.0
    }

    /// Fill opacity of the heart, from 0.1 up to fully opaque.
    pub fn fill_opacity(self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl Default for HugStrength {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for HugStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HugStrength {
    type Err = GreetingError;

    /// Parse a range input's value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| GreetingError::InvalidHugStrength(s.to_string()))?;
        Self::new(value)
    }
}

/// Identifies the strength change that scheduled a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket(u64);

/// Slider value plus the delayed "come here" message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HugMeter {
    strength: HugStrength,
    message_visible: bool,
    generation: u64,
}

impl HugMeter {
    /// Store a new strength and hide the message until the returned ticket
    /// is revealed.
    pub fn set_strength(&mut self, strength: HugStrength) -> RevealTicket {
        self.strength = strength;
        self.message_visible = false;
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(strength = strength.get(), ticket = self.generation, "hug strength changed");
        RevealTicket(self.generation)
    }

    /// Present a ticket once its delay has elapsed.
    ///
    /// Returns `true` if the ticket was honored. Under
    /// [`RevealPolicy::Latest`] only the ticket of the most recent change
    /// is honored.
    pub fn reveal(&mut self, ticket: RevealTicket, policy: RevealPolicy) -> bool {
        if policy == RevealPolicy::Latest && !self.is_current(ticket) {
            tracing::trace!(ticket = ticket.0, "stale hug reveal ignored");
            return false;
        }
        self.message_visible = true;
        true
    }

    /// Whether `ticket` belongs to the latest strength change.
    pub fn is_current(&self, ticket: RevealTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn strength(&self) -> HugStrength {
        self.strength
    }

    pub fn message_visible(&self) -> bool {
        self.message_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_bounds() {
        assert!(HugStrength::new(0).is_err());
        assert_eq!(HugStrength::new(1).unwrap().get(), 1);
        assert_eq!(HugStrength::new(10).unwrap().get(), 10);
        assert!(matches!(
            HugStrength::new(11),
            Err(GreetingError::HugStrengthOutOfRange(11))
        ));
        assert!(HugStrength::new(-3).is_err());
    }

    #[test]
    fn parses_slider_values() {
        assert_eq!("7".parse::<HugStrength>().unwrap().get(), 7);
        assert_eq!(" 3 ".parse::<HugStrength>().unwrap().get(), 3);
        assert!(matches!(
            "seven".parse::<HugStrength>(),
            Err(GreetingError::InvalidHugStrength(_))
        ));
        assert!(matches!(
            "42".parse::<HugStrength>(),
            Err(GreetingError::HugStrengthOutOfRange(42))
        ));
    }

    #[test]
    fn visuals_at_default_strength() {
        let s = HugStrength::default();
        assert_eq!(s.get(), 5);
        assert_eq!(s.scale(), 1.0);
        assert_eq!(s.fill_opacity(), 0.5);
    }

    #[test]
    fn change_hides_message_until_revealed() {
        let mut meter = HugMeter::default();
        let ticket = meter.set_strength(HugStrength::new(8).unwrap());
        assert!(!meter.message_visible());
        assert_eq!(meter.strength().get(), 8);

        assert!(meter.reveal(ticket, RevealPolicy::Latest));
        assert!(meter.message_visible());

        meter.set_strength(HugStrength::new(2).unwrap());
        assert!(!meter.message_visible());
    }

    #[test]
    fn latest_policy_ignores_superseded_tickets() {
        let mut meter = HugMeter::default();
        let first = meter.set_strength(HugStrength::new(3).unwrap());
        let second = meter.set_strength(HugStrength::new(9).unwrap());

        assert!(!meter.reveal(first, RevealPolicy::Latest));
        assert!(!meter.message_visible());

        assert!(meter.reveal(second, RevealPolicy::Latest));
        assert!(meter.message_visible());
    }

    #[test]
    fn every_policy_honors_superseded_tickets() {
        let mut meter = HugMeter::default();
        let first = meter.set_strength(HugStrength::new(3).unwrap());
        let _second = meter.set_strength(HugStrength::new(9).unwrap());

        assert!(meter.reveal(first, RevealPolicy::Every));
        assert!(meter.message_visible());
        assert_eq!(meter.strength().get(), 9);
    }
}
