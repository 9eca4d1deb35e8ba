//! Star map hover state and the decorative twinkling background.
//!
//! Hovering a nickname star and hovering the moon are tracked separately.
//! Both overlays render center-screen, so holding both at once overlaps;
//! the state keeps them independent and leaves that overlap alone.

use rand::Rng;

use crate::error::{GreetingError, GreetingResult};
use crate::nickname::{Nickname, NICKNAMES};

/// Hover state of the star map section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkyState {
    selected: Option<usize>,
    moon_lit: bool,
}

impl SkyState {
    /// Pointer entered the star for `NICKNAMES[index]`.
    pub fn enter_star(&mut self, index: usize) -> GreetingResult<&'static Nickname> {
        let nickname = NICKNAMES
            .get(index)
            .ok_or(GreetingError::UnknownNickname(index))?;
        self.selected = Some(index);
        tracing::debug!(nickname = nickname.name, "star hovered");
        Ok(nickname)
    }

    /// Pointer left a star. Clears whatever is selected; the last event wins.
    pub fn leave_star(&mut self) {
        self.selected = None;
    }

    pub fn enter_moon(&mut self) {
        self.moon_lit = true;
        tracing::debug!("moon hovered");
    }

    pub fn leave_moon(&mut self) {
        self.moon_lit = false;
    }

    /// The hovered nickname, if any.
    pub fn selected_star(&self) -> Option<&'static Nickname> {
        self.selected.map(|i| &NICKNAMES[i])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the special nickname message should show.
    pub fn moon_message_visible(&self) -> bool {
        self.moon_lit
    }
}

/// A background star that pulses forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Twinkle {
    /// Horizontal offset, percent of the section width
    pub left: f32,
    /// Vertical offset, percent of the section height
    pub top: f32,
    /// Length of one pulse cycle in seconds, in [1, 3)
    pub duration_s: f32,
    /// Start delay in seconds, in [0, 2)
    pub delay_s: f32,
}

/// Scatter `count` twinkles across the sky.
pub fn twinkles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Twinkle> {
    (0..count)
        .map(|_| Twinkle {
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            duration_s: rng.random_range(1.0..3.0),
            delay_s: rng.random_range(0.0..2.0),
        })
        .collect()
}
