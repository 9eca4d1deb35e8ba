//! Love letter typist.
//!
//! The letter is revealed one character at a time by a [`Typewriter`],
//! a forward-only cursor over the text. [`type_out`] paces it on the tokio
//! clock. Once the last character is out the page flips its
//! [`LetterProgress`] to `Typed` and renders the whole letter statically.

use std::iter::FusedIterator;
use std::time::Duration;

pub const LOVE_LETTER: &str = "My Dearest Love,\n\n\
Every day with you feels like a beautiful dream come true. \
Your smile brightens my darkest days, and your love gives me strength I never knew I had. \
You're not just my partner, you're my best friend, my confidante, and my soulmate.\n\n\
I love you more with each passing moment.\n\n\
Forever Yours ❤️";

/// Forward-only character reveal over a fixed text.
///
/// Yields each `char` exactly once, in order. There is no reset and the
/// type is deliberately not `Clone`, so a finished typewriter stays finished.
#[derive(Debug)]
pub struct Typewriter<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Typewriter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Everything revealed so far.
    pub fn typed(&self) -> &'a str {
        &self.text[..self.pos]
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn is_done(&self) -> bool {
        self.pos == self.text.len()
    }
}

impl Iterator for Typewriter<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.text[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = &self.text[self.pos..];
        // Every char takes between one and four bytes.
        (rest.len().div_ceil(4), Some(rest.len()))
    }
}

impl FusedIterator for Typewriter<'_> {}

/// Reveal the typewriter's text at `cadence` per character.
///
/// `on_step` receives the typed prefix after every character. Returns the
/// full text once the last character has been revealed.
pub async fn type_out<'a, F>(mut typewriter: Typewriter<'a>, cadence: Duration, mut on_step: F) -> &'a str
where
    F: FnMut(&'a str),
{
    while !typewriter.is_done() {
        tokio::time::sleep(cadence).await;
        typewriter.next();
        on_step(typewriter.typed());
    }
    typewriter.text()
}

/// Whether the letter is still being typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterProgress {
    #[default]
    Typing,
    Typed,
}

impl LetterProgress {
    /// Mark the letter as fully typed. Returns `true` only on the transition.
    pub fn finish(&mut self) -> bool {
        match self {
            LetterProgress::Typing => {
                *self = LetterProgress::Typed;
                tracing::info!("love letter typed");
                true
            }
            LetterProgress::Typed => false,
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, LetterProgress::Typed)
    }
}
