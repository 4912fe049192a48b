//! Tick-based typewriter effect over a cyclic phrase list.
//!
//! The machine types one character per tick, holds at the full
//! phrase, deletes one character per tick back to empty, then
//! advances to the next phrase, wrapping at the end. Each tick also
//! decides the delay before the next one:
//!
//! - typing: 100 ms
//! - holding a completed phrase: 2000 ms
//! - deleting: 50 ms
//! - resting on empty before the next phrase: 500 ms
//!
//! The machine itself has no clock; a driver schedules the next tick
//! from [`Typewriter::delay`]. Only one deadline should be live at a
//! time — replacing the machine (and its deadline) is how a new run
//! cancels a previous one before it mutates any further text.

use std::time::Duration;

const TYPE_DELAY: Duration = Duration::from_millis(100);
const HOLD_DELAY: Duration = Duration::from_millis(2000);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const REST_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    /// Number of characters of the current phrase on display.
    shown: usize,
    deleting: bool,
    delay: Duration,
}

impl Typewriter {
    /// Starts a fresh run over `phrases`, beginning empty. The first
    /// tick is due immediately. An empty phrase list yields a machine
    /// whose ticks are no-ops.
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            deleting: false,
            delay: Duration::ZERO,
        }
    }

    /// Advances the effect by one step and sets the next delay.
    pub fn tick(&mut self) {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return;
        };
        let len = phrase.chars().count();

        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            self.delay = DELETE_DELAY;

            if self.shown == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                self.delay = REST_DELAY;
            }
        } else {
            self.shown = (self.shown + 1).min(len);
            self.delay = TYPE_DELAY;

            if self.shown == len {
                self.deleting = true;
                self.delay = HOLD_DELAY;
            }
        }
    }

    /// The text currently on display.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Delay before the next tick is due.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
