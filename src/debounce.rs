//! Contact-bounce filter that turns raw pin samples into press/release events.
//!
//! [`Debouncer`] is a pure state machine: it never touches hardware and is fed
//! `(is_active, now)` samples by its owner. A level change is only accepted once
//! the debounce delay has elapsed since the change was first seen, and only if
//! the level still differs from the last stable one at that point.

use crate::time::TimeInstant;
use crate::types::ButtonEvent;

#[derive(Clone, Copy)]
enum Phase<I> {
    /// Samples match the stable level.
    Stable,
    /// A differing sample was seen at `since`; samples are ignored until the delay passes.
    Settling { since: I },
}

/// Debounce unit for a single button.
///
/// The stable level starts out unknown. The first settled sample only
/// establishes it, so a button held down at power-up does not report a press.
pub struct Debouncer<I: TimeInstant> {
    debounce_delay: I::Duration,
    stable: Option<bool>,
    phase: Phase<I>,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer with unknown initial level.
    pub fn new(debounce_delay: I::Duration) -> Self {
        Self {
            debounce_delay,
            stable: None,
            phase: Phase::Stable,
        }
    }

    /// Feeds one sample.
    ///
    /// # Arguments
    /// * `active` - Whether the pin currently reads as pressed
    /// * `now` - Time of the sample
    ///
    /// # Returns
    /// The debounced transition, if this sample completed one.
    pub fn update(&mut self, active: bool, now: I) -> Option<ButtonEvent> {
        match self.phase {
            Phase::Stable => {
                if self.stable != Some(active) {
                    self.phase = Phase::Settling { since: now };
                }
                return None;
            }
            Phase::Settling { since } => {
                if now.duration_since(since) < self.debounce_delay {
                    return None;
                }
                self.phase = Phase::Stable;
            }
        }

        match self.stable {
            None => {
                self.stable = Some(active);
                None
            }
            Some(previous) if previous == active => None,
            Some(_) => {
                self.stable = Some(active);
                Some(if active {
                    ButtonEvent::Pressed
                } else {
                    ButtonEvent::Released
                })
            }
        }
    }

    /// Returns true if the last stable level is pressed.
    pub fn is_pressed(&self) -> bool {
        self.stable == Some(true)
    }

    /// Returns true once the initial level has been established.
    pub fn is_initialized(&self) -> bool {
        self.stable.is_some()
    }

    /// Returns true while a level change is waiting out the debounce delay.
    pub fn is_settling(&self) -> bool {
        matches!(self.phase, Phase::Settling { .. })
    }

    /// Returns the configured debounce delay.
    pub fn debounce_delay(&self) -> I::Duration {
        self.debounce_delay
    }

    /// Forgets the stable level, as after power-up.
    pub fn reset(&mut self) {
        self.stable = None;
        self.phase = Phase::Stable;
    }
}
