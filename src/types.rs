//! Core types shared by the debouncer and the controller.

use crate::time::{Millis16Duration, TimeDuration};

/// Default minimum time between two pin samples, in milliseconds.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 5;

/// Default time a level change must settle before it is accepted, in milliseconds.
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 20;

/// A debounced button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button became active (pressed).
    Pressed,

    /// Button became inactive (released).
    Released,
}

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pulled-up input, button shorts to ground. Idle reads high.
    #[default]
    Low,

    /// Pulled-down input, button shorts to supply. Idle reads low.
    High,
}

/// Timing and wiring configuration for a button.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig<D: TimeDuration> {
    /// Minimum time between two pin samples.
    pub sample_interval: D,

    /// Time a changed level must persist before it is reported.
    pub debounce_delay: D,

    /// Level at which the button counts as pressed.
    pub active_level: ActiveLevel,
}

impl<D: TimeDuration> ButtonConfig<D> {
    /// Creates an active-low configuration with the given timings.
    pub fn new(sample_interval: D, debounce_delay: D) -> Self {
        Self {
            sample_interval,
            debounce_delay,
            active_level: ActiveLevel::Low,
        }
    }

    /// Sets the active level.
    pub fn active_level(mut self, active_level: ActiveLevel) -> Self {
        self.active_level = active_level;
        self
    }

    /// 5 ms sampling, 20 ms debounce, active low.
    pub fn standard() -> Self {
        Self::new(
            D::from_millis(DEFAULT_SAMPLE_INTERVAL_MS),
            D::from_millis(DEFAULT_DEBOUNCE_DELAY_MS),
        )
    }
}

impl Default for ButtonConfig<Millis16Duration> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Errors that can occur while polling a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonError<E> {
    /// Reading the input pin failed.
    Pin(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for ButtonError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ButtonError::Pin(err) => write!(f, "failed to read button pin: {:?}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for ButtonError<E> {}

/// Errors from explicit mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeError {
    /// Requested index is not below the mode count.
    OutOfRange {
        /// Requested mode index
        index: usize,
        /// Number of modes
        count: usize,
    },
}

impl core::fmt::Display for ModeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ModeError::OutOfRange { index, count } => {
                write!(f, "mode {} out of range, only {} modes available", index, count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModeError {}
