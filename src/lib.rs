#![cfg_attr(not(feature = "std"), no_std)]

//! Debounced push-button handling that cycles a mode counter.
//!
//! # Core Concepts
//!
//! - **`ModeButton`**: Owns an input pin, samples it at a fixed interval and advances a mode on every release
//! - **`Debouncer`**: Filters contact bounce and turns raw samples into `ButtonEvent`s
//! - **`ModeCounter`**: Mode index in `0..N` that wraps around
//! - **`ButtonConfig`**: Sampling interval, debounce delay and active level
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Millis16`**: 16-bit wrapping millisecond instant for truncated tick counters
//!
//! The pin is any `embedded_hal::digital::InputPin`. Configure it with the pull
//! resistor matching the wiring before handing it over: pull-up for the default
//! active-low button.
//!
//! ```ignore
//! let mut button: ModeButton<_, _, _> = ModeButton::new(pin, &time_source);
//! loop {
//!     button.check()?;
//!     render(button.mode());
//! }
//! ```

pub mod controller;
pub mod debounce;
pub mod mode;
pub mod time;
pub mod types;

pub use controller::ModeButton;
pub use debounce::Debouncer;
pub use mode::{DEFAULT_MODE_COUNT, ModeCounter};
pub use time::{Millis16, Millis16Duration, TimeDuration, TimeInstant, TimeSource};
pub use types::{
    ActiveLevel, ButtonConfig, ButtonError, ButtonEvent, DEFAULT_DEBOUNCE_DELAY_MS,
    DEFAULT_SAMPLE_INTERVAL_MS, ModeError,
};
