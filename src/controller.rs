//! Mode-cycling button controller.
//!
//! Provides [`ModeButton`], which owns a button input pin, its debouncer and a
//! [`ModeCounter`]. The host loop calls [`ModeButton::check`] as often as it
//! likes; the controller rate-limits pin sampling to the configured interval
//! and advances the mode on every debounced release.

use crate::debounce::Debouncer;
use crate::mode::{DEFAULT_MODE_COUNT, ModeCounter};
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ActiveLevel, ButtonConfig, ButtonError, ButtonEvent, ModeError};
use embedded_hal::digital::InputPin;

/// Debounced push button that cycles through `N` modes.
///
/// The pin must already be configured as an input with the pull matching
/// [`ButtonConfig::active_level`] (pull-up for the default active-low wiring).
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `P` - Input pin type
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Number of modes
pub struct ModeButton<'t, P, I, T, const N: usize = DEFAULT_MODE_COUNT>
where
    P: InputPin,
    I: TimeInstant,
    T: TimeSource<I>,
{
    pin: P,
    time_source: &'t T,
    config: ButtonConfig<I::Duration>,
    debouncer: Debouncer<I>,
    last_sample: I,
    mode: ModeCounter<N>,
}

impl<'t, P, I, T, const N: usize> ModeButton<'t, P, I, T, N>
where
    P: InputPin,
    I: TimeInstant,
    T: TimeSource<I>,
{
    /// Creates a controller with 5 ms sampling, 20 ms debounce and active-low wiring.
    pub fn new(pin: P, time_source: &'t T) -> Self {
        Self::with_config(pin, time_source, ButtonConfig::standard())
    }

    /// Creates a controller with a custom configuration.
    ///
    /// The mode starts at 0 and the current time becomes the last sample time,
    /// so the first sample is taken one interval after construction.
    pub fn with_config(pin: P, time_source: &'t T, config: ButtonConfig<I::Duration>) -> Self {
        Self {
            pin,
            time_source,
            config,
            debouncer: Debouncer::new(config.debounce_delay),
            last_sample: time_source.now(),
            mode: ModeCounter::new(),
        }
    }

    /// Polls the button. Call this on every iteration of the main loop.
    ///
    /// Does nothing until the sampling interval has elapsed since the last
    /// sample. Otherwise reads the pin once and runs the debouncer.
    ///
    /// # Returns
    /// * `Ok(Some(event))` - A debounced transition was detected and applied
    /// * `Ok(None)` - No sample taken, or no transition yet
    /// * `Err` - The pin could not be read
    pub fn check(&mut self) -> Result<Option<ButtonEvent>, ButtonError<P::Error>> {
        let now = self.time_source.now();
        if now.duration_since(self.last_sample) < self.config.sample_interval {
            return Ok(None);
        }
        self.last_sample = now;

        let active = self.read_active()?;
        let event = self.debouncer.update(active, now);
        if let Some(event) = event {
            self.handle_event(event);
        }
        Ok(event)
    }

    fn read_active(&mut self) -> Result<bool, ButtonError<P::Error>> {
        let level = match self.config.active_level {
            ActiveLevel::Low => self.pin.is_low(),
            ActiveLevel::High => self.pin.is_high(),
        };
        level.map_err(ButtonError::Pin)
    }

    fn handle_event(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::Pressed => {
                // No action on press; the mode changes on release.
                #[cfg(feature = "defmt")]
                defmt::trace!("button pressed");
            }
            ButtonEvent::Released => {
                let _mode = self.mode.advance();
                #[cfg(feature = "defmt")]
                defmt::debug!("button released, mode -> {}/{}", _mode, N);
            }
        }
    }

    /// Returns the current mode index, always below `N`.
    pub fn mode(&self) -> usize {
        self.mode.index()
    }

    /// Returns the mode counter.
    pub fn mode_counter(&self) -> &ModeCounter<N> {
        &self.mode
    }

    /// Selects a mode directly.
    pub fn set_mode(&mut self, index: usize) -> Result<(), ModeError> {
        self.mode.set(index)
    }

    /// Returns to mode 0.
    pub fn reset_mode(&mut self) {
        self.mode.reset();
    }

    /// Returns true if the debounced button state is pressed.
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ButtonConfig<I::Duration> {
        &self.config
    }

    /// Consumes the controller and returns the pin.
    pub fn release(self) -> P {
        self.pin
    }
}
