//! Shared test infrastructure for mode-button integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use mode_button::{ButtonEvent, Millis16, ModeButton, TimeSource};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock 16-bit millisecond clock with controllable time
pub struct MockTimeSource {
    current_time: Cell<u16>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u16) -> Self {
        Self {
            current_time: Cell::new(millis),
        }
    }

    /// Advance time by one millisecond, wrapping at 16 bits
    pub fn tick(&self) {
        self.current_time.set(self.current_time.get().wrapping_add(1));
    }

    pub fn set_time(&self, millis: u16) {
        self.current_time.set(millis);
    }

    pub fn millis(&self) -> u16 {
        self.current_time.get()
    }
}

impl TimeSource<Millis16> for MockTimeSource {
    fn now(&self) -> Millis16 {
        Millis16(self.current_time.get())
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Electrical line shared between a test and the pin it hands to the controller
pub struct MockLine {
    high: Cell<bool>,
    reads: Cell<u32>,
}

impl MockLine {
    /// Idle line of a pulled-up input
    pub fn pulled_up() -> Self {
        Self {
            high: Cell::new(true),
            reads: Cell::new(0),
        }
    }

    /// Idle line of a pulled-down input
    pub fn pulled_down() -> Self {
        Self {
            high: Cell::new(false),
            reads: Cell::new(0),
        }
    }

    pub fn set_high(&self, high: bool) {
        self.high.set(high);
    }

    /// Number of times the pin has been read
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    pub fn pin(&self) -> MockPin<'_> {
        MockPin { line: self }
    }
}

/// Input pin reading a [`MockLine`]
pub struct MockPin<'a> {
    line: &'a MockLine,
}

impl ErrorType for MockPin<'_> {
    type Error = core::convert::Infallible;
}

impl InputPin for MockPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.line.reads.set(self.line.reads.get() + 1);
        Ok(self.line.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Error returned by [`FailingPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Pin whose reads always fail
pub struct FailingPin;

impl ErrorType for FailingPin {
    type Error = PinFault;
}

impl InputPin for FailingPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Four-mode button on a mock pin and clock
pub type TestButton<'a> = ModeButton<'a, MockPin<'a>, Millis16, MockTimeSource, 4>;

/// Calls `check` once per millisecond for `millis` milliseconds, recording events
pub fn run_for(
    button: &mut TestButton<'_>,
    timer: &MockTimeSource,
    millis: u16,
) -> heapless::Vec<ButtonEvent, 32> {
    let mut events = heapless::Vec::new();
    for _ in 0..millis {
        timer.tick();
        if let Some(event) = button.check().unwrap() {
            events.push(event).unwrap();
        }
    }
    events
}

/// Holds the button down, then lets go, 100 ms each
pub fn click(
    button: &mut TestButton<'_>,
    line: &MockLine,
    timer: &MockTimeSource,
) -> heapless::Vec<ButtonEvent, 32> {
    let mut events = heapless::Vec::new();
    line.set_high(false);
    events.extend(run_for(button, timer, 100));
    line.set_high(true);
    events.extend(run_for(button, timer, 100));
    events
}
